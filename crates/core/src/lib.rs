//! `bibliotek-core` — shared foundation for the library-management client.
//!
//! This crate contains **pure** building blocks (typed identifiers, the
//! domain error model, pagination primitives); no IO, no HTTP.

pub mod error;
pub mod id;
pub mod page;

pub use error::{DomainError, DomainResult};
pub use id::{BookId, CategoryId, RequestId, UserId};
pub use page::{Page, PageQuery, DEFAULT_PAGE_SIZE};
