//! `bibliotek-catalog` — books and categories.
//!
//! Read models as the API returns them, the create/update payloads the API
//! accepts, and the deterministic validation applied before anything is sent
//! over the wire.

pub mod book;
pub mod category;

pub use book::{Book, CreateBook, UpdateBook};
pub use category::{Category, CategoryPayload};
