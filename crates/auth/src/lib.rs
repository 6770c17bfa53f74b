//! `bibliotek-auth` — pure authentication primitives.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows what
//! a session *is*, not how one is obtained or persisted.

pub mod role;
pub mod session;

pub use role::{Role, RoleParseError};
pub use session::{LoginCredentials, Session};
