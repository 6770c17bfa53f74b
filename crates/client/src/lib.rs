//! `bibliotek-client` — authenticated request client for the library API.
//!
//! Wraps every outbound call with bearer-token attachment, a single silent
//! token refresh when credentials are missing or rejected, envelope
//! unwrapping, and error normalization. The refresh credential itself is an
//! HTTP-only cookie handled by the underlying cookie store; this crate only
//! ever sees the short-lived bearer token.

pub mod books;
pub mod categories;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod requests;
pub mod session_store;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::ApiEnvelope;
pub use error::{ClientError, FALLBACK_MESSAGE};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
