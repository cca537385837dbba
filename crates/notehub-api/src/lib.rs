//! # notehub-api
//!
//! HTTP API server for NoteHub.
//!
//! Exposes the note-serving and account-verification endpoints on top of
//! the notehub-core policies. Persistence behind the handlers is the
//! in-memory [`store::MemoryStore`]; swapping in a database layer means
//! implementing the notehub-core storage traits against it.

pub mod app;
pub mod error;
pub mod handlers;
pub mod store;

pub use app::{router, ApiDoc, AppState, Argon2CodeVerifier};
pub use error::ApiError;
pub use store::MemoryStore;
