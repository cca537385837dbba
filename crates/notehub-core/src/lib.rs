//! # notehub-core
//!
//! Core types, traits, and policies for NoteHub.
//!
//! This crate provides the domain data structures, the note access
//! decision rule, and the one-time verification code policy that the rest
//! of the NoteHub crates depend on. Both policies are pure functions over
//! explicit snapshots: no I/O, no ambient session state, no caching.

pub mod access;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod verification;

// Re-export commonly used types at crate root
pub use access::can_access_note;
pub use error::{Error, Result};
pub use models::{CollectionAccess, NoteAccess, UserRecord, VerificationCode, Visibility};
pub use traits::{CollectionStore, NoteStore, StoredNote, UserStore};
pub use verification::{validate_code, CodeRejection, CodeVerifier};
