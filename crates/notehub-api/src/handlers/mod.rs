//! Handler modules for notehub-api.

pub mod notes;
pub mod verification;
