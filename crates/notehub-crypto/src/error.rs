//! Error types for one-time code operations.

use thiserror::Error;

/// Result type for cryptographic operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// One-time code operation errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Hashing failed (parameter construction or Argon2 failure).
    #[error("Code hashing failed: {0}")]
    Hashing(String),

    /// Code too short to be worth hashing.
    #[error("Code too short (minimum {0} digits required)")]
    CodeTooShort(usize),
}
