//! # notehub-crypto
//!
//! One-time code primitives for NoteHub account verification.
//!
//! This crate generates short numeric verification codes, hashes them for
//! storage, and checks submissions against the stored hash.
//!
//! ## Cryptographic Primitives
//!
//! - **Hashing**: Argon2id with a fresh random salt per issuance, stored
//!   as a PHC-format string
//! - **Random generation**: OS CSPRNG for both codes and salts
//! - **Memory handling**: plaintext codes are zeroized on drop
//!
//! Codes are low-entropy by nature, so the memory-hard work factor carries
//! the load a passphrase's length normally would. Verification recomputes
//! the hash with the parameters embedded in the PHC string and compares in
//! constant time.
//!
//! ## Example
//!
//! ```rust
//! use notehub_crypto::{generate_code, hash_code, verify_code, OtpParams};
//!
//! let params = OtpParams::default();
//! let code = generate_code(6)?;
//! let stored = hash_code(code.as_str(), &params)?;
//!
//! assert!(verify_code(code.as_str(), &stored));
//! assert!(!verify_code("000000", &stored));
//! # Ok::<(), notehub_crypto::CryptoError>(())
//! ```

pub mod error;
pub mod otp;

pub use error::{CryptoError, CryptoResult};
pub use otp::{
    generate_code, hash_code, verify_code, OneTimeCode, OtpParams, DEFAULT_CODE_LENGTH,
    MIN_CODE_LENGTH,
};
