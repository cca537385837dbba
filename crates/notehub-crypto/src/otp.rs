//! One-time code generation and hashing using Argon2id.
//!
//! Verification codes are short and numeric, so their entropy is far below
//! a passphrase's. The per-issuance salt and the memory-hard work factor
//! are what keep a leaked hash from being brute-forced offline; never store
//! a code under a fast unsalted digest.

use argon2::{
    password_hash::{rand_core::OsRng as SaltRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::{rngs::OsRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};

/// Minimum code length accepted for hashing.
pub const MIN_CODE_LENGTH: usize = 4;

/// Code length issued by default.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Argon2id parameters for code hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpParams {
    /// Memory in KiB (default: 19456 = 19 MiB).
    pub memory_kib: u32,
    /// Time iterations (default: 2).
    pub iterations: u32,
    /// Parallelism degree (default: 1).
    pub parallelism: u32,
}

impl Default for OtpParams {
    fn default() -> Self {
        Self {
            memory_kib: 19456, // 19 MiB
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl OtpParams {
    /// Create hardened parameters for long code lifetimes.
    pub fn hardened() -> Self {
        Self {
            memory_kib: 65536, // 64 MiB
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Plaintext code wrapper with automatic zeroization on drop.
///
/// The plaintext exists only between generation and delivery; holders
/// should drop it as soon as it has been handed off.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OneTimeCode {
    code: String,
}

impl OneTimeCode {
    /// Get the plaintext digits.
    pub fn as_str(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneTimeCode")
            .field("code", &"[REDACTED]")
            .finish()
    }
}

/// Generate a random numeric code of the given length.
pub fn generate_code(length: usize) -> CryptoResult<OneTimeCode> {
    if length < MIN_CODE_LENGTH {
        return Err(CryptoError::CodeTooShort(MIN_CODE_LENGTH));
    }

    let mut rng = OsRng;
    let code: String = (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();

    Ok(OneTimeCode { code })
}

/// Hash a code using Argon2id with a fresh random salt.
///
/// Returns a PHC-format string (`$argon2id$v=19$...`) that embeds the salt
/// and parameters, so verification needs no side-channel configuration.
pub fn hash_code(code: &str, params: &OtpParams) -> CryptoResult<String> {
    if code.len() < MIN_CODE_LENGTH {
        return Err(CryptoError::CodeTooShort(MIN_CODE_LENGTH));
    }

    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        None,
    )
    .map_err(|e| CryptoError::Hashing(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);
    let salt = SaltString::generate(&mut SaltRng);

    let hash = argon2
        .hash_password(code.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a code against a PHC-format hash string.
///
/// Fails closed: a malformed stored hash verifies as `false` rather than
/// erroring. The comparison recomputes the hash and checks equality in
/// constant time.
pub fn verify_code(code: &str, code_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(code_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(code.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fast parameters so the test suite doesn't burn minutes on Argon2.
    fn test_params() -> OtpParams {
        OtpParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_generated_code_is_numeric_with_requested_length() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.as_str().len(), DEFAULT_CODE_LENGTH);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_rejects_short_lengths() {
        let err = generate_code(3).unwrap_err();
        assert!(matches!(err, CryptoError::CodeTooShort(MIN_CODE_LENGTH)));
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_code("482916", &test_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_code("482916", &hash));
        assert!(!verify_code("482917", &hash));
    }

    #[test]
    fn test_same_code_hashes_differently() {
        let params = test_params();
        let first = hash_code("482916", &params).unwrap();
        let second = hash_code("482916", &params).unwrap();

        // Fresh salt per issuance: the strings differ, both still verify.
        assert_ne!(first, second);
        assert!(verify_code("482916", &first));
        assert!(verify_code("482916", &second));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_code("482916", "not-a-phc-string"));
        assert!(!verify_code("482916", ""));
    }

    #[test]
    fn test_hash_rejects_short_codes() {
        let err = hash_code("123", &test_params()).unwrap_err();
        assert!(matches!(err, CryptoError::CodeTooShort(_)));
    }

    #[test]
    fn test_code_debug_is_redacted() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        let rendered = format!("{:?}", code);
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(code.as_str()));
    }
}
