//! One-time verification code validation.
//!
//! Validation is a read-only guard-clause chain over a user record
//! snapshot. Each check short-circuits with a structured rejection reason;
//! callers translate reasons into user-facing messages and own everything
//! stateful around the check (clearing a consumed hash, rate limiting
//! retries, re-issuing codes).
//!
//! Per issued code the lifecycle is: issued, then either consumed by a
//! successful validation or expired by the clock. A failed validation
//! leaves the code issued; retries remain possible until expiry.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::UserRecord;

/// Why a submitted code was rejected.
///
/// All variants are expected outcomes, locally recoverable by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRejection {
    /// No user record was supplied.
    #[error("user not found")]
    UserNotFound,

    /// No code has been issued, or the prior code was already consumed.
    #[error("no verification code issued")]
    NoCodeIssued,

    /// The issued code's expiry has passed.
    #[error("verification code expired")]
    Expired,

    /// The submitted code does not match the stored hash.
    #[error("verification code mismatch")]
    Mismatch,
}

/// Compares a submitted code against a stored hash.
///
/// The seam between the validation policy and the hashing primitive.
/// Implementations must compare in constant time with respect to the
/// submitted code and must fail closed on malformed stored hashes.
pub trait CodeVerifier: Send + Sync {
    fn verify(&self, submitted: &str, code_hash: &str) -> bool;
}

/// Validate a submitted one-time code against `user`'s stored record.
///
/// Checks run in a fixed order and the first failure wins: missing user,
/// then missing/cleared hash, then expiry, then the hash comparison.
/// Expiry is checked strictly before the comparison, so a stale code is
/// reported as [`CodeRejection::Expired`] without paying for the hash work.
///
/// On success the untouched user record is returned; this function never
/// mutates state. `now` is taken explicitly so the outcome is a pure
/// function of its arguments.
pub fn validate_code<'a>(
    user: Option<&'a UserRecord>,
    submitted: &str,
    now: DateTime<Utc>,
    verifier: &dyn CodeVerifier,
) -> Result<&'a UserRecord, CodeRejection> {
    let user = user.ok_or(CodeRejection::UserNotFound)?;

    let verification = user
        .verification
        .as_ref()
        .filter(|v| v.is_issued())
        .ok_or(CodeRejection::NoCodeIssued)?;

    if now >= verification.expires_at {
        return Err(CodeRejection::Expired);
    }

    // is_issued() above guarantees the hash is present and non-empty.
    let code_hash = verification.code_hash.as_deref().unwrap_or_default();
    if !verifier.verify(submitted, code_hash) {
        return Err(CodeRejection::Mismatch);
    }

    Ok(user)
}
