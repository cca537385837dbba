//! Core data models for notehub.
//!
//! These types are shared across all notehub crates and represent the
//! access-relevant snapshots of the domain entities. Policies operate on
//! these snapshots only; they never reach back into storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// =============================================================================
// VISIBILITY
// =============================================================================

/// Visibility level for notes and collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to everyone.
    Public,
    /// Only visible to the owner and explicit collaborators.
    Private,
}

impl Visibility {
    /// Whether this level grants access without a collaborator grant.
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

// =============================================================================
// ACCESS SNAPSHOTS
// =============================================================================

/// Access-relevant snapshot of a note.
///
/// Collaborators are a set: duplicate grants carry no extra meaning. A
/// payload without a `collaborators` key deserializes to the empty set, so
/// the access policy never has to distinguish "absent" from "none".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteAccess {
    pub visibility: Visibility,
    /// Users explicitly granted access to this note.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub collaborators: HashSet<Uuid>,
}

impl NoteAccess {
    /// Create a snapshot with the given visibility and no collaborators.
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            collaborators: HashSet::new(),
        }
    }

    /// Shorthand for a public note without collaborators.
    pub fn public() -> Self {
        Self::new(Visibility::Public)
    }

    /// Shorthand for a private note without collaborators.
    pub fn private() -> Self {
        Self::new(Visibility::Private)
    }

    /// Add a collaborator grant.
    pub fn with_collaborator(mut self, user_id: Uuid) -> Self {
        self.collaborators.insert(user_id);
        self
    }
}

/// Access-relevant snapshot of the collection a note lives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAccess {
    pub visibility: Visibility,
    /// Users explicitly granted access to this collection.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub collaborators: HashSet<Uuid>,
}

impl CollectionAccess {
    /// Create a snapshot with the given visibility and no collaborators.
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            collaborators: HashSet::new(),
        }
    }

    /// Shorthand for a public collection without collaborators.
    pub fn public() -> Self {
        Self::new(Visibility::Public)
    }

    /// Shorthand for a private collection without collaborators.
    pub fn private() -> Self {
        Self::new(Visibility::Private)
    }

    /// Add a collaborator grant.
    pub fn with_collaborator(mut self, user_id: Uuid) -> Self {
        self.collaborators.insert(user_id);
        self
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// One-time verification code attached to a user.
///
/// `code_hash` holds the PHC-format Argon2id hash of the issued code, or
/// nothing once the code has been consumed. The issuing side owns the
/// lifecycle; the validation policy only reads this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCode {
    pub code_hash: Option<String>,
    /// Absolute expiry; the hash is invalid from this instant regardless
    /// of match.
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Whether a code is currently issued (hash present and non-empty).
    pub fn is_issued(&self) -> bool {
        self.code_hash.as_deref().is_some_and(|h| !h.is_empty())
    }
}

/// User record as loaded from the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub verified: bool,
    pub verification: Option<VerificationCode>,
}

impl UserRecord {
    /// Create an unverified user with no code issued.
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            verified: false,
            verification: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Visibility::Public).unwrap(),
            "\"public\""
        );
        let vis: Visibility = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(vis, Visibility::Private);
    }

    #[test]
    fn test_visibility_is_public() {
        assert!(Visibility::Public.is_public());
        assert!(!Visibility::Private.is_public());
    }

    #[test]
    fn test_missing_collaborators_defaults_to_empty_set() {
        let note: NoteAccess = serde_json::from_str(r#"{"visibility":"private"}"#).unwrap();
        assert!(note.collaborators.is_empty());

        let collection: CollectionAccess =
            serde_json::from_str(r#"{"visibility":"public"}"#).unwrap();
        assert!(collection.collaborators.is_empty());
    }

    #[test]
    fn test_duplicate_collaborator_grants_collapse() {
        let id = Uuid::new_v4();
        let note = NoteAccess::private()
            .with_collaborator(id)
            .with_collaborator(id);
        assert_eq!(note.collaborators.len(), 1);
    }

    #[test]
    fn test_verification_code_is_issued() {
        let expires_at = Utc::now();
        let issued = VerificationCode {
            code_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string()),
            expires_at,
        };
        assert!(issued.is_issued());

        let cleared = VerificationCode {
            code_hash: None,
            expires_at,
        };
        assert!(!cleared.is_issued());

        // An empty string is how some stores clear the hash in place.
        let blanked = VerificationCode {
            code_hash: Some(String::new()),
            expires_at,
        };
        assert!(!blanked.is_issued());
    }
}
