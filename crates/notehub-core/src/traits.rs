//! Core traits for notehub abstractions.
//!
//! These traits define the persistence interface the policy callers load
//! their snapshots through, enabling pluggable backends and testability.
//! The policy functions themselves never touch storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{CollectionAccess, NoteAccess, UserRecord};

/// A note as loaded for an access check: ownership, the note's own access
/// snapshot, and the collection it lives in. A note belongs to exactly one
/// collection.
#[derive(Debug, Clone)]
pub struct StoredNote {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub collection_id: Uuid,
    pub title: String,
    pub content: String,
    pub access: NoteAccess,
}

/// Repository for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by id, or `None` if unknown.
    async fn fetch_user(&self, id: Uuid) -> Result<Option<UserRecord>>;

    /// Mark a user verified and clear any issued code hash.
    ///
    /// This is the "consume" step of the code lifecycle; validation itself
    /// never mutates.
    async fn mark_verified(&self, id: Uuid) -> Result<()>;
}

/// Repository for notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetch a note by id.
    async fn fetch_note(&self, id: Uuid) -> Result<Option<StoredNote>>;
}

/// Repository for collections.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch a collection's access snapshot by id.
    async fn fetch_collection(&self, id: Uuid) -> Result<Option<CollectionAccess>>;
}
