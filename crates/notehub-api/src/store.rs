//! In-memory store implementing the notehub-core storage traits.
//!
//! Stands in for the persistence layer behind the HTTP edge. Beyond the
//! read-side traits it owns the verification code lifecycle the policies
//! deliberately do not: issuing (hash + expiry written here) and consuming
//! (hash cleared when a user is marked verified).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use notehub_core::{
    CollectionAccess, CollectionStore, Error, NoteStore, Result, StoredNote, UserRecord,
    UserStore, VerificationCode,
};
use notehub_crypto::{generate_code, hash_code, OneTimeCode, OtpParams, DEFAULT_CODE_LENGTH};

#[derive(Default)]
struct StoreInner {
    users: HashMap<Uuid, UserRecord>,
    notes: HashMap<Uuid, StoredNote>,
    collections: HashMap<Uuid, CollectionAccess>,
}

/// Shared in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: UserRecord) {
        self.inner.write().await.users.insert(user.id, user);
    }

    pub async fn insert_collection(&self, id: Uuid, collection: CollectionAccess) {
        self.inner.write().await.collections.insert(id, collection);
    }

    pub async fn insert_note(&self, note: StoredNote) {
        self.inner.write().await.notes.insert(note.id, note);
    }

    /// Issue a fresh verification code for a user.
    ///
    /// Overwrites any prior hash/expiry pair, so at most one code is live
    /// per user. Returns the plaintext for the delivery channel; only the
    /// hash is stored.
    pub async fn issue_code(
        &self,
        user_id: Uuid,
        params: &OtpParams,
        ttl: Duration,
    ) -> Result<OneTimeCode> {
        // Hash before taking the lock: Argon2 is deliberately slow.
        let code =
            generate_code(DEFAULT_CODE_LENGTH).map_err(|e| Error::Internal(e.to_string()))?;
        let code_hash =
            hash_code(code.as_str(), params).map_err(|e| Error::Internal(e.to_string()))?;
        let expires_at = Utc::now() + ttl;

        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or(Error::UserNotFound(user_id))?;
        user.verification = Some(VerificationCode {
            code_hash: Some(code_hash),
            expires_at,
        });

        Ok(code)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn fetch_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&id).ok_or(Error::UserNotFound(id))?;
        user.verified = true;
        user.verification = None;
        Ok(())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn fetch_note(&self, id: Uuid) -> Result<Option<StoredNote>> {
        Ok(self.inner.read().await.notes.get(&id).cloned())
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn fetch_collection(&self, id: Uuid) -> Result<Option<CollectionAccess>> {
        Ok(self.inner.read().await.collections.get(&id).cloned())
    }
}
