//! Repository for the `users` collection.

use tracktag_core::types::USERS_COLLECTION;
use tracktag_core::vote::UserVoteRecord;

use crate::store::{decode, encode, Document, DocumentStore, StoreError};

/// Provides data access for per-user vote records.
pub struct UserVoteRepo;

impl UserVoteRepo {
    /// Find a user's vote record.
    ///
    /// Returns `None` if the user has never voted. A failed read is an error,
    /// never an empty record.
    pub async fn find(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<Option<UserVoteRecord>, StoreError> {
        let Some(doc) = store.read_document(USERS_COLLECTION, user_id).await? else {
            return Ok(None);
        };
        let mut record: UserVoteRecord = decode(USERS_COLLECTION, user_id, doc)?;
        record.user_id = user_id.to_string();
        Ok(Some(record))
    }

    /// Like [`find`](Self::find), with a missing document read as "no votes".
    pub async fn find_or_empty(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<UserVoteRecord, StoreError> {
        Ok(Self::find(store, user_id)
            .await?
            .unwrap_or_else(|| UserVoteRecord::empty(user_id)))
    }

    /// Persist the `votedGenre` field of a record, creating the user
    /// document on first vote.
    pub async fn save_votes(
        store: &dyn DocumentStore,
        record: &UserVoteRecord,
    ) -> Result<(), StoreError> {
        let mut doc = encode(USERS_COLLECTION, &record.user_id, record)?;
        let patch: Document = doc.remove_entry("votedGenre").into_iter().collect();
        store
            .write_document(USERS_COLLECTION, &record.user_id, patch)
            .await
    }
}
