//! The document store seam.
//!
//! Documents are JSON objects addressed by `(collection, id)`. Writes are
//! partial: only the top-level fields present in the patch are replaced.
//! Each call stands alone; the trait offers no multi-document transaction.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A stored document body.
pub type Document = Map<String, Value>;

/// Boxed cause carried by store failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a [`DocumentStore`].
///
/// A missing document is not an error: reads return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {collection}/{id}: {source}")]
    ReadFailed {
        collection: String,
        id: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to list {collection}: {source}")]
    ListFailed {
        collection: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write {collection}/{id}: {source}")]
    WriteFailed {
        collection: String,
        id: String,
        #[source]
        source: BoxError,
    },

    #[error("Document {collection}/{id} is malformed: {source}")]
    Malformed {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this error happened while reading (as opposed to writing).
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Self::ReadFailed { .. } | Self::ListFailed { .. } | Self::Malformed { .. }
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }
}

/// Storage collaborator holding the `tracks` and `users` collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document. `Ok(None)` means it does not exist.
    async fn read_document(&self, collection: &str, id: &str)
        -> Result<Option<Document>, StoreError>;

    /// Merge `patch` into the document, creating it when absent.
    async fn write_document(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<(), StoreError>;

    /// Insert a whole document unless one already exists under `id`.
    ///
    /// Returns `true` when the document was created.
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<bool, StoreError>;

    /// Every document in `collection`, ordered by id.
    async fn list_documents(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Decode a stored document into a typed value.
pub fn decode<T: DeserializeOwned>(
    collection: &str,
    id: &str,
    document: Document,
) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(document)).map_err(|source| StoreError::Malformed {
        collection: collection.to_string(),
        id: id.to_string(),
        source,
    })
}

/// Encode a typed value as a document body.
///
/// Values that do not serialize to a JSON object are reported as a write
/// failure, since nothing sensible can be stored for them.
pub fn encode<T: Serialize>(collection: &str, id: &str, value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::WriteFailed {
            collection: collection.to_string(),
            id: id.to_string(),
            source: format!("expected a JSON object, got {other}").into(),
        }),
        Err(e) => Err(StoreError::WriteFailed {
            collection: collection.to_string(),
            id: id.to_string(),
            source: Box::new(e),
        }),
    }
}
