//! PostgreSQL-backed document store.
//!
//! Every collection shares the `documents` table; a document body is a
//! JSONB object. Partial writes use JSONB concatenation (`data || patch`),
//! which replaces exactly the top-level keys present in the patch.

use async_trait::async_trait;
use sqlx::types::Json;

use crate::store::{Document, DocumentStore, StoreError};
use crate::DbPool;

/// [`DocumentStore`] over a sqlx connection pool.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn read_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let row: Option<Json<Document>> =
            sqlx::query_scalar("SELECT data FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::ReadFailed {
                    collection: collection.to_string(),
                    id: id.to_string(),
                    source: Box::new(e),
                })?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn write_document(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<(), StoreError> {
        let fields: Vec<&str> = patch.keys().map(String::as_str).collect();
        tracing::debug!(collection, id, ?fields, "Writing document patch");

        sqlx::query(
            "INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) DO UPDATE SET \
                 data = documents.data || EXCLUDED.data, \
                 updated_at = NOW()",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(&patch))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::WriteFailed {
            collection: collection.to_string(),
            id: id.to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) DO NOTHING",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(&document))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::WriteFailed {
            collection: collection.to_string(),
            id: id.to_string(),
            source: Box::new(e),
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let rows: Vec<(String, Json<Document>)> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = $1 ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::ListFailed {
                    collection: collection.to_string(),
                    source: Box::new(e),
                })?;

        Ok(rows.into_iter().map(|(id, Json(doc))| (id, doc)).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
