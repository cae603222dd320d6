use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracktag_core::error::CoreError;
use tracktag_db::store::StoreError;
use tracktag_db::voting::VoteError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for document
/// store failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tracktag_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store failure from `tracktag_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<VoteError> for AppError {
    fn from(err: VoteError) -> Self {
        match err {
            VoteError::Core(e) => AppError::Core(e),
            VoteError::Store(e) => AppError::Store(e),
        }
    }
}

/// Malformed or incomplete JSON bodies become a 400 in the usual error shape
/// instead of axum's plain-text rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidGenre { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_GENRE", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Document store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a document store error into an HTTP status, error code, and
/// message.
///
/// Read and write failures get distinct codes so a client never mistakes
/// an unreadable vote record for an empty one. Store details are logged,
/// not returned.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Document store error");
    match err {
        StoreError::WriteFailed { .. } => (
            StatusCode::BAD_GATEWAY,
            "STORAGE_WRITE_FAILED",
            "Failed to save changes to the document store".to_string(),
        ),
        StoreError::ReadFailed { .. } | StoreError::ListFailed { .. } => (
            StatusCode::BAD_GATEWAY,
            "STORAGE_READ_FAILED",
            "Failed to read from the document store".to_string(),
        ),
        StoreError::Malformed { collection, id, .. } => (
            StatusCode::BAD_GATEWAY,
            "STORAGE_READ_FAILED",
            format!("Stored document {collection}/{id} could not be decoded"),
        ),
        StoreError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "STORAGE_UNAVAILABLE",
            "The document store is unavailable".to_string(),
        ),
    }
}
