//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tracktag_api::error::AppError;
use tracktag_core::error::CoreError;
use tracktag_db::store::StoreError;
use tracktag_db::voting::VoteError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Track",
        id: "t9".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Track with id t9 not found");
}

#[tokio::test]
async fn invalid_genre_returns_400() {
    let err = AppError::Core(CoreError::InvalidGenre {
        track_id: "t1".into(),
        genre: "Z".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_GENRE");
    assert_eq!(json["error"], "Genre 'Z' does not exist on track t1");
}

#[tokio::test]
async fn internal_core_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("tally underflow on t1".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn read_and_write_failures_have_distinct_codes() {
    let read = AppError::Store(StoreError::ReadFailed {
        collection: "users".into(),
        id: "u1".into(),
        source: "password=hunter2".into(),
    });
    let write = AppError::from(VoteError::Store(StoreError::WriteFailed {
        collection: "users".into(),
        id: "u1".into(),
        source: "password=hunter2".into(),
    }));

    let (read_status, read_json) = error_to_response(read).await;
    let (write_status, write_json) = error_to_response(write).await;

    assert_eq!(read_status, StatusCode::BAD_GATEWAY);
    assert_eq!(write_status, StatusCode::BAD_GATEWAY);
    assert_eq!(read_json["code"], "STORAGE_READ_FAILED");
    assert_eq!(write_json["code"], "STORAGE_WRITE_FAILED");
    assert!(!read_json["error"].as_str().unwrap().contains("hunter2"));
    assert!(!write_json["error"].as_str().unwrap().contains("hunter2"));
}

#[tokio::test]
async fn unavailable_store_returns_503() {
    let err = AppError::Store(StoreError::Unavailable("pool closed".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORAGE_UNAVAILABLE");
}

#[tokio::test]
async fn vote_error_core_variant_keeps_domain_mapping() {
    let err = AppError::from(VoteError::Core(CoreError::Validation("bad".into())));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
