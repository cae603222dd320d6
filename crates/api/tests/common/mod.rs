#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tracktag_api::config::ServerConfig;
use tracktag_api::router::build_app_router;
use tracktag_api::state::AppState;
use tracktag_core::track::{GenreTally, Track};
use tracktag_db::memory_store::MemoryDocumentStore;
use tracktag_db::repositories::TrackRepo;
use tracktag_db::store::DocumentStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        seed_tracks_path: None,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn DocumentStore>) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

/// The `t1` track: genre A with 3 votes, genre B with 1.
pub fn sample_track() -> Track {
    let mut track = Track::new(
        "t1",
        vec![GenreTally::new("A", 3), GenreTally::new("B", 1)],
    );
    track.name = Some("After LIKE".into());
    track.artist = Some("IVE".into());
    track
}

/// A memory store seeded with the given tracks.
pub async fn seeded_store(tracks: &[Track]) -> Arc<MemoryDocumentStore> {
    let store = Arc::new(MemoryDocumentStore::new());
    for track in tracks {
        TrackRepo::insert(&*store, track).await.unwrap();
    }
    store
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
