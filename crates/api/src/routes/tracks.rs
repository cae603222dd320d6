use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Track routes mounted at `/tracks`.
///
/// ```text
/// GET  /                           -> list_tracks
/// GET  /{id}                       -> get_track
/// POST /{id}/genres/{name}/vote    -> toggle_vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list_tracks))
        .route("/{id}", get(tracks::get_track))
        .route("/{id}/genres/{name}/vote", post(tracks::toggle_vote))
}
