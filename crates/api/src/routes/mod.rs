pub mod health;
pub mod tracks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tracks                                  list (ranked)
/// /tracks/{id}                             get
/// /tracks/{id}/genres/{name}/vote          toggle vote (POST)
///
/// /users/{id}/votes                        get vote record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", tracks::router())
        .nest("/users", users::router())
}
