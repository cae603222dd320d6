use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET /{id}/votes -> get_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/votes", get(users::get_votes))
}
