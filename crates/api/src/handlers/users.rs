//! Handlers for per-user vote records.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracktag_db::repositories::UserVoteRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}/votes
///
/// The user's vote record. A user who has never voted gets an empty record.
pub async fn get_votes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = UserVoteRepo::find_or_empty(state.store(), &user_id).await?;
    Ok(Json(DataResponse { data: record }))
}
