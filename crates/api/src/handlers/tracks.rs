//! Handlers for listing tracks and toggling genre votes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracktag_core::error::CoreError;
use tracktag_core::track::{rank_tracks, Track};
use tracktag_core::vote::{ToggleVote, UserVoteRecord, VoteAction};
use tracktag_db::repositories::TrackRepo;
use tracktag_db::voting;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a vote toggle.
#[derive(Debug, Serialize)]
pub struct VoteResult {
    pub action: VoteAction,
    /// The updated track, genres in display order.
    pub track: Track,
    /// The user's updated vote record.
    pub votes: UserVoteRecord,
}

/// GET /api/v1/tracks
///
/// All tracks by descending `totalCount`, each with its genres by
/// descending count. Ties keep document-id order.
pub async fn list_tracks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut tracks = TrackRepo::list(state.store()).await?;
    rank_tracks(&mut tracks);
    let tracks: Vec<Track> = tracks.into_iter().map(Track::into_ranked).collect();

    Ok(Json(DataResponse { data: tracks }))
}

/// GET /api/v1/tracks/{id}
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::find_by_id(state.store(), &id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Track",
            id: id.clone(),
        })?;

    Ok(Json(DataResponse {
        data: track.into_ranked(),
    }))
}

/// POST /api/v1/tracks/{id}/genres/{name}/vote
///
/// Toggle the caller's vote for one genre on a track. Voting again for the
/// same genre withdraws the vote.
pub async fn toggle_vote(
    State(state): State<AppState>,
    Path((track_id, genre)): Path<(String, String)>,
    payload: Result<Json<ToggleVote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let outcome = voting::toggle_vote(state.store(), &track_id, &input.user_id, &genre).await?;

    Ok(Json(DataResponse {
        data: VoteResult {
            action: outcome.action,
            track: outcome.track.into_ranked(),
            votes: outcome.user_record,
        },
    }))
}
