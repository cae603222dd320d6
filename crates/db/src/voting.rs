//! The vote toggle flow: read both aggregates, reconcile, write both back.
//!
//! The two writes are independent documents with no transaction around
//! them. The track tally is written first; if that fails nothing else is
//! written. If the user record write then fails, the track already carries
//! the new count and the error is still returned to the caller.

use tracktag_core::error::CoreError;
use tracktag_core::reconcile::{reconcile, Reconciliation};

use crate::repositories::{TrackRepo, UserVoteRepo};
use crate::store::{DocumentStore, StoreError};

/// Failure of a vote toggle.
#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Toggle `user_id`'s vote for `genre` on `track_id` and persist the result.
pub async fn toggle_vote(
    store: &dyn DocumentStore,
    track_id: &str,
    user_id: &str,
    genre: &str,
) -> Result<Reconciliation, VoteError> {
    let track = TrackRepo::find_by_id(store, track_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Track",
            id: track_id.to_string(),
        })?;
    let record = UserVoteRepo::find_or_empty(store, user_id).await?;

    let outcome = reconcile(&track, &record, genre)?;

    TrackRepo::save_tally(store, &outcome.track).await?;

    if let Err(e) = UserVoteRepo::save_votes(store, &outcome.user_record).await {
        tracing::warn!(
            track_id,
            user_id,
            genre,
            action = ?outcome.action,
            error = %e,
            "Track tally saved but user vote record was not",
        );
        return Err(e.into());
    }

    tracing::info!(
        track_id,
        user_id,
        genre,
        action = ?outcome.action,
        total_count = outcome.track.total_count,
        "Genre vote toggled",
    );

    Ok(outcome)
}
