//! Genre vote reconciliation.
//!
//! [`reconcile`] toggles one user's vote for one genre on one track. It takes
//! both aggregates by reference and returns new values, so the caller decides
//! when (and whether) to persist them. The two aggregates live in different
//! documents and are written independently; nothing here makes those writes
//! atomic.

use serde::Serialize;

use crate::error::CoreError;
use crate::track::Track;
use crate::vote::{UserVoteRecord, VoteAction};

/// Result of a single vote toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub track: Track,
    pub user_record: UserVoteRecord,
    pub action: VoteAction,
}

/// Toggle `user_record`'s vote for `genre_name` on `track`.
///
/// If the user already voted for the genre the vote is withdrawn, otherwise
/// it is cast. Both the genre tally and `total_count` move by one in the same
/// direction. Fails with [`CoreError::InvalidGenre`] when the track has no
/// such genre; the inputs are never modified.
pub fn reconcile(
    track: &Track,
    user_record: &UserVoteRecord,
    genre_name: &str,
) -> Result<Reconciliation, CoreError> {
    let index = track
        .genre
        .iter()
        .position(|g| g.name == genre_name)
        .ok_or_else(|| CoreError::InvalidGenre {
            track_id: track.id.clone(),
            genre: genre_name.to_string(),
        })?;

    let mut next_track = track.clone();
    let mut next_record = user_record.clone();

    let action = if user_record.has_voted(&track.id, genre_name) {
        let tally = &mut next_track.genre[index];
        tally.count = tally.count.checked_sub(1).ok_or_else(|| {
            CoreError::Internal(format!(
                "Genre '{genre_name}' on track {} is at zero but has a recorded vote",
                track.id
            ))
        })?;
        next_track.total_count = next_track.total_count.checked_sub(1).ok_or_else(|| {
            CoreError::Internal(format!(
                "Track {} totalCount is at zero but has a recorded vote",
                track.id
            ))
        })?;

        if let Some(genres) = next_record.voted_genre.get_mut(&track.id) {
            genres.retain(|g| g != genre_name);
            if genres.is_empty() {
                next_record.voted_genre.remove(&track.id);
            }
        }
        VoteAction::Unvoted
    } else {
        next_track.genre[index].count += 1;
        next_track.total_count += 1;
        next_record
            .voted_genre
            .entry(track.id.clone())
            .or_default()
            .push(genre_name.to_string());
        VoteAction::Voted
    };

    Ok(Reconciliation {
        track: next_track,
        user_record: next_record,
        action,
    })
}
