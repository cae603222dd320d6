//! Per-user vote records and the vote request payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{TrackId, UserId};

/// A user's votes, as stored in the `users` collection.
///
/// `voted_genre` never holds an empty list: a track entry disappears when
/// its last genre is unvoted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVoteRecord {
    /// Document id. Filled in from the document key on read.
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub voted_genre: BTreeMap<TrackId, Vec<String>>,
}

impl UserVoteRecord {
    /// A record for a user who has not voted yet.
    pub fn empty(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            voted_genre: BTreeMap::new(),
        }
    }

    /// Genres this user has voted for on `track_id`.
    pub fn genres_for(&self, track_id: &str) -> &[String] {
        self.voted_genre
            .get(track_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_voted(&self, track_id: &str, genre: &str) -> bool {
        self.genres_for(track_id).iter().any(|g| g == genre)
    }
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteAction {
    Voted,
    Unvoted,
}

/// Request body for toggling a genre vote.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleVote {
    #[validate(length(min = 1, max = 128))]
    pub user_id: UserId,
}
