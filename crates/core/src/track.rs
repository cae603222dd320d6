//! Track aggregate and its per-genre vote tallies.
//!
//! A track document stores its genre tallies together with a denormalised
//! `totalCount`, which must always equal the sum of the tallies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::TrackId;

/// A genre name paired with its vote count for one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreTally {
    pub name: String,
    pub count: u64,
}

impl GenreTally {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// A voteable track as stored in the `tracks` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Document id. Filled in from the document key on read.
    #[serde(default)]
    pub id: TrackId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub genre: Vec<GenreTally>,
    pub total_count: u64,
}

impl Track {
    /// Build a track whose `total_count` is derived from `genre`.
    pub fn new(id: impl Into<TrackId>, genre: Vec<GenreTally>) -> Self {
        let total_count = genre.iter().map(|g| g.count).sum();
        Self {
            id: id.into(),
            name: None,
            artist: None,
            image: None,
            genre,
            total_count,
        }
    }

    /// Sum of every genre tally on this track.
    pub fn genre_sum(&self) -> u64 {
        self.genre.iter().map(|g| g.count).sum()
    }

    /// Look up a tally by genre name.
    pub fn tally(&self, name: &str) -> Option<&GenreTally> {
        self.genre.iter().find(|g| g.name == name)
    }

    /// Check the seed-data invariants: at least one genre, unique genre
    /// names, and `total_count` equal to the sum of the tallies.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::Validation("Track id must not be empty".into()));
        }
        if self.genre.is_empty() {
            return Err(CoreError::Validation(format!(
                "Track {} has no genres",
                self.id
            )));
        }

        let mut seen = HashSet::with_capacity(self.genre.len());
        for tally in &self.genre {
            if !seen.insert(tally.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Track {} lists genre '{}' more than once",
                    self.id, tally.name
                )));
            }
        }

        let sum = self.genre_sum();
        if self.total_count != sum {
            return Err(CoreError::Validation(format!(
                "Track {} has totalCount {} but its genres sum to {sum}",
                self.id, self.total_count
            )));
        }
        Ok(())
    }

    /// Consume the track and return it with its genres in display order:
    /// descending count, ties keeping their stored order.
    pub fn into_ranked(mut self) -> Self {
        self.genre.sort_by(|a, b| b.count.cmp(&a.count));
        self
    }
}

/// Order tracks by descending `total_count`. Ties keep their input order.
pub fn rank_tracks(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| b.total_count.cmp(&a.total_count));
}
