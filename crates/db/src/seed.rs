//! Seeding the `tracks` collection from a JSON file.
//!
//! The file holds an array of track documents, each with its `id`. Tracks
//! that already exist are left untouched so restarts never reset counts.

use std::path::Path;

use tracktag_core::error::CoreError;
use tracktag_core::track::Track;

use crate::repositories::TrackRepo;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed track: {0}")]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Parse seed tracks and check every invariant before anything is written.
pub fn parse_tracks(json: &str) -> Result<Vec<Track>, SeedError> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    for track in &tracks {
        track.validate()?;
    }
    Ok(tracks)
}

/// Insert every track that is not already stored.
pub async fn seed_tracks(
    store: &dyn DocumentStore,
    tracks: &[Track],
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    for track in tracks {
        if TrackRepo::insert(store, track).await? {
            report.created += 1;
        } else {
            tracing::debug!(track_id = %track.id, "Seed track already present, skipping");
            report.skipped += 1;
        }
    }
    tracing::info!(
        created = report.created,
        skipped = report.skipped,
        "Track seeding complete"
    );
    Ok(report)
}

/// Read, validate and insert the tracks in the file at `path`.
pub async fn seed_tracks_from_file(
    store: &dyn DocumentStore,
    path: &Path,
) -> Result<SeedReport, SeedError> {
    let json = tokio::fs::read_to_string(path).await?;
    let tracks = parse_tracks(&json)?;
    seed_tracks(store, &tracks).await
}
