//! Repository for the `tracks` collection.

use tracktag_core::track::Track;
use tracktag_core::types::TRACKS_COLLECTION;

use crate::store::{decode, encode, Document, DocumentStore, StoreError};

/// Fields rewritten when a track's votes change.
const TALLY_FIELDS: &[&str] = &["genre", "totalCount"];

/// Provides data access for track documents.
pub struct TrackRepo;

impl TrackRepo {
    /// Find a track by id. Returns `None` if the document does not exist.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Track>, StoreError> {
        let Some(doc) = store.read_document(TRACKS_COLLECTION, id).await? else {
            return Ok(None);
        };
        let mut track: Track = decode(TRACKS_COLLECTION, id, doc)?;
        track.id = id.to_string();
        Ok(Some(track))
    }

    /// List every track in document-id order.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Track>, StoreError> {
        store
            .list_documents(TRACKS_COLLECTION)
            .await?
            .into_iter()
            .map(|(id, doc)| {
                let mut track: Track = decode(TRACKS_COLLECTION, &id, doc)?;
                track.id = id;
                Ok(track)
            })
            .collect()
    }

    /// Persist the vote aggregate of a track: its `genre` list and
    /// `totalCount`. Display fields are left as stored.
    pub async fn save_tally(store: &dyn DocumentStore, track: &Track) -> Result<(), StoreError> {
        let mut doc = encode(TRACKS_COLLECTION, &track.id, track)?;
        let patch: Document = TALLY_FIELDS
            .iter()
            .filter_map(|field| doc.remove_entry(*field))
            .collect();
        store
            .write_document(TRACKS_COLLECTION, &track.id, patch)
            .await
    }

    /// Insert a full track document unless one already exists.
    ///
    /// Returns `true` when the track was created.
    pub async fn insert(store: &dyn DocumentStore, track: &Track) -> Result<bool, StoreError> {
        let mut doc = encode(TRACKS_COLLECTION, &track.id, track)?;
        // The id is the document key, not a stored field.
        doc.remove("id");
        store
            .create_document(TRACKS_COLLECTION, &track.id, doc)
            .await
    }
}
