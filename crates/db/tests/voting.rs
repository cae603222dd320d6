//! End-to-end vote toggles against the in-memory store, including store
//! failures injected through a wrapping store.

use assert_matches::assert_matches;
use async_trait::async_trait;
use tracktag_core::error::CoreError;
use tracktag_core::track::{GenreTally, Track};
use tracktag_core::types::{TRACKS_COLLECTION, USERS_COLLECTION};
use tracktag_core::vote::{UserVoteRecord, VoteAction};
use tracktag_db::memory_store::MemoryDocumentStore;
use tracktag_db::repositories::{TrackRepo, UserVoteRepo};
use tracktag_db::store::{Document, DocumentStore, StoreError};
use tracktag_db::voting::{toggle_vote, VoteError};

/// Delegates to a memory store but fails reads or writes on one collection.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryDocumentStore,
    fail_reads_on: Option<&'static str>,
    fail_writes_on: Option<&'static str>,
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn read_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        if self.fail_reads_on == Some(collection) {
            return Err(StoreError::ReadFailed {
                collection: collection.into(),
                id: id.into(),
                source: "connection reset".into(),
            });
        }
        self.inner.read_document(collection, id).await
    }

    async fn write_document(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<(), StoreError> {
        if self.fail_writes_on == Some(collection) {
            return Err(StoreError::WriteFailed {
                collection: collection.into(),
                id: id.into(),
                source: "quota exceeded".into(),
            });
        }
        self.inner.write_document(collection, id, patch).await
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<bool, StoreError> {
        self.inner.create_document(collection, id, document).await
    }

    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        self.inner.list_documents(collection).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn seed_track() -> Track {
    Track::new(
        "t1",
        vec![GenreTally::new("A", 3), GenreTally::new("B", 1)],
    )
}

async fn seeded_store() -> MemoryDocumentStore {
    let store = MemoryDocumentStore::new();
    TrackRepo::insert(&store, &seed_track()).await.unwrap();
    store
}

#[tokio::test]
async fn first_vote_persists_both_documents() {
    let store = seeded_store().await;

    let out = toggle_vote(&store, "t1", "u1", "A").await.unwrap();
    assert_eq!(out.action, VoteAction::Voted);

    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track.tally("A").unwrap().count, 4);
    assert_eq!(track.total_count, 5);

    let record = UserVoteRepo::find(&store, "u1").await.unwrap().unwrap();
    assert_eq!(record.voted_genre["t1"], vec!["A".to_string()]);
}

#[tokio::test]
async fn second_toggle_restores_stored_state() {
    let store = seeded_store().await;

    toggle_vote(&store, "t1", "u1", "A").await.unwrap();
    let out = toggle_vote(&store, "t1", "u1", "A").await.unwrap();
    assert_eq!(out.action, VoteAction::Unvoted);

    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track, seed_track());

    let record = UserVoteRepo::find(&store, "u1").await.unwrap().unwrap();
    assert!(!record.voted_genre.contains_key("t1"));
}

#[tokio::test]
async fn two_users_accumulate_on_the_same_track() {
    let store = seeded_store().await;

    toggle_vote(&store, "t1", "u1", "B").await.unwrap();
    toggle_vote(&store, "t1", "u2", "B").await.unwrap();

    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track.tally("B").unwrap().count, 3);
    assert_eq!(track.total_count, track.genre_sum());
}

#[tokio::test]
async fn unknown_genre_writes_nothing() {
    let store = seeded_store().await;

    let err = toggle_vote(&store, "t1", "u1", "Z").await.unwrap_err();
    assert_matches!(err, VoteError::Core(CoreError::InvalidGenre { .. }));

    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track, seed_track());
    assert_eq!(store.len(USERS_COLLECTION).await, 0);
}

#[tokio::test]
async fn unknown_track_is_not_found() {
    let store = MemoryDocumentStore::new();
    let err = toggle_vote(&store, "missing", "u1", "A").await.unwrap_err();
    assert_matches!(
        err,
        VoteError::Core(CoreError::NotFound { entity: "Track", .. })
    );
}

#[tokio::test]
async fn user_read_failure_is_not_treated_as_no_votes() {
    let store = FlakyStore {
        fail_reads_on: Some(USERS_COLLECTION),
        ..Default::default()
    };
    TrackRepo::insert(&store, &seed_track()).await.unwrap();

    let err = toggle_vote(&store, "t1", "u1", "A").await.unwrap_err();
    assert_matches!(err, VoteError::Store(StoreError::ReadFailed { .. }));

    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track, seed_track());
}

#[tokio::test]
async fn track_write_failure_skips_user_write() {
    let store = FlakyStore {
        fail_writes_on: Some(TRACKS_COLLECTION),
        ..Default::default()
    };
    TrackRepo::insert(&store, &seed_track()).await.unwrap();

    let err = toggle_vote(&store, "t1", "u1", "A").await.unwrap_err();
    assert_matches!(err, VoteError::Store(ref e) if e.is_write());
    assert_eq!(store.inner.len(USERS_COLLECTION).await, 0);
}

#[tokio::test]
async fn user_write_failure_surfaces_after_track_write() {
    let store = FlakyStore {
        fail_writes_on: Some(USERS_COLLECTION),
        ..Default::default()
    };
    TrackRepo::insert(&store, &seed_track()).await.unwrap();

    let err = toggle_vote(&store, "t1", "u1", "A").await.unwrap_err();
    assert_matches!(err, VoteError::Store(StoreError::WriteFailed { .. }));

    // The writes are not atomic: the track already carries the vote.
    let track = TrackRepo::find_by_id(&store, "t1").await.unwrap().unwrap();
    assert_eq!(track.total_count, 5);
    let record = UserVoteRepo::find_or_empty(&store, "u1").await.unwrap();
    assert_eq!(record, UserVoteRecord::empty("u1"));
}
