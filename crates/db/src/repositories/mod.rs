//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the document store as the first argument.

pub mod track_repo;
pub mod user_vote_repo;

pub use track_repo::TrackRepo;
pub use user_vote_repo::UserVoteRepo;
