//! Domain types and pure logic for genre voting on tracks.
//!
//! Nothing in this crate performs I/O. Persistence lives in `tracktag-db`,
//! the HTTP surface in `tracktag-api`.

pub mod error;
pub mod reconcile;
pub mod track;
pub mod types;
pub mod vote;
