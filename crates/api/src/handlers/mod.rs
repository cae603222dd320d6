//! Request handlers.
//!
//! Handlers delegate to the repositories and the vote toggle flow in
//! `tracktag_db` and map errors via [`AppError`](crate::error::AppError).

pub mod tracks;
pub mod users;
