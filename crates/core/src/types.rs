/// Track identifiers are opaque document ids.
pub type TrackId = String;

/// User identifiers are opaque document ids.
pub type UserId = String;

/// Document collection holding track aggregates.
pub const TRACKS_COLLECTION: &str = "tracks";

/// Document collection holding per-user vote records.
pub const USERS_COLLECTION: &str = "users";
