use std::sync::Arc;

use tracktag_db::store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding the `tracks` and `users` collections.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Borrow the store as the trait object the repositories take.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
