//! Application state for the web layer.

use crate::store::NetworkStore;

/// Shared application state.
///
/// Cloned into every handler; clones share the same store.
#[derive(Clone, Default)]
pub struct AppState {
    /// Stations, lines, members and favorites
    pub store: NetworkStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: NetworkStore) -> Self {
        Self { store }
    }
}
