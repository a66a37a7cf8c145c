//! Shared application state.

use std::sync::Arc;

use kalyndr_core::store::EventStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The store gateway behind every handler.
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}
