//! Shared state for the HTTP API.

use std::sync::Arc;

use crate::store::BoardStore;

/// State shared across all API handlers.
///
/// The store is injected here once at startup; handlers never reach for a
/// global.
pub struct ApiState {
    pub store: Arc<dyn BoardStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}
