use std::sync::Arc;

use service::items::{InMemoryItemStore, ItemStore};

/// Shared handler state. The store is injected so tests can build their own.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, max_body_bytes: usize) -> Self {
        Self { store, max_body_bytes }
    }

    /// Fresh in-memory store with the default 1 MiB body cap.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()), configs::DEFAULT_MAX_BODY_BYTES)
    }
}
