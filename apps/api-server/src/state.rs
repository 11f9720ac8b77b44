//! Application state - shared across all handlers.

use quill_core::BlogService;
use quill_core::error::RepoError;
use quill_infra::{ContentStore, StoreConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
}

impl AppState {
    /// Open the content store described by `config` and build the state over it.
    pub async fn new(config: &StoreConfig) -> Result<Self, RepoError> {
        let store = ContentStore::open(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::from_store(&store))
    }

    pub fn from_store(store: &ContentStore) -> Self {
        Self {
            blog: store.service(),
        }
    }
}
