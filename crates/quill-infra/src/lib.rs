//! # Quill Infrastructure
//!
//! Concrete implementations of the storage ports defined in `quill-core`.
//!
//! - `JsonFileRepository` - one pretty-printed JSON array per collection (default)
//! - `InMemoryRepository` - volatile fallback, also used in tests

pub mod store;

pub use store::{
    ContentStore, InMemoryRepository, JsonFileRepository, StorageBackend, StoreConfig,
};
