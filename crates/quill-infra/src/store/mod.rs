//! Content storage - file-backed and in-memory collections.

mod content;
mod json_file;
mod memory;
pub mod seed;

pub use content::{COMMENTS_FILE, ContentStore, POSTS_FILE, StorageBackend, StoreConfig};
pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
