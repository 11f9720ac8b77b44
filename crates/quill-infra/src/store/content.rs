use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use quill_core::BlogService;
use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, Repository};

use super::seed::{sample_comments, sample_posts};
use super::{InMemoryRepository, JsonFileRepository};

/// File holding the post collection inside the data directory.
pub const POSTS_FILE: &str = "posts.json";

/// File holding the comment collection inside the data directory.
pub const COMMENTS_FILE: &str = "comments.json";

/// Where the collections live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Whole-file JSON arrays in the data directory.
    #[default]
    Json,
    /// Process memory only.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Configuration for the content store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

/// The post and comment collections, opened and seeded.
#[derive(Clone)]
pub struct ContentStore {
    pub posts: Arc<dyn Repository<Post>>,
    pub comments: Arc<dyn CommentRepository>,
}

impl ContentStore {
    /// Open both collections, seeding any that do not exist yet.
    pub async fn open(config: &StoreConfig) -> Result<Self, RepoError> {
        tracing::info!(backend = %config.backend, "Opening content store...");

        let store = match config.backend {
            StorageBackend::Json => {
                let posts =
                    JsonFileRepository::open(config.data_dir.join(POSTS_FILE), sample_posts())
                        .await?;
                let comments = JsonFileRepository::open(
                    config.data_dir.join(COMMENTS_FILE),
                    sample_comments(),
                )
                .await?;
                tracing::info!(data_dir = %config.data_dir.display(), "Content store ready");

                Self {
                    posts: Arc::new(posts),
                    comments: Arc::new(comments),
                }
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory content store - data is lost on restart");
                Self {
                    posts: Arc::new(InMemoryRepository::with_seed(sample_posts())),
                    comments: Arc::new(InMemoryRepository::with_seed(sample_comments())),
                }
            }
        };

        Ok(store)
    }

    /// Blog service over these collections.
    pub fn service(&self) -> BlogService {
        BlogService::new(self.posts.clone(), self.comments.clone())
    }
}
