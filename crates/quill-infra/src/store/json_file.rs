//! Flat-file repository: one pretty-printed JSON array per collection.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;

use quill_core::domain::{Comment, Entity};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, Mutation, Repository};

/// Repository backed by a single JSON file holding the whole collection.
///
/// Every call re-reads the file; every mutation rewrites it through a
/// sibling temp file and a rename, so readers see either the old or the new
/// collection. Mutations within this process are serialized by `write_lock`.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Open the collection at `path`, writing `seed` first if the file does
    /// not exist yet. An existing file is left untouched.
    pub async fn open(path: impl Into<PathBuf>, seed: Vec<T>) -> Result<Self, RepoError> {
        let repo = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _entity: PhantomData,
        };

        if let Some(dir) = repo.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| io_error(dir, e))?;
        }

        let exists = fs::try_exists(&repo.path)
            .await
            .map_err(|e| io_error(&repo.path, e))?;
        if !exists {
            repo.store(&seed).await?;
            tracing::info!(
                path = %repo.path.display(),
                records = seed.len(),
                "Initialized {} collection",
                T::NAME
            );
        }

        Ok(repo)
    }

    async fn load(&self) -> Result<Vec<T>, RepoError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        serde_json::from_str(&raw).map_err(|e| RepoError::Serialization {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    async fn store(&self, entities: &[T]) -> Result<(), RepoError> {
        let body =
            serde_json::to_string_pretty(entities).map_err(|e| RepoError::Serialization {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, body)
            .await
            .map_err(|e| io_error(&staging, e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), records = entities.len(), "Collection written");
        Ok(())
    }
}

#[async_trait]
impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        self.load().await
    }

    async fn get(&self, id: &str) -> Result<Option<T>, RepoError> {
        Ok(self.load().await?.into_iter().find(|e| e.id() == id))
    }

    async fn put(&self, entity: T) -> Result<T, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut entities = self.load().await?;

        match entities.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => entities.insert(0, entity.clone()),
        }

        self.store(&entities).await?;
        Ok(entity)
    }

    async fn modify(&self, id: &str, mutation: Mutation<T>) -> Result<Option<T>, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut entities = self.load().await?;

        let Some(entity) = entities.iter_mut().find(|e| e.id() == id) else {
            return Ok(None);
        };
        mutation(entity);
        let updated = entity.clone();

        self.store(&entities).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut entities = self.load().await?;

        let before = entities.len();
        entities.retain(|e| e.id() != id);
        if entities.len() == before {
            return Err(RepoError::NotFound);
        }

        self.store(&entities).await
    }
}

#[async_trait]
impl CommentRepository for JsonFileRepository<Comment> {
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect())
    }
}

fn io_error(path: &Path, source: io::Error) -> RepoError {
    RepoError::Io {
        path: path.display().to_string(),
        source,
    }
}
