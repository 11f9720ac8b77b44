//! In-memory repository - used when no data directory is wanted and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Comment, Entity};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, Mutation, Repository};

/// Repository holding the collection in a `Vec` behind an async RwLock.
///
/// Same ordering rules as the file-backed store.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    entities: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(seed: Vec<T>) -> Self {
        Self {
            entities: RwLock::new(seed),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.entities.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, RepoError> {
        let entities = self.entities.read().await;
        Ok(entities.iter().find(|e| e.id() == id).cloned())
    }

    async fn put(&self, entity: T) -> Result<T, RepoError> {
        let mut entities = self.entities.write().await;
        match entities.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => entities.insert(0, entity.clone()),
        }
        Ok(entity)
    }

    async fn modify(&self, id: &str, mutation: Mutation<T>) -> Result<Option<T>, RepoError> {
        let mut entities = self.entities.write().await;
        Ok(entities.iter_mut().find(|e| e.id() == id).map(|entity| {
            mutation(entity);
            entity.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut entities = self.entities.write().await;
        let position = entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or(RepoError::NotFound)?;
        entities.remove(position);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository<Comment> {
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let entities = self.entities.read().await;
        Ok(entities
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}
