use async_trait::async_trait;

use crate::domain::{Comment, Entity};
use crate::error::RepoError;

/// In-place edit of a stored record, applied under the collection's write lock.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Generic collection of entities kept in storage order.
///
/// Every call is one self-contained transaction against the backing medium.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All entities, in storage order.
    async fn list(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its id.
    async fn get(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// Store an entity.
    /// Replaces the record with the same id in place, otherwise inserts it at
    /// the front of the collection.
    async fn put(&self, entity: T) -> Result<T, RepoError>;

    /// Apply `mutation` to the entity with `id` and persist the result.
    /// Returns `None` when no entity has that id.
    async fn modify(&self, id: &str, mutation: Mutation<T>) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its id. Fails with `RepoError::NotFound` when absent.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Repository<Comment> {
    /// Comments attached to `post_id`, in storage order.
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}
