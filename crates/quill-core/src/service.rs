//! Blog service - the query/command layer over the post and comment stores.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::domain::{Comment, Entity, NewComment, NewPost, Post, PostChanges};
use crate::error::{DomainError, RepoError};
use crate::ports::{CommentRepository, Repository};

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Stateless blog operations. Each method loads what it needs, computes the
/// result and persists mutations before returning.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn Repository<Post>>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn Repository<Post>>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// All posts, newest-created first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.list().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Fetch a post and count the read.
    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        let post = self
            .posts
            .modify(id, Box::new(|post: &mut Post| post.record_view()))
            .await?
            .ok_or_else(|| DomainError::not_found(Post::NAME, id))?;

        tracing::debug!(post_id = %id, views = post.views, "Fetched post");
        Ok(post)
    }

    pub async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;

        let post = self.posts.put(Post::new(input)).await?;
        tracing::info!(post_id = %post.id, "Created post");
        Ok(post)
    }

    /// Merge `changes` over an existing post. Last write wins.
    pub async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, DomainError> {
        if self.posts.get(id).await?.is_none() {
            return Err(DomainError::not_found(Post::NAME, id));
        }
        changes.validate()?;

        let post = self
            .posts
            .modify(id, Box::new(move |post: &mut Post| post.apply(changes)))
            .await?
            .ok_or_else(|| DomainError::not_found(Post::NAME, id))?;

        tracing::info!(post_id = %id, "Updated post");
        Ok(post)
    }

    /// Remove a post. Its comments are left in place.
    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        match self.posts.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Deleted post");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::not_found(Post::NAME, id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Comments for a post, newest first. An unknown post simply has none.
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        let comments = self.comments.find_by_post_id(post_id).await?;
        tracing::debug!(post_id = %post_id, count = comments.len(), "Listed comments");
        Ok(comments)
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        input: NewComment,
    ) -> Result<Comment, DomainError> {
        input.validate()?;

        let comment = self.comments.put(Comment::new(post_id, input)).await?;
        tracing::info!(post_id = %post_id, comment_id = %comment.id, "Added comment");
        Ok(comment)
    }

    /// Posts matching `query` (title, content or any tag, case-insensitive)
    /// and `category` (exact, case-insensitive). Empty values and the
    /// category `"all"` do not filter.
    pub async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Post>, DomainError> {
        let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        let posts: Vec<Post> = self
            .posts
            .list()
            .await?
            .into_iter()
            .filter(|post| needle.as_deref().is_none_or(|n| post.matches(n)))
            .filter(|post| category.is_none_or(|c| post.in_category(c)))
            .collect();

        tracing::debug!(?query, ?category, count = posts.len(), "Searched posts");
        Ok(posts)
    }

    /// Distinct categories in first-seen storage order.
    pub async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        let categories: IndexSet<String> = self
            .posts
            .list()
            .await?
            .into_iter()
            .map(|post| post.category)
            .collect();

        Ok(categories.into_iter().collect())
    }
}
