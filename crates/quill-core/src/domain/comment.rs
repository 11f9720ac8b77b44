use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, is_blank, new_id};
use crate::error::DomainError;

/// Comment entity - a reader's note attached to a post by id.
///
/// `post_id` is not checked against the post collection, so a comment can
/// outlive the post it was written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Comment {
    const NAME: &'static str = "Comment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for adding a comment.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub content: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.content) {
            return Err(DomainError::Validation(
                "Name, email, and content are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Comment {
    /// Create a new comment on `post_id` with generated ID and timestamp.
    pub fn new(post_id: impl Into<String>, input: NewComment) -> Self {
        Self {
            id: new_id(),
            post_id: post_id.into(),
            name: input.name,
            email: input.email,
            content: input.content,
            created_at: Utc::now(),
        }
    }
}
