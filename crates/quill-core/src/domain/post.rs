use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, is_blank, new_id};
use crate::error::DomainError;

/// Category assigned when a post is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Cover image assigned when a post is created without one.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=800&h=400&fit=crop";

const EXCERPT_CHARS: usize = 150;
const WORDS_PER_MINUTE: usize = 200;

/// Post entity - a blog article with its metadata and view counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub read_time: u32,
    #[serde(default)]
    pub views: u64,
}

impl Entity for Post {
    const NAME: &'static str = "Post";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for creating a post. Only `title`, `content` and `author` are required.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub read_time: Option<u32>,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.title) || is_blank(&self.content) || is_blank(&self.author) {
            return Err(DomainError::Validation(
                "Title, content, and author are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update of a post.
///
/// Only the fields listed here can change; `id`, `createdAt` and `views` are
/// owned by the service.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub read_time: Option<u32>,
}

impl PostChanges {
    pub fn validate(&self) -> Result<(), DomainError> {
        let cleared = [&self.title, &self.content, &self.author]
            .into_iter()
            .flatten()
            .any(|value| is_blank(value));

        if cleared {
            return Err(DomainError::Validation(
                "Title, content, and author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Post {
    /// Create a new post, deriving every field the input leaves out.
    pub fn new(input: NewPost) -> Self {
        let now = Utc::now();
        let excerpt = present(input.excerpt).unwrap_or_else(|| excerpt_of(&input.content));
        let read_time = input
            .read_time
            .filter(|minutes| *minutes > 0)
            .unwrap_or_else(|| read_time_of(&input.content));

        Self {
            id: new_id(),
            title: input.title,
            content: input.content,
            excerpt,
            author: input.author,
            category: present(input.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: input.tags.unwrap_or_default(),
            image: present(input.image).unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            created_at: now,
            updated_at: now,
            read_time,
            views: 0,
        }
    }

    /// Merge `changes` over this post and refresh `updated_at`.
    ///
    /// An empty `excerpt`, `category` or `image`, or a `read_time` of 0, leaves
    /// the current value in place, matching how [`Post::new`] treats them.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(excerpt) = present(changes.excerpt) {
            self.excerpt = excerpt;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(category) = present(changes.category) {
            self.category = category;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if let Some(image) = present(changes.image) {
            self.image = image;
        }
        if let Some(read_time) = changes.read_time.filter(|minutes| *minutes > 0) {
            self.read_time = read_time;
        }
        self.touch();
    }

    /// Record one more read of this post.
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Case-insensitive substring match against title, content and tags.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    // updated_at never moves backwards, even if the wall clock does.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }
}

/// Default excerpt: the first 150 characters of `content` followed by `...`.
pub fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// Estimated reading time in whole minutes, at least one.
pub fn read_time_of(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewPost {
        NewPost {
            title: "Hello".to_string(),
            content: "Some words here".to_string(),
            author: "Ada".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_post_applies_defaults() {
        let post = Post::new(input());

        assert_eq!(post.category, DEFAULT_CATEGORY);
        assert_eq!(post.image, DEFAULT_IMAGE);
        assert!(post.tags.is_empty());
        assert_eq!(post.excerpt, "Some words here...");
        assert_eq!(post.read_time, 1);
        assert_eq!(post.views, 0);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_new_post_keeps_supplied_fields() {
        let post = Post::new(NewPost {
            excerpt: Some("Short".to_string()),
            category: Some("Design".to_string()),
            tags: Some(vec!["ux".to_string()]),
            image: Some("https://example.com/a.png".to_string()),
            read_time: Some(7),
            ..input()
        });

        assert_eq!(post.excerpt, "Short");
        assert_eq!(post.category, "Design");
        assert_eq!(post.tags, vec!["ux".to_string()]);
        assert_eq!(post.image, "https://example.com/a.png");
        assert_eq!(post.read_time, 7);
    }

    #[test]
    fn test_empty_optionals_fall_back_to_defaults() {
        let post = Post::new(NewPost {
            excerpt: Some(String::new()),
            category: Some(String::new()),
            read_time: Some(0),
            ..input()
        });

        assert_eq!(post.category, DEFAULT_CATEGORY);
        assert_eq!(post.excerpt, "Some words here...");
        assert_eq!(post.read_time, 1);
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(200);
        let excerpt = excerpt_of(&content);

        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_read_time_rounds_up() {
        assert_eq!(read_time_of("word"), 1);
        assert_eq!(read_time_of(&"word ".repeat(200)), 1);
        assert_eq!(read_time_of(&"word ".repeat(201)), 2);
        assert_eq!(read_time_of(""), 1);
    }

    #[test]
    fn test_validation_rejects_blank_required_fields() {
        let missing_title = NewPost {
            title: "   ".to_string(),
            ..input()
        };
        assert!(matches!(
            missing_title.validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut post = Post::new(input());
        let before = post.clone();

        post.apply(PostChanges {
            title: Some("X".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "X");
        assert_eq!(post.content, before.content);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created_at, before.created_at);
        assert!(post.updated_at > before.updated_at);
    }

    #[test]
    fn test_apply_ignores_empty_optionals() {
        let mut post = Post::new(NewPost {
            category: Some("Design".to_string()),
            ..input()
        });
        let before = post.clone();

        post.apply(PostChanges {
            excerpt: Some(String::new()),
            category: Some(String::new()),
            image: Some(String::new()),
            read_time: Some(0),
            ..Default::default()
        });

        assert_eq!(post.excerpt, before.excerpt);
        assert_eq!(post.category, "Design");
        assert_eq!(post.image, before.image);
        assert_eq!(post.read_time, before.read_time);

        post.apply(PostChanges {
            category: Some("Technology".to_string()),
            ..Default::default()
        });
        assert_eq!(post.category, "Technology");
    }

    #[test]
    fn test_changes_reject_cleared_title() {
        let changes = PostChanges {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(changes.validate().is_err());
        assert!(PostChanges::default().validate().is_ok());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let post = Post::new(NewPost {
            tags: Some(vec!["React".to_string()]),
            ..input()
        });

        assert!(post.matches("react"));
        assert!(post.matches("hello"));
        assert!(post.matches("words"));
        assert!(!post.matches("vue"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Post::new(input())).unwrap();

        assert!(json.get("readTime").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("read_time").is_none());
    }
}
