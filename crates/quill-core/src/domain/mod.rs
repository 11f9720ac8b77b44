//! Domain entities - the core business objects.

mod comment;
mod post;

pub use comment::{Comment, NewComment};
pub use post::{
    DEFAULT_CATEGORY, DEFAULT_IMAGE, NewPost, Post, PostChanges, excerpt_of, read_time_of,
};

/// A record stored in one of the collections, addressed by an opaque id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable type name, used in messages and logs.
    const NAME: &'static str;

    fn id(&self) -> &str;
}

/// Generate a fresh opaque identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
