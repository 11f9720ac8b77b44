//! Data Transfer Objects - request types for the API.
//!
//! Required fields are optional at the wire level so that a missing value is
//! reported as a validation failure rather than a JSON decoding error.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub read_time: Option<u32>,
}

/// Body of `PUT /api/posts/{id}`. Absent fields are left unchanged; keys not
/// listed here (`id`, `createdAt`, `views`, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub read_time: Option<u32>,
}

/// Body of `POST /api/posts/{id}/comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}
