//! Comment handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewComment;
use quill_shared::dto::CreateCommentRequest;

use crate::middleware::error::{AppResult, StorageContext};
use crate::state::AppState;

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = state
        .blog
        .list_comments(&path.into_inner())
        .await
        .context("Failed to fetch comments")?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewComment {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
    };

    let comment = state
        .blog
        .add_comment(&path.into_inner(), input)
        .await
        .context("Failed to add comment")?;
    Ok(HttpResponse::Created().json(comment))
}
