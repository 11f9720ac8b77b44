//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, PostChanges};
use quill_shared::MessageResponse;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppResult, StorageContext};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list_posts().await.context("Failed to fetch posts")?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - counts a view.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .get_post(&path.into_inner())
        .await
        .context("Failed to fetch post")?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewPost {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        author: req.author.unwrap_or_default(),
        excerpt: req.excerpt,
        category: req.category,
        tags: req.tags,
        image: req.image,
        read_time: req.read_time,
    };

    let post = state
        .blog
        .create_post(input)
        .await
        .context("Failed to create post")?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        author: req.author,
        category: req.category,
        tags: req.tags,
        image: req.image,
        read_time: req.read_time,
    };

    let post = state
        .blog
        .update_post(&path.into_inner(), changes)
        .await
        .context("Failed to update post")?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state
        .blog
        .delete_post(&path.into_inner())
        .await
        .context("Failed to delete post")?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
