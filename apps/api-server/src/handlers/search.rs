//! Search and category handlers.

use actix_web::{HttpResponse, web};

use quill_shared::dto::SearchParams;

use crate::middleware::error::{AppResult, StorageContext};
use crate::state::AppState;

/// GET /api/search?q=&category=
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let posts = state
        .blog
        .search(params.q.as_deref(), params.category.as_deref())
        .await
        .context("Failed to search posts")?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state
        .blog
        .list_categories()
        .await
        .context("Failed to fetch categories")?;
    Ok(HttpResponse::Ok().json(categories))
}
