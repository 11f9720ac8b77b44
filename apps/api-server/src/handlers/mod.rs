//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod search;

use actix_web::{HttpResponse, web};
use quill_shared::ErrorResponse;

use crate::middleware::error::{json_config, query_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post))
                        .route("/{id}/comments", web::get().to(comments::list_comments))
                        .route("/{id}/comments", web::post().to(comments::add_comment)),
                )
                .route("/search", web::get().to(search::search))
                .route("/categories", web::get().to(search::list_categories)),
        );
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use quill_infra::{ContentStore, StorageBackend, StoreConfig};
    use serde_json::{Value, json};

    use crate::app::build_app;
    use crate::state::AppState;

    async fn state(backend: StorageBackend, dir: &std::path::Path) -> AppState {
        let config = StoreConfig {
            data_dir: dir.to_path_buf(),
            backend,
        };
        AppState::from_store(&ContentStore::open(&config).await.unwrap())
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(build_app($state)).await
        };
    }

    fn post_body() -> Value {
        json!({
            "title": "Hello Quill",
            "content": "First words on the new platform",
            "author": "Ada",
            "tags": ["intro"]
        })
    }

    #[actix_web::test]
    async fn test_list_posts_returns_seed() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0]["title"], "Welcome to Our Blog");
    }

    #[actix_web::test]
    async fn test_create_then_fetch_post() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Json, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;

        assert_eq!(created["category"], "General");
        assert_eq!(created["views"], 0);
        assert_eq!(created["readTime"], 1);
        assert_eq!(created["excerpt"], "First words on the new platform...");

        let id = created["id"].as_str().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched["views"], 1);
        assert_eq!(fetched["title"], "Hello Quill");
        assert_eq!(fetched["tags"], json!(["intro"]));
    }

    #[actix_web::test]
    async fn test_create_without_title_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "content": "Body", "author": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Title, content, and author are required");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_post_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        for req in [
            test::TestRequest::get().uri("/api/posts/missing").to_request(),
            test::TestRequest::put()
                .uri("/api/posts/missing")
                .set_json(json!({ "title": "X" }))
                .to_request(),
            test::TestRequest::put()
                .uri("/api/posts/missing")
                .set_json(json!({ "title": "" }))
                .to_request(),
            test::TestRequest::delete()
                .uri("/api/posts/missing")
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Post not found");
        }
    }

    #[actix_web::test]
    async fn test_update_merges_allowed_fields_only() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}"))
            .set_json(json!({ "title": "X", "id": "hijack", "views": 500 }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated["title"], "X");
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["views"], 0);
        assert_eq!(updated["content"], created["content"]);
        assert_eq!(updated["createdAt"], created["createdAt"]);
        assert_ne!(updated["updatedAt"], created["updatedAt"]);
    }

    #[actix_web::test]
    async fn test_delete_keeps_comments() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{id}/comments"))
            .set_json(json!({ "name": "Bob", "email": "bob@example.com", "content": "Nice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let comment: Value = test::read_body_json(resp).await;
        assert_eq!(comment["postId"], created["id"]);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Post deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}/comments"))
            .to_request();
        let comments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(comments.len(), 1);
    }

    #[actix_web::test]
    async fn test_comment_requires_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::post()
            .uri("/api/posts/any/comments")
            .set_json(json!({ "name": "Bob", "content": "Nice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Name, email, and content are required");
    }

    #[actix_web::test]
    async fn test_search_and_categories() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::get()
            .uri("/api/search?q=REACT&category=all")
            .to_request();
        let results: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], "The Future of Web Development");

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let categories: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(categories, vec!["General", "Technology", "Design"]);
    }

    #[actix_web::test]
    async fn test_corrupt_store_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Json, dir.path()).await);
        std::fs::write(dir.path().join(quill_infra::store::POSTS_FILE), "not json").unwrap();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch posts");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(state(StorageBackend::Memory, dir.path()).await);

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found");
    }
}
