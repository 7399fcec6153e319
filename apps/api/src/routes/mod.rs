pub mod diagnostics;
pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::ideas::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/test-env", get(diagnostics::test_env_handler))
        // Ideas API
        .route("/api/ideas", post(handlers::handle_get_ideas))
        .route("/api/ideas/test", get(handlers::handle_sample_ideas))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::ideas::service::tests::{sample_ideas_json, FakeClient};
    use crate::ideas::service::IdeaService;
    use crate::llm_client::CompletionClient;

    fn app(client: Option<Arc<FakeClient>>) -> Router {
        let api_key = client.as_ref().map(|_| "sk-test-key");
        let client = client.map(|c| c as Arc<dyn CompletionClient>);
        build_router(AppState {
            config: Config::for_tests(api_key),
            ideas: Arc::new(IdeaService::new(client)),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_ideas(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/ideas")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "adoreventure-ai-backend");
    }

    #[tokio::test]
    async fn test_env_report_without_key() {
        let (status, body) = send(app(None), get("/test-env")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["openai_key_set"], false);
        assert_eq!(body["openai_key_length"], 0);
        assert_eq!(body["client_initialized"], false);
    }

    #[tokio::test]
    async fn test_env_report_with_key() {
        let client = FakeClient::replying("{}");
        let (_, body) = send(app(Some(client)), get("/test-env")).await;
        assert_eq!(body["openai_key_set"], true);
        assert_eq!(body["openai_key_length"], 11);
        assert_eq!(body["client_initialized"], true);
        assert!(!body.to_string().contains("sk-test-key"));
    }

    #[tokio::test]
    async fn test_ideas_unconfigured_returns_500() {
        let (status, body) = send(
            app(None),
            post_ideas(json!({ "location": "Seattle", "category": "date" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("configured"));
    }

    #[tokio::test]
    async fn test_ideas_fictional_location_returns_400() {
        let client = FakeClient::replying(sample_ideas_json(8).to_string());
        let (status, body) = send(
            app(Some(client.clone())),
            post_ideas(json!({ "location": "Hogwarts", "category": "travel" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap();
        assert!(msg.contains("Hogwarts"));
        assert!(msg.contains("Invalid location"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ideas_missing_category_returns_400() {
        let client = FakeClient::replying(sample_ideas_json(8).to_string());
        let (status, body) = send(
            app(Some(client.clone())),
            post_ideas(json!({ "location": "Paris" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Location and category are required");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ideas_without_body_returns_400() {
        let client = FakeClient::replying(sample_ideas_json(8).to_string());
        let request = Request::builder()
            .method("POST")
            .uri("/api/ideas")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(Some(client)), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");
    }

    #[tokio::test]
    async fn test_ideas_success_passes_structure_through() {
        let upstream = sample_ideas_json(8);
        let client = FakeClient::replying(upstream.to_string());
        let (status, body) = send(
            app(Some(client.clone())),
            post_ideas(json!({ "location": "Paris", "category": "group" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_ideas_unconfigured_checked_before_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/ideas")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("configured"));

        let request = Request::builder()
            .method("POST")
            .uri("/api/ideas")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, _) = send(app(None), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_ideas_empty_object_returns_no_data() {
        let client = FakeClient::replying(sample_ideas_json(8).to_string());
        let (status, body) = send(app(Some(client.clone())), post_ideas(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ideas_sparse_upstream_ideas_returned_verbatim() {
        let upstream = json!({
            "ideas": [{
                "title": "Seine picnic",
                "blurb": "Bread, cheese and a view of the river.",
                "rating": 5,
                "place": "Square du Vert-Galant",
                "duration": "2 hours",
                "priceRange": "$15-25 per person",
                "tags": ["outdoor", "food"],
                "neighborhood": "1st arrondissement"
            }]
        });
        let client = FakeClient::replying(upstream.to_string());
        let (status, body) = send(
            app(Some(client)),
            post_ideas(json!({ "location": "Paris", "category": "date" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
        assert!(body["ideas"][0].get("hours").is_none());
        assert!(body["ideas"][0]["rating"].is_u64());
    }

    #[tokio::test]
    async fn test_ideas_malformed_upstream_returns_500() {
        let client = FakeClient::replying("not json at all");
        let (status, body) = send(
            app(Some(client)),
            post_ideas(json!({ "location": "Paris", "category": "date" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Invalid JSON response from AI");
    }

    #[tokio::test]
    async fn test_ideas_upstream_failure_returns_500() {
        let client = FakeClient::failing(503);
        let (status, body) = send(
            app(Some(client)),
            post_ideas(json!({ "location": "Paris", "category": "date" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().contains("quota"));
    }

    #[tokio::test]
    async fn test_sample_endpoint() {
        let (status, body) = send(app(None), get("/api/ideas/test")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ideas"].as_array().unwrap().len(), 1);
        assert_eq!(body["ideas"][0]["title"], "Sunset Kayaking Adventure");
        assert!(body["ideas"][0].get("bookingURL").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let (status, body) = send(app(None), get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("/nope"));
    }
}
