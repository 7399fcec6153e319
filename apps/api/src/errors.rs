use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant terminates the request. Server-side detail carried by the
/// 500-class variants is logged and never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::InvalidLocation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_)
            | AppError::Upstream(_)
            | AppError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::InvalidLocation(location) => format!(
                "Invalid location: '{location}'. Please enter a real city, town, or region."
            ),
            AppError::NotFound(path) => format!("No route for {path}"),
            AppError::UpstreamUnavailable(detail) => {
                tracing::error!("Upstream unavailable: {detail}");
                "AI service is not configured on the server".to_string()
            }
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {detail}");
                "Failed to generate ideas from the AI service".to_string()
            }
            AppError::MalformedResponse(detail) => {
                tracing::error!("Malformed AI response: {detail}");
                "Invalid JSON response from AI".to_string()
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_location_echoes_location() {
        let (status, body) = body_of(AppError::InvalidLocation("Narnia".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Narnia"));
    }

    #[tokio::test]
    async fn test_upstream_detail_not_leaked() {
        let (status, body) =
            body_of(AppError::Upstream("connection reset by peer at 10.0.0.7".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let msg = body["error"].as_str().unwrap();
        assert!(!msg.contains("10.0.0.7"));
    }

    #[tokio::test]
    async fn test_unavailable_mentions_configuration() {
        let (status, body) =
            body_of(AppError::UpstreamUnavailable("OPENAI_API_KEY missing".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("configured"));
    }

    #[test]
    fn test_malformed_is_server_error() {
        assert_eq!(
            AppError::MalformedResponse("eof".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
