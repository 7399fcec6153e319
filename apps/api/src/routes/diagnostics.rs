use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub openai_key_set: bool,
    pub openai_key_length: usize,
    pub app_env: String,
    pub client_initialized: bool,
}

/// GET /test-env
/// Reports whether the upstream credential and client are in place. Never echoes the key.
pub async fn test_env_handler(State(state): State<AppState>) -> Json<EnvReport> {
    Json(EnvReport {
        openai_key_set: state.config.openai_api_key.is_some(),
        openai_key_length: state.config.api_key_len(),
        app_env: state.config.app_env.clone(),
        client_initialized: state.ideas.is_ready(),
    })
}
