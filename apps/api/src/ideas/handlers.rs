//! Axum route handlers for the Ideas API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::ideas::models::{IdeaList, IdeaRequest};
use crate::ideas::sample::sample_ideas;
use crate::ideas::validation::IdeaPayload;
use crate::state::AppState;

/// POST /api/ideas
///
/// Runs the full generation pipeline for one request.
/// An unconfigured server answers 500 before the body is looked at.
pub async fn handle_get_ideas(
    State(state): State<AppState>,
    body: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Json<IdeaPayload>, AppError> {
    state.ideas.ready()?;

    let Json(request) = body.map_err(|rejection| {
        tracing::debug!("Rejected request body: {rejection}");
        AppError::InvalidRequest("No data provided".to_string())
    })?;

    let ideas = state.ideas.get_ideas(request).await?;
    Ok(Json(ideas))
}

/// GET /api/ideas/test
///
/// Returns a fixed sample list without calling the model.
pub async fn handle_sample_ideas() -> Json<IdeaList> {
    Json(sample_ideas())
}
