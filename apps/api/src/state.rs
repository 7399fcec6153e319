use std::sync::Arc;

use crate::config::Config;
use crate::ideas::service::IdeaService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ideas: Arc<IdeaService>,
}
