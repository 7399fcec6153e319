mod config;
mod errors;
mod ideas;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ideas::service::IdeaService;
use crate::llm_client::{CompletionClient, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AdoreVenture API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; the service still starts without one
    let client = build_completion_client(&config);
    let ideas = Arc::new(IdeaService::new(client));

    // Build app state
    let state = AppState {
        config: config.clone(),
        ideas,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the upstream client once at startup.
/// Returns `None` when the key is missing or the HTTP client cannot be built.
fn build_completion_client(config: &Config) -> Option<Arc<dyn CompletionClient>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        error!("OPENAI_API_KEY environment variable is not set!");
        return None;
    };
    info!("OPENAI_API_KEY is configured");

    match OpenAiClient::new(
        api_key,
        &config.openai_base_url,
        Duration::from_secs(config.upstream_timeout_secs),
    ) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Failed to initialize LLM client: {e}");
            None
        }
    }
}
