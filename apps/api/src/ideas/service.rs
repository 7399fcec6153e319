//! Idea generation — orchestrates the full request pipeline.
//!
//! Flow: readiness check → required fields → location filter → category
//!       resolution → prompt composition → one completion → response parsing.
//!
//! Every failure ends the request at the step that produced it. Nothing retries.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ideas::catalog::Category;
use crate::ideas::composer::compose_prompt;
use crate::ideas::location::check_location;
use crate::ideas::models::IdeaRequest;
use crate::ideas::validation::{parse_ideas, IdeaPayload};
use crate::llm_client::{CompletionClient, LlmError};

/// Owns the upstream client handle decided at startup.
/// `None` means the credential was missing or the client failed to build.
#[derive(Clone)]
pub struct IdeaService {
    client: Option<Arc<dyn CompletionClient>>,
}

impl IdeaService {
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    pub fn is_ready(&self) -> bool {
        self.client.is_some()
    }

    /// The upstream client, or `UpstreamUnavailable` when none was built at startup.
    pub fn ready(&self) -> Result<&Arc<dyn CompletionClient>, AppError> {
        self.client.as_ref().ok_or_else(|| {
            AppError::UpstreamUnavailable("OPENAI_API_KEY is not configured".to_string())
        })
    }

    pub async fn get_ideas(&self, request: IdeaRequest) -> Result<IdeaPayload, AppError> {
        let request_id = Uuid::new_v4();
        self.run_pipeline(request)
            .instrument(info_span!("get_ideas", %request_id))
            .await
    }

    async fn run_pipeline(&self, request: IdeaRequest) -> Result<IdeaPayload, AppError> {
        // Step 1: Upstream readiness
        let client = self.ready()?;

        // Step 2: Required fields
        if request.is_empty() {
            return Err(AppError::InvalidRequest("No data provided".to_string()));
        }
        let query = request.into_query().ok_or_else(|| {
            AppError::InvalidRequest("Location and category are required".to_string())
        })?;

        // Step 3: Location filter
        if let Err(reason) = check_location(&query.location) {
            warn!("Rejected location '{}': {reason}", query.location);
            return Err(AppError::InvalidLocation(query.location));
        }

        // Step 4: Category
        let category = Category::resolve(&query.category);
        if Category::from_key(&query.category).is_none() {
            info!(
                "Unknown category '{}', using '{}'",
                query.category,
                category.key()
            );
        }

        info!(
            "Generating ideas for location: {}, category: {}",
            query.location,
            category.key()
        );

        // Step 5: Prompts
        let prompt = compose_prompt(category.key(), &query);

        // Step 6: Completion
        info!("Calling completion API...");
        let raw = client
            .complete(&prompt.system_prompt, &prompt.user_prompt)
            .await
            .map_err(|e| match e {
                e @ LlmError::EmptyContent => AppError::MalformedResponse(e.to_string()),
                other => AppError::Upstream(other.to_string()),
            })?;

        // Step 7: Parse
        let ideas = parse_ideas(&raw)?;
        info!("Successfully generated {} ideas", ideas.idea_count());

        Ok(ideas)
    }
}
