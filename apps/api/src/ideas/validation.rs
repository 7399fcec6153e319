//! Response validation — checks the model's raw reply against the `IdeaList`
//! shape and hands back the JSON exactly as the model produced it.
//!
//! Hard failures (not JSON, wrong shape, no ideas) become `MalformedResponse`.
//! The count and rating ranges are only a prompt-level contract: violations
//! are logged and the list is returned untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::ideas::models::{IdeaList, MAX_IDEAS, MAX_RATING, MIN_IDEAS, MIN_RATING};

/// Soft-contract violations found in an otherwise well-formed list.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractWarning {
    IdeaCount(usize),
    RatingOutOfRange { title: String, rating: f64 },
}

impl fmt::Display for ContractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractWarning::IdeaCount(n) => {
                write!(f, "{n} ideas returned, expected {MIN_IDEAS}-{MAX_IDEAS}")
            }
            ContractWarning::RatingOutOfRange { title, rating } => write!(
                f,
                "'{title}' rated {rating}, expected {MIN_RATING}-{MAX_RATING}"
            ),
        }
    }
}

/// A reply that passed validation. Serializes to the model's JSON unchanged:
/// unknown keys, omitted optional fields and number formatting are preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IdeaPayload(Value);

impl IdeaPayload {
    pub fn idea_count(&self) -> usize {
        self.0["ideas"].as_array().map_or(0, Vec::len)
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

pub fn parse_ideas(raw_text: &str) -> Result<IdeaPayload, AppError> {
    let text = strip_json_fences(raw_text);

    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::MalformedResponse(format!("Failed to parse ideas JSON: {e}")))?;

    let list = IdeaList::deserialize(&value).map_err(|e| {
        AppError::MalformedResponse(format!("Ideas JSON does not match schema: {e}"))
    })?;

    if list.ideas.is_empty() {
        return Err(AppError::MalformedResponse(
            "Response contained no ideas".to_string(),
        ));
    }

    for warning in check_contract(&list) {
        warn!("Idea list outside prompt contract: {warning}");
    }

    Ok(IdeaPayload(value))
}

pub fn check_contract(list: &IdeaList) -> Vec<ContractWarning> {
    let mut warnings = Vec::new();

    let count = list.ideas.len();
    if !(MIN_IDEAS..=MAX_IDEAS).contains(&count) {
        warnings.push(ContractWarning::IdeaCount(count));
    }

    for idea in &list.ideas {
        if !(MIN_RATING..=MAX_RATING).contains(&idea.rating) {
            warnings.push(ContractWarning::RatingOutOfRange {
                title: idea.title.clone(),
                rating: idea.rating,
            });
        }
    }

    warnings
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
