//! Prompt composition — pure string assembly, no I/O.
//!
//! Identical inputs always produce byte-identical prompts.

use crate::ideas::catalog::get_category_instructions;
use crate::ideas::models::IdeaQuery;
use crate::ideas::prompts::{ABSENT_PREFERENCE, IDEAS_SCHEMA_TEMPLATE};
use crate::llm_client::prompts::{JSON_ONLY_RULE, REAL_PLACES_RULE};

/// The system/user prompt pair for one completion. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// `category` selects the catalog instructions; unknown keys use the local entry.
pub fn compose_prompt(category: &str, query: &IdeaQuery) -> ComposedPrompt {
    ComposedPrompt {
        system_prompt: build_system_prompt(category),
        user_prompt: build_user_prompt(query),
    }
}

fn build_system_prompt(category: &str) -> String {
    let schema = IDEAS_SCHEMA_TEMPLATE
        .replace("{json_only_rule}", JSON_ONLY_RULE)
        .replace("{real_places_rule}", REAL_PLACES_RULE);
    format!("{}\n\n{}", get_category_instructions(category), schema)
}

fn build_user_prompt(query: &IdeaQuery) -> String {
    // Single pass: caller-supplied text is never re-scanned for placeholders.
    let location = &query.location;
    format!(
        "Location: {location}\n\
         Category: {category}\n\
         Preferences:\n\
         {budget}\n\
         {time}\n\
         {setting}\n\
         \n\
         Return only activities that actually exist in {location} and are relevant to the category above. \
         Do not suggest places outside {location}.",
        category = query.category,
        budget = preference_line("Budget", query.budget_hint.as_deref()),
        time = preference_line("Time", query.time_hint.as_deref()),
        setting = preference_line("Setting", query.indoor_outdoor.as_deref()),
    )
}

fn preference_line(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format!("{label}: {}", v.trim()),
        _ => ABSENT_PREFERENCE.to_string(),
    }
}
