// Activity idea generation.
// Implements: location filtering, category prompts, prompt composition,
// one completion call, and response validation.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod catalog;
pub mod composer;
pub mod handlers;
pub mod location;
pub mod models;
pub mod prompts;
pub mod sample;
pub mod service;
pub mod validation;
