// Shared prompt constants.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Rule block that enforces JSON-only output.
pub const JSON_ONLY_RULE: &str = "\
You MUST respond with a single valid JSON object only.
Do NOT include any text outside the JSON object.
Do NOT use markdown code fences.
Do NOT include explanations or apologies.";

/// Rule block that keeps suggestions tied to real, existing places.
pub const REAL_PLACES_RULE: &str = "\
CRITICAL: Only suggest activities, venues, and businesses that actually exist in the requested location.
Do NOT invent venues, addresses, phone numbers, or websites.
If a detail is unknown, use null instead of guessing.";
