// All LLM prompt constants for the Ideas module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Output contract appended to every category's instructions.
/// Replace: {json_only_rule}, {real_places_rule}
pub const IDEAS_SCHEMA_TEMPLATE: &str = r#"You generate activity ideas as STRICT JSON only.
Output MUST be a JSON object with this exact shape:

{
  "ideas": [
    {
      "title": "String",
      "blurb": "Short enticing description (1-2 sentences).",
      "rating": 4.3,
      "place": "Neighborhood or venue name",
      "duration": "e.g. 1-3 hours",
      "priceRange": "$15-25 per person",
      "tags": ["short", "tag", "words"],
      "address": "Full street address, city, state",
      "phone": "(202) 555-0199",
      "website": "https://venue-website.com",
      "bookingURL": "https://venue-website.com/book",
      "bestTime": "e.g. Golden hour 6-8 pm",
      "hours": ["Mon-Thu 10am-9pm", "Fri-Sat 10am-11pm", "Sun 10am-8pm"]
    }
  ]
}

HARD RULES:
1. Return between 6 and 10 ideas.
2. `rating` MUST be a number between 4.3 and 5.0.
3. `priceRange` MUST be a specific estimate such as "$15-25 per person", "$40 per couple", or "Free" - NEVER a symbolic tier like "$$".
4. `hours` MUST be a list of day-range and time-range strings such as "Mon-Fri 9am-5pm", or null if unknown.
5. `address`, `phone`, `website`, `bookingURL`, `bestTime`, and `hours` are optional: use null when unknown.
6. `tags` are 2-5 short lowercase words.

{json_only_rule}

{real_places_rule}"#;

/// Rendered in place of a preference line the caller left empty.
pub const ABSENT_PREFERENCE: &str = "-";
