use serde::{Deserialize, Serialize};

/// Inclusive rating bounds the model is instructed to respect.
pub const MIN_RATING: f64 = 4.3;
pub const MAX_RATING: f64 = 5.0;

/// Number of ideas the model is instructed to return.
pub const MIN_IDEAS: usize = 6;
pub const MAX_IDEAS: usize = 10;

/// Request body for POST /api/ideas.
///
/// Every field is optional on the wire so that a missing `location` or
/// `category` surfaces as an `InvalidRequest` rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    pub location: Option<String>,
    pub category: Option<String>,
    pub budget_hint: Option<String>,
    pub time_hint: Option<String>,
    pub indoor_outdoor: Option<String>,
}

/// An `IdeaRequest` whose required fields have been checked.
/// Optional hints are trimmed and blank ones dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaQuery {
    pub location: String,
    pub category: String,
    pub budget_hint: Option<String>,
    pub time_hint: Option<String>,
    pub indoor_outdoor: Option<String>,
}

impl IdeaRequest {
    /// True when the body carried none of the known fields.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.category.is_none()
            && self.budget_hint.is_none()
            && self.time_hint.is_none()
            && self.indoor_outdoor.is_none()
    }

    /// Returns `None` when location or category is absent or blank.
    pub fn into_query(self) -> Option<IdeaQuery> {
        Some(IdeaQuery {
            location: non_blank(self.location)?,
            category: non_blank(self.category)?,
            budget_hint: non_blank(self.budget_hint),
            time_hint: non_blank(self.time_hint),
            indoor_outdoor: non_blank(self.indoor_outdoor),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A single suggested activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub title: String,
    pub blurb: String,
    pub rating: f64,
    pub place: String,
    pub duration: String,
    pub price_range: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, rename = "bookingURL")]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub hours: Option<Vec<String>>,
}

/// Response body for POST /api/ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaList {
    pub ideas: Vec<Idea>,
}
