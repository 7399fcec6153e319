//! Location filter — a heuristic gate that rejects obviously fictional or
//! placeholder location strings before any prompt is built.
//!
//! This is a substring match over fixed word lists, not a geocoding lookup.
//! Real places that happen to contain a listed substring (e.g. "Demopolis",
//! "Marseille") are rejected too; that trade-off is accepted.

use std::fmt;

const MIN_LOCATION_LEN: usize = 3;

/// Fictional, celestial and placeholder names that never describe a real destination.
const DENYLIST: &[&str] = &[
    // celestial
    "mars",
    "jupiter",
    "saturn",
    "neptune",
    "pluto",
    "the moon",
    "outer space",
    "milky way",
    // fictional
    "hogwarts",
    "narnia",
    "atlantis",
    "utopia",
    "middle earth",
    "middle-earth",
    "mordor",
    "gotham",
    "wakanda",
    "neverland",
    "westeros",
    "asgard",
    "tatooine",
    "el dorado",
    "shangri-la",
    "wonderland",
    // placeholder
    "test location",
    "nowhere",
    "anywhere",
    "somewhere",
    "asdf",
    "qwerty",
    "lorem ipsum",
];

/// Generic tokens that mark a test or dummy input.
const PLACEHOLDER_TOKENS: &[&str] = &["test", "example", "sample", "demo", "fake", "mock"];

/// Why a location was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationRejection {
    Denylisted(&'static str),
    TooShort,
    Placeholder(&'static str),
}

impl fmt::Display for LocationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationRejection::Denylisted(term) => write!(f, "matches denylisted name '{term}'"),
            LocationRejection::TooShort => {
                write!(f, "shorter than {MIN_LOCATION_LEN} characters")
            }
            LocationRejection::Placeholder(token) => {
                write!(f, "contains placeholder token '{token}'")
            }
        }
    }
}

/// Checks a location string. `Ok` only if it passes every check; otherwise the
/// first reason it fails.
pub fn check_location(location: &str) -> Result<(), LocationRejection> {
    let normalized = location.trim().to_lowercase();

    if let Some(&term) = DENYLIST.iter().find(|&&t| normalized.contains(t)) {
        return Err(LocationRejection::Denylisted(term));
    }

    if normalized.chars().count() < MIN_LOCATION_LEN {
        return Err(LocationRejection::TooShort);
    }

    if let Some(&token) = PLACEHOLDER_TOKENS.iter().find(|&&t| normalized.contains(t)) {
        return Err(LocationRejection::Placeholder(token));
    }

    Ok(())
}
