//! Fixed sample payload for GET /api/ideas/test. Bypasses the generation pipeline.

use crate::ideas::models::{Idea, IdeaList};

pub fn sample_ideas() -> IdeaList {
    IdeaList {
        ideas: vec![Idea {
            title: "Sunset Kayaking Adventure".to_string(),
            blurb: "Paddle through calm waters while watching the sun set over the horizon."
                .to_string(),
            rating: 4.8,
            place: "Harbor Point Marina".to_string(),
            duration: "2-3 hours".to_string(),
            price_range: "$45-65 per person".to_string(),
            tags: vec![
                "outdoor".to_string(),
                "water".to_string(),
                "sunset".to_string(),
                "romantic".to_string(),
            ],
            address: Some("123 Harbor Drive, Washington DC".to_string()),
            phone: Some("(202) 555-0123".to_string()),
            website: Some("https://harborpoint.com".to_string()),
            booking_url: Some("https://harborpoint.com/book".to_string()),
            best_time: Some("Golden hour 6-8 pm".to_string()),
            hours: Some(vec!["Mon-Sun 9am-9pm".to_string()]),
        }],
    }
}
