//! Timeline event model

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// The closed set of event categories used by the timeline and gallery
pub const EVENT_CATEGORIES: [&str; 5] = [
    "Festa",
    "Social Teórica",
    "Lounge",
    "Festa Junina",
    "Especial",
];

/// Timeline event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// Display date, e.g. "10/07/2015"
    pub date: String,
    pub year: i32,
    pub event_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Input for creating an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventInput {
    pub title: String,
    pub date: String,
    pub year: i32,
    pub event_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateEventInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_min_len("title", &self.title, 2);
        v.require_non_empty("date", &self.date);
        v.require_year_in_range("year", self.year);
        v.one_of("eventType", &self.event_type, &EVENT_CATEGORIES);
        v.finish()
    }
}
