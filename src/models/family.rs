//! Family story model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// A relationship story born at one of the community's events
///
/// The `type` label is free text ("Casal", "Amizade", ...), unlike the
/// closed event category set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStory {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub story_type: String,
    pub description: String,
    pub year: Option<i32>,
    pub event_name: Option<String>,
    pub image_url: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a family story
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyStoryInput {
    pub title: String,
    #[serde(rename = "type")]
    pub story_type: String,
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateFamilyStoryInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_min_len("title", &self.title, 2);
        v.require_non_empty("type", &self.story_type);
        v.require_min_len("description", &self.description, 10);
        v.optional_year_in_range("year", self.year);
        v.finish()
    }
}
