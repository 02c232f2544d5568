//! Gallery image model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::EVENT_CATEGORIES;
use crate::validation::{ValidationErrors, Validator};

/// Gallery image entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: i32,
    pub event_type: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a gallery image
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryImageInput {
    pub image_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub year: i32,
    pub event_type: String,
}

impl CreateGalleryImageInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_non_empty("imageUrl", &self.image_url);
        v.require_year_in_range("year", self.year);
        v.one_of("eventType", &self.event_type, &EVENT_CATEGORIES);
        v.finish()
    }
}
