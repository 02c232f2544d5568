//! Tribute model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// Tribute to a community member who has passed away
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tribute {
    pub id: i64,
    pub name: String,
    /// First year in the community
    pub year_start: Option<i32>,
    /// Last year in the community
    pub year_end: Option<i32>,
    pub content: String,
    pub image_url: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a tribute
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTributeInput {
    pub name: String,
    #[serde(default)]
    pub year_start: Option<i32>,
    #[serde(default)]
    pub year_end: Option<i32>,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateTributeInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_min_len("name", &self.name, 2);
        v.require_min_len("content", &self.content, 10);
        v.optional_year_in_range("yearStart", self.year_start);
        v.optional_year_in_range("yearEnd", self.year_end);
        v.finish()
    }
}
