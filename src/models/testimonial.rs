//! Testimonial model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// Testimonial entity
///
/// Public reads only ever see approved testimonials; submissions start
/// unapproved and wait for moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: Option<String>,
    pub content: String,
    pub year: Option<i32>,
    /// Year the author joined the community
    pub member_since: Option<i32>,
    pub image_url: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a testimonial
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialInput {
    #[serde(default)]
    pub name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub member_since: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateTestimonialInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_min_len("content", &self.content, 10);
        v.optional_min_len("name", &self.name, 2);
        v.optional_year_in_range("year", self.year);
        v.optional_year_in_range("memberSince", self.member_since);
        v.finish()
    }
}
