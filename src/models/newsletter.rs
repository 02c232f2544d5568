//! Newsletter subscription model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// Newsletter subscription entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input for subscribing to the newsletter
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsletterInput {
    pub email: String,
}

impl CreateNewsletterInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_email("email", &self.email);
        v.finish()
    }
}
