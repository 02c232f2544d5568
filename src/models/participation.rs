//! Participation request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, Validator};

/// A request to contribute to the archive
///
/// The `processed` flag tracks moderation follow-up; it does not gate
/// visibility since participation requests are never publicly readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Free-text contribution label, e.g. "Fotos", "Histórias"
    #[serde(rename = "type")]
    pub request_type: String,
    pub message: Option<String>,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a participation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipationInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateParticipationInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require_min_len("name", &self.name, 2);
        v.require_email("email", &self.email);
        v.require_non_empty("type", &self.request_type);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email() {
        let input = CreateParticipationInput {
            name: "João".to_string(),
            email: "joao-at-example.com".to_string(),
            request_type: "Fotos".to_string(),
            message: None,
        };
        let errors = input.validate().unwrap_err().errors;
        assert_eq!(errors[0].field, "email");
        assert!(errors[0].message.contains("valid email"));
    }
}
