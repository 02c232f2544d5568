//! Input validation for public submissions
//!
//! Every submission form is validated before the store is touched. A
//! failed validation carries field-level messages that the HTTP layer
//! returns as a 400 body; the repository is never invoked for rejected
//! input.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The community's founding year, lower bound for every year field
pub const FOUNDING_YEAR: i32 = 2015;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A single rejected field with its message
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-level validation failure
#[derive(Debug, Clone, Error)]
#[error("invalid input: {} field(s) rejected", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Accumulates field errors across the checks of one input
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Required string of at least `min` characters after trimming
    pub fn require_min_len(&mut self, field: &str, value: &str, min: usize) {
        if value.trim().chars().count() < min {
            self.reject(field, format!("must be at least {min} characters"));
        }
    }

    /// Required string, non-empty after trimming
    pub fn require_non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.reject(field, "must not be empty");
        }
    }

    /// Optional string, length-checked only when present and non-empty
    pub fn optional_min_len(&mut self, field: &str, value: &Option<String>, min: usize) {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                self.require_min_len(field, value, min);
            }
        }
    }

    /// Required well-formed email address
    pub fn require_email(&mut self, field: &str, value: &str) {
        if !EMAIL_RE.is_match(value.trim()) {
            self.reject(field, "must be a valid email address");
        }
    }

    /// Required year within the founding year and the current year
    pub fn require_year_in_range(&mut self, field: &str, value: i32) {
        let current = current_year();
        if value < FOUNDING_YEAR || value > current {
            self.reject(
                field,
                format!("must be between {FOUNDING_YEAR} and {current}"),
            );
        }
    }

    /// Optional year, range-checked only when present
    pub fn optional_year_in_range(&mut self, field: &str, value: Option<i32>) {
        if let Some(value) = value {
            self.require_year_in_range(field, value);
        }
    }

    /// Required membership in a closed label set
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.reject(field, format!("must be one of: {}", allowed.join(", ")));
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

/// Upper bound for year fields
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_counts_chars_after_trimming() {
        let mut v = Validator::new();
        v.require_min_len("name", "  A ", 2);
        let errors = v.finish().unwrap_err().errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("at least 2"));
    }

    #[test]
    fn email_format() {
        let mut v = Validator::new();
        v.require_email("email", "a@b.com");
        assert!(v.finish().is_ok());

        for bad in ["", "not-an-email", "a@b", "a b@c.com", "@missing.com"] {
            let mut v = Validator::new();
            v.require_email("email", bad);
            assert!(v.finish().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn year_bounds() {
        let mut v = Validator::new();
        v.require_year_in_range("year", FOUNDING_YEAR);
        v.require_year_in_range("year", current_year());
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.require_year_in_range("year", FOUNDING_YEAR - 1);
        v.require_year_in_range("year", current_year() + 1);
        assert_eq!(v.finish().unwrap_err().errors.len(), 2);
    }

    #[test]
    fn errors_accumulate_per_field() {
        let mut v = Validator::new();
        v.require_min_len("name", "", 2);
        v.require_email("email", "nope");
        v.one_of("type", "Outro", &["Festa", "Lounge"]);
        let errors = v.finish().unwrap_err().errors;
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "type"]);
    }
}
