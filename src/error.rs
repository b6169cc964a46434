//! Error types.
//!
//! Validation failures are the only errors a user can trigger; each one is
//! surfaced as a destructive toast. Store errors only occur when seed data is
//! malformed.

use thiserror::Error;

/// A form or login input that failed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email or password left blank on the login form.
    #[error("Please enter email and password")]
    EmptyCredentials,

    /// One or more required form fields are empty.
    #[error("Please fill all required fields ({})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Feedback submitted without choosing a star rating.
    #[error("Please select a rating")]
    MissingRating,

    /// Star rating outside 1..=5.
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

impl ValidationError {
    /// Short message shown as the toast description.
    ///
    /// The missing-fields variant keeps the generic wording of the form
    /// banner; the field list is available through `Display`.
    pub fn toast_description(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => "Please fill all required fields".to_string(),
            other => other.to_string(),
        }
    }
}

/// Seed data that violates a store invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("article '{id}' has helpfulness {value}%, expected 0-100")]
    HelpfulnessOutOfRange { id: String, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display_lists_fields() {
        let err = ValidationError::MissingFields(vec!["subject", "type"]);
        assert_eq!(
            err.to_string(),
            "Please fill all required fields (subject, type)"
        );
        assert_eq!(err.toast_description(), "Please fill all required fields");
    }

    #[test]
    fn test_credentials_message() {
        assert_eq!(
            ValidationError::EmptyCredentials.toast_description(),
            "Please enter email and password"
        );
    }
}
