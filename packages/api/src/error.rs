//! Error taxonomy shared by the store and the HTTP layer.

use thiserror::Error;

/// A single field that failed request validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every failure mode the API distinguishes. The HTTP layer maps each
/// variant onto a status code; the store never decides status codes itself.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request data. Carries the per-field detail
    /// collected during DTO validation (may be empty for whole-body errors).
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Credentials missing, invalid, or expired.
    #[error("{0}")]
    Unauthorized(String),

    /// Zero rows matched an update/delete, or a lookup came back empty.
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint violation surfaced as a client-visible conflict.
    #[error("{0}")]
    Conflict(String),

    /// Any other database failure.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected non-database failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Whole-body validation failure without field detail.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Validation failure with a structured field list.
    pub fn validation_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            fields,
        }
    }
}

/// True when the error is a PostgreSQL unique violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_displayed() {
        let err = ApiError::validation_fields(
            "Missing required field(s): service, cost",
            vec![
                FieldError::new("service", "required"),
                FieldError::new("cost", "required"),
            ],
        );
        assert_eq!(err.to_string(), "Missing required field(s): service, cost");
        match err {
            ApiError::Validation { fields, .. } => assert_eq!(fields.len(), 2),
            _ => panic!("expected validation error"),
        }
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
