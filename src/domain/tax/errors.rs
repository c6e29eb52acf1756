//! Tax-specific error types.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by tax year and deduction handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TaxError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        TaxError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TaxError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TaxError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TaxError::NotFound { .. } => ErrorCode::NotFound,
            TaxError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TaxError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for TaxError {
    fn from(err: ValidationError) -> Self {
        TaxError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for TaxError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => TaxError::NotFound {
                resource: err.detail("resource").unwrap_or("Record").to_string(),
                id: err.detail("id").unwrap_or_default().to_string(),
            },
            ErrorCode::ValidationFailed => TaxError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => TaxError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_resource() {
        let err = TaxError::not_found("Deduction", "abc");
        assert_eq!(err.to_string(), "Deduction not found: abc");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn domain_not_found_keeps_resource_and_id() {
        let err: TaxError = DomainError::not_found("TaxYear", "t-1").into();
        assert_eq!(err, TaxError::not_found("TaxYear", "t-1"));
    }

    #[test]
    fn domain_validation_keeps_field() {
        let err: TaxError = DomainError::validation("name", "too long").into();
        assert_eq!(err, TaxError::validation("name", "too long"));
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: TaxError = DomainError::new(ErrorCode::DatabaseError, "boom").into();
        assert!(matches!(err, TaxError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
