//! Screening-specific error types.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by screening, appointment and reminder handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ScreeningError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ScreeningError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ScreeningError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ScreeningError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScreeningError::NotFound { .. } => ErrorCode::NotFound,
            ScreeningError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ScreeningError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for ScreeningError {
    fn from(err: ValidationError) -> Self {
        ScreeningError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for ScreeningError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => ScreeningError::NotFound {
                resource: err.detail("resource").unwrap_or("Record").to_string(),
                id: err.detail("id").unwrap_or_default().to_string(),
            },
            ErrorCode::ValidationFailed => ScreeningError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => ScreeningError::Infrastructure(err.to_string()),
        }
    }
}
