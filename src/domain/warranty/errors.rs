//! Warranty-specific error types.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by appliance, warranty and manual handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarrantyError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl WarrantyError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        WarrantyError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WarrantyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        WarrantyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WarrantyError::NotFound { .. } => ErrorCode::NotFound,
            WarrantyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WarrantyError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for WarrantyError {
    fn from(err: ValidationError) -> Self {
        WarrantyError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for WarrantyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => WarrantyError::NotFound {
                resource: err.detail("resource").unwrap_or("Record").to_string(),
                id: err.detail("id").unwrap_or_default().to_string(),
            },
            ErrorCode::ValidationFailed => WarrantyError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => WarrantyError::Infrastructure(err.to_string()),
        }
    }
}
