//! Billing-specific error types.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by bill and payment handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl BillingError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        BillingError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BillingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::NotFound { .. } => ErrorCode::NotFound,
            BillingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BillingError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for BillingError {
    fn from(err: ValidationError) -> Self {
        BillingError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => BillingError::NotFound {
                resource: err.detail("resource").unwrap_or("Record").to_string(),
                id: err.detail("id").unwrap_or_default().to_string(),
            },
            ErrorCode::ValidationFailed => BillingError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => BillingError::Infrastructure(err.to_string()),
        }
    }
}
