//! Error body and status mapping shared by every HTTP adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::billing::BillingError;
use crate::domain::screening::ScreeningError;
use crate::domain::tax::TaxError;
use crate::domain::warranty::WarrantyError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Failure returned from an HTTP handler: a status plus an `ErrorResponse` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }

    /// Logs the underlying failure and answers with a generic 500.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(error = %message, "request failed on infrastructure error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::internal("Internal server error"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Every context error has the same three variants, so they share one mapping:
/// not-found → 404, validation → 400, infrastructure → 500.
macro_rules! context_error_into_api_error {
    ($($error:ident),+ $(,)?) => {
        $(
            impl From<$error> for ApiError {
                fn from(err: $error) -> Self {
                    match err {
                        $error::NotFound { resource, id } => Self::new(
                            StatusCode::NOT_FOUND,
                            ErrorResponse::not_found(&resource, &id),
                        ),
                        $error::ValidationFailed { field, message } => Self::new(
                            StatusCode::BAD_REQUEST,
                            ErrorResponse::validation(&field, message),
                        ),
                        $error::Infrastructure(message) => Self::internal(message),
                    }
                }
            }
        )+
    };
}

context_error_into_api_error!(ScreeningError, WarrantyError, BillingError, TaxError);
