//! Authentication middleware and extractor for axum.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware depends only on the `AccessTokenValidator` port, so the
//! token scheme can change without touching routes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser, CommandMetadata, TenantId};
use crate::ports::AccessTokenValidator;

/// Auth middleware state - wraps the token validator.
pub type AuthState = Arc<dyn AccessTokenValidator>;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Validates `Authorization: Bearer <token>` headers.
///
/// A valid token injects `AuthenticatedUser` into request extensions. A
/// missing token passes through untouched so `RequireAuth` can reject it;
/// a bad token is rejected here with 401.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

fn auth_error_response(error: &AuthError) -> Response {
    let (status, message) = match error {
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
    };

    let body = ErrorResponse {
        code: "AUTH_ERROR".to_string(),
        message: message.to_string(),
        details: None,
    };
    (status, Json(body)).into_response()
}

/// Extractor that requires an authenticated caller.
///
/// Besides the user it carries the `CommandMetadata` every command handler
/// needs, with the request id as correlation id.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    pub user: AuthenticatedUser,
    pub metadata: CommandMetadata,
}

impl RequireAuth {
    pub fn tenant_id(&self) -> TenantId {
        self.user.tenant_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthRejection::Unauthenticated)?;

        let mut metadata = CommandMetadata::new(user.id, user.tenant_id);
        if let Some(request_id) = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            metadata = metadata.with_correlation_id(request_id);
        }

        Ok(RequireAuth { user, metadata })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = match self {
            AuthRejection::Unauthenticated => ErrorResponse {
                code: "UNAUTHENTICATED".to_string(),
                message: "Authentication required".to_string(),
                details: None,
            },
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
