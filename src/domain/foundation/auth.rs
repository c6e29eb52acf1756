//! Authentication types for the domain layer.
//!
//! These types represent a caller extracted from a bearer token. They carry
//! no provider dependencies; any token validator adapter populates them
//! through the `AccessTokenValidator` port.

use super::{TenantId, UserId};
use thiserror::Error;

/// Authenticated caller extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,

    /// Organizational scope applied to every query made on this user's behalf.
    pub tenant_id: TenantId,

    pub email: String,

    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(
        id: UserId,
        tenant_id: TenantId,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            email: email.into(),
            display_name,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True when the caller should obtain a new token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
