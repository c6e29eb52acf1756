//! AccessTokenValidator port - turns a bearer token into a caller.
//!
//! The HTTP auth middleware depends only on this trait, so the token format
//! and signing scheme stay an adapter concern.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

#[async_trait]
pub trait AccessTokenValidator: Send + Sync {
    /// Validates `token` and returns the caller it identifies.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidToken` for malformed or badly signed tokens
    /// - `AuthError::TokenExpired` once the expiry has passed
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AccessTokenValidator) {}
}
