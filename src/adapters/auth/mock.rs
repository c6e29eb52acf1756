//! Mock token validator for testing.
//!
//! Maps fixed token strings to callers so HTTP tests can authenticate
//! without signing real JWTs.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, TenantId, UserId};
use crate::ports::AccessTokenValidator;

/// Tokens not registered return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockAccessTokenValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockAccessTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Registers a fresh user in `tenant_id` and returns it alongside the validator.
    pub fn with_tenant_user(
        self,
        token: impl Into<String>,
        tenant_id: TenantId,
    ) -> (Self, AuthenticatedUser) {
        let user_id = UserId::new();
        let user = AuthenticatedUser::new(
            user_id,
            tenant_id,
            format!("{}@test.example.com", user_id),
            None,
        );
        (self.with_user(token, user.clone()), user)
    }

    /// Forces all validations to return `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
    }
}

#[async_trait]
impl AccessTokenValidator for MockAccessTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
