//! Shared-secret JWT adapter for bearer token validation.
//!
//! Validates HS256 tokens by:
//!
//! 1. Checking the signature against the configured secret
//! 2. Validating issuer, audience and expiry claims
//! 3. Mapping claims to the domain `AuthenticatedUser` type
//!
//! Tokens without a `tenant_id` claim belong to `TenantId::DEFAULT`.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, TenantId, Timestamp, UserId};
use crate::ports::AccessTokenValidator;

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    /// Subject - the user ID
    sub: String,

    iss: String,

    aud: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,

    email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// HS256 access token validator.
pub struct JwtAccessTokenValidator {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
}

impl JwtAccessTokenValidator {
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            encoding_key: EncodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Signs a token for `user` that expires `ttl_secs` from now.
    ///
    /// Used by operators to mint tokens for local use and by tests.
    pub fn issue(&self, user: &AuthenticatedUser, ttl_secs: i64) -> Result<String, AuthError> {
        let claims = AccessClaims {
            sub: user.id.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: Timestamp::now().as_datetime().timestamp() + ttl_secs,
            tenant_id: Some(user.tenant_id.to_string()),
            email: user.email.clone(),
            name: user.display_name.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            AuthError::service_unavailable(format!("Failed to sign token: {}", e))
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation
    }
}

#[async_trait]
impl AccessTokenValidator for JwtAccessTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token issued for another service: {}", e);
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?
            .claims;

        let user_id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        let tenant_id = match claims.tenant_id.as_deref() {
            Some(raw) => raw.parse::<TenantId>().map_err(|_| {
                tracing::warn!("Invalid tenant ID in token: {}", raw);
                AuthError::InvalidToken
            })?,
            None => TenantId::DEFAULT,
        };

        Ok(AuthenticatedUser::new(
            user_id,
            tenant_id,
            claims.email,
            claims.name,
        ))
    }
}
