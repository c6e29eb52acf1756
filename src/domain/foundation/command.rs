//! Command infrastructure for CQRS handlers.
//!
//! Every command handler accepts a `CommandMetadata` alongside its command.
//! It carries the caller's identity and tenant scope plus tracing context,
//! so handlers never take loose `user_id`/`tenant_id`/`correlation_id`
//! parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TenantId, UserId};

/// Context that flows through command processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The authenticated caller.
    pub user_id: UserId,

    /// Tenant every read and write of this command is scoped to.
    pub tenant_id: TenantId,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl CommandMetadata {
    pub fn new(user_id: UserId, tenant_id: TenantId) -> Self {
        Self {
            user_id,
            tenant_id,
            correlation_id: None,
            trace_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Returns the correlation id, generating one when none was supplied.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Metadata for a fresh user in the default tenant.
    pub fn test_fixture() -> Self {
        Self::new(UserId::new(), TenantId::DEFAULT).with_correlation_id("test-correlation-id")
    }
}
