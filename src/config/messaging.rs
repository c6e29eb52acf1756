//! Event exchange configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where domain events are published.
///
/// Without a `redis_url` events are only written to the trace log.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingConfig {
    /// Redis connection URL for the pub/sub exchange
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Channel prefix; events go to `<exchange>.<event_type>`
    #[serde(default = "default_exchange")]
    pub exchange: String,
}

impl MessagingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.redis_url {
            if !url.starts_with("redis://") && !url.starts_with("rediss://") {
                return Err(ValidationError::InvalidRedisUrl);
            }
        }
        if self.exchange.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MESSAGING__EXCHANGE"));
        }
        Ok(())
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            exchange: default_exchange(),
        }
    }
}

fn default_exchange() -> String {
    "lifedesk.events".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broker_is_optional() {
        let config = MessagingConfig::default();
        assert!(config.redis_url.is_none());
        assert_eq!(config.exchange, "lifedesk.events");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_redis_url() {
        let config = MessagingConfig {
            redis_url: Some("amqp://localhost".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRedisUrl)));
    }

    #[test]
    fn accepts_tls_redis_url() {
        let config = MessagingConfig {
            redis_url: Some("rediss://cache.internal:6380".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blank_exchange() {
        let config = MessagingConfig {
            exchange: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
