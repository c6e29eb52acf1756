//! Redis pub/sub event publisher.
//!
//! Each envelope is serialized to JSON and sent with `PUBLISH` on the
//! channel `<exchange>.<event_type>`, so subscribers can pattern-match on
//! `<exchange>.appointment.*` and similar.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
    exchange: String,
}

impl RedisEventPublisher {
    pub fn new(conn: MultiplexedConnection, exchange: impl Into<String>) -> Self {
        Self {
            conn,
            exchange: exchange.into(),
        }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str, exchange: impl Into<String>) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(messaging_error)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(messaging_error)?;
        Ok(Self::new(conn, exchange))
    }

    fn channel(&self, event_type: &str) -> String {
        channel_for(&self.exchange, event_type)
    }
}

fn channel_for(exchange: &str, event_type: &str) -> String {
    format!("{exchange}.{event_type}")
}

fn messaging_error(err: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::MessagingError, err.to_string())
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let channel = self.channel(&event.event_type);
        let payload = serde_json::to_string(&event).map_err(|e| {
            DomainError::new(ErrorCode::MessagingError, format!("serialize envelope: {e}"))
        })?;

        let mut conn = self.conn.clone();
        let receivers: i64 = conn.publish(&channel, payload).await.map_err(messaging_error)?;

        tracing::debug!(
            channel = %channel,
            event_id = %event.event_id,
            receivers,
            "event published"
        );
        Ok(())
    }
}
