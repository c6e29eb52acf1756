//! EventPublisher port - Interface for publishing domain events.
//!
//! Handlers publish after the state change has been persisted. The port
//! reports failures, but callers treat publishing as fire-and-forget: see
//! `application::publish_best_effort`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events to a topic exchange.
///
/// Implementations route each envelope by its `event_type`.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
