//! Publisher used when no message broker is configured.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Writes each envelope to the trace log and drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventPublisher;

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_type = %event.event_type,
            event_id = %event.event_id,
            aggregate_type = %event.aggregate_type,
            aggregate_id = %event.aggregate_id,
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            "event emitted without broker"
        );
        Ok(())
    }
}
