//! Fire-and-forget event publication.

use crate::domain::foundation::{CommandMetadata, SerializableDomainEvent};
use crate::ports::EventPublisher;

/// Publishes `event` after its state change has been persisted.
///
/// The command has already succeeded at this point, so serialization and
/// broker failures are logged and dropped rather than returned.
pub(crate) async fn publish_best_effort<E>(
    publisher: &dyn EventPublisher,
    event: &E,
    metadata: &CommandMetadata,
) where
    E: SerializableDomainEvent,
{
    let envelope = match event.to_envelope() {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(
                event_type = event.event_type(),
                error = %err,
                "failed to serialize domain event"
            );
            return;
        }
    };

    let mut envelope = envelope
        .with_correlation_id(metadata.correlation_id())
        .with_user_id(metadata.user_id.to_string())
        .with_tenant_id(metadata.tenant_id.to_string());
    if let Some(trace_id) = metadata.trace_id() {
        envelope = envelope.with_trace_id(trace_id);
    }

    if let Err(err) = publisher.publish(envelope).await {
        tracing::warn!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            error = %err,
            "failed to publish domain event; continuing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::domain::foundation::{EventId, ReminderId, ScreeningId, Timestamp, UserId};
    use crate::domain::screening::ReminderCreated;

    fn event() -> ReminderCreated {
        ReminderCreated {
            event_id: EventId::new(),
            reminder_id: ReminderId::new(),
            user_id: UserId::new(),
            screening_id: ScreeningId::new(),
            reminder_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn envelope_carries_command_context() {
        let bus = InMemoryEventBus::new();
        let metadata = CommandMetadata::test_fixture()
            .with_correlation_id("corr-1")
            .with_trace_id("trace-1");

        publish_best_effort(&bus, &event(), &metadata).await;

        let events = bus.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "reminder.created.v1");
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(events[0].metadata.trace_id.as_deref(), Some("trace-1"));
        assert_eq!(
            events[0].metadata.tenant_id,
            Some(metadata.tenant_id.to_string())
        );
    }

    #[tokio::test]
    async fn publish_failure_is_swallowed() {
        let bus = InMemoryEventBus::failing();
        publish_best_effort(&bus, &event(), &CommandMetadata::test_fixture()).await;
        assert_eq!(bus.event_count(), 0);
    }
}
