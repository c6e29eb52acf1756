//! In-memory event bus for tests.
//!
//! Captures every published envelope so tests can assert on them. A
//! failing bus rejects every publish, which lets handler tests check
//! that publish failures never fail the request.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus that records published envelopes.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("appointment.created.v1"));
/// ```
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
    fail_publish: bool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_publish: false,
        }
    }

    /// A bus whose every publish returns a messaging error.
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_publish: true,
        }
    }

    // === Test Helpers ===

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        !self.events_of_type(event_type).is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.published_events().len()
    }

    pub fn clear(&self) {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail_publish {
            return Err(DomainError::new(
                ErrorCode::MessagingError,
                "Simulated publish failure",
            ));
        }
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
