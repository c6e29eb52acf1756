//! CompleteAppointmentHandler - Command handler for marking an appointment
//! attended.
//!
//! Completing an already completed appointment succeeds without publishing
//! a second `AppointmentCompleted`.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{AppointmentId, CommandMetadata, EventId, Timestamp};
use crate::domain::screening::{Appointment, AppointmentCompleted, ScreeningError};
use crate::ports::{AppointmentRepository, EventPublisher};

#[derive(Debug, Clone)]
pub struct CompleteAppointmentCommand {
    pub appointment_id: AppointmentId,
}

pub struct CompleteAppointmentHandler {
    repository: Arc<dyn AppointmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteAppointmentHandler {
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteAppointmentCommand,
        metadata: CommandMetadata,
    ) -> Result<Appointment, ScreeningError> {
        let mut appointment = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.appointment_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Appointment", cmd.appointment_id))?;

        if !appointment.complete() {
            return Ok(appointment);
        }

        self.repository.update(&appointment).await?;

        let event = AppointmentCompleted {
            event_id: EventId::new(),
            appointment_id: appointment.id(),
            user_id: appointment.user_id(),
            screening_id: appointment.screening_id(),
            completed_at: Timestamp::now(),
        };
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(appointment)
    }
}
