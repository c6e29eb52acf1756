//! CreateAppointmentHandler - Command handler for booking a screening
//! appointment.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{AppointmentId, CommandMetadata, UserId};
use crate::domain::screening::{
    Appointment, AppointmentCreated, AppointmentDetails, ScreeningError,
};
use crate::ports::{AppointmentRepository, EventPublisher, ScreeningRepository};

#[derive(Debug, Clone)]
pub struct CreateAppointmentCommand {
    /// Owner of the appointment. Defaults to the caller.
    pub user_id: Option<UserId>,
    pub details: AppointmentDetails,
}

pub struct CreateAppointmentHandler {
    screenings: Arc<dyn ScreeningRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateAppointmentHandler {
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            screenings,
            appointments,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAppointmentCommand,
        metadata: CommandMetadata,
    ) -> Result<Appointment, ScreeningError> {
        let user_id = cmd.user_id.unwrap_or(metadata.user_id);
        let appointment = Appointment::new(
            AppointmentId::new(),
            metadata.tenant_id,
            user_id,
            cmd.details,
        )?;

        let screening_id = appointment.screening_id();
        if !self.screenings.exists(metadata.tenant_id, screening_id).await? {
            return Err(ScreeningError::not_found("Screening", screening_id));
        }

        self.appointments.save(&appointment).await?;

        let event = AppointmentCreated::from_appointment(&appointment);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(appointment)
    }
}
