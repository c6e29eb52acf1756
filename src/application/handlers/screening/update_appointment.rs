//! UpdateAppointmentHandler - Command handler for editing an appointment.

use std::sync::Arc;

use crate::domain::foundation::{AppointmentId, CommandMetadata};
use crate::domain::screening::{Appointment, AppointmentDetails, ScreeningError};
use crate::ports::{AppointmentRepository, ScreeningRepository};

#[derive(Debug, Clone)]
pub struct UpdateAppointmentCommand {
    pub appointment_id: AppointmentId,
    pub details: AppointmentDetails,
    pub is_completed: bool,
}

pub struct UpdateAppointmentHandler {
    screenings: Arc<dyn ScreeningRepository>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl UpdateAppointmentHandler {
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            screenings,
            appointments,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAppointmentCommand,
        metadata: CommandMetadata,
    ) -> Result<Appointment, ScreeningError> {
        let mut appointment = self
            .appointments
            .find_by_id(metadata.tenant_id, cmd.appointment_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Appointment", cmd.appointment_id))?;

        let screening_id = cmd.details.screening_id;
        if !self.screenings.exists(metadata.tenant_id, screening_id).await? {
            return Err(ScreeningError::not_found("Screening", screening_id));
        }

        appointment.update(cmd.details, cmd.is_completed)?;
        self.appointments.update(&appointment).await?;

        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::{
        appointment_details, metadata, screening_details,
    };
    use crate::domain::foundation::ScreeningId;
    use crate::domain::screening::Screening;

    #[tokio::test]
    async fn moving_to_an_unknown_screening_is_not_found() {
        let store = Arc::new(InMemoryScreeningStore::new());
        let metadata = metadata();
        let screening = Screening::new(
            ScreeningId::new(),
            metadata.tenant_id,
            metadata.user_id,
            screening_details("Dental"),
        )
        .unwrap();
        ScreeningRepository::save(&*store, &screening).await.unwrap();
        let appointment = Appointment::new(
            AppointmentId::new(),
            metadata.tenant_id,
            metadata.user_id,
            appointment_details(screening.id()),
        )
        .unwrap();
        AppointmentRepository::save(&*store, &appointment).await.unwrap();
        let handler = UpdateAppointmentHandler::new(store.clone(), store.clone());

        let mut details = appointment_details(screening.id());
        details.location = Some("  Uptown clinic ".to_string());
        let updated = handler
            .handle(
                UpdateAppointmentCommand {
                    appointment_id: appointment.id(),
                    details,
                    is_completed: true,
                },
                metadata.clone(),
            )
            .await
            .unwrap();
        assert_eq!(updated.location(), Some("Uptown clinic"));
        assert!(updated.is_completed());

        let result = handler
            .handle(
                UpdateAppointmentCommand {
                    appointment_id: appointment.id(),
                    details: appointment_details(ScreeningId::new()),
                    is_completed: false,
                },
                metadata,
            )
            .await;
        assert!(matches!(
            result,
            Err(ScreeningError::NotFound { ref resource, .. }) if resource == "Screening"
        ));
    }

    #[tokio::test]
    async fn unknown_appointment_is_not_found() {
        let store = Arc::new(InMemoryScreeningStore::new());
        let handler = UpdateAppointmentHandler::new(store.clone(), store);

        let result = handler
            .handle(
                UpdateAppointmentCommand {
                    appointment_id: AppointmentId::new(),
                    details: appointment_details(ScreeningId::new()),
                    is_completed: false,
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ScreeningError::NotFound { ref resource, .. }) if resource == "Appointment"
        ));
    }
}
