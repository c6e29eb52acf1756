//! DeleteAppointmentHandler - Command handler for cancelling an appointment.

use std::sync::Arc;

use crate::domain::foundation::{AppointmentId, CommandMetadata};
use crate::domain::screening::ScreeningError;
use crate::ports::AppointmentRepository;

#[derive(Debug, Clone)]
pub struct DeleteAppointmentCommand {
    pub appointment_id: AppointmentId,
}

pub struct DeleteAppointmentHandler {
    repository: Arc<dyn AppointmentRepository>,
}

impl DeleteAppointmentHandler {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteAppointmentCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ScreeningError> {
        self.repository
            .delete(metadata.tenant_id, cmd.appointment_id)
            .await?;
        Ok(())
    }
}
