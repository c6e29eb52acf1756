//! GetAppointmentHandler - Query handler for a single appointment.

use std::sync::Arc;

use crate::domain::foundation::{AppointmentId, TenantId};
use crate::domain::screening::{Appointment, ScreeningError};
use crate::ports::AppointmentRepository;

#[derive(Debug, Clone)]
pub struct GetAppointmentQuery {
    pub tenant_id: TenantId,
    pub appointment_id: AppointmentId,
}

pub struct GetAppointmentHandler {
    repository: Arc<dyn AppointmentRepository>,
}

impl GetAppointmentHandler {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAppointmentQuery) -> Result<Appointment, ScreeningError> {
        self.repository
            .find_by_id(query.tenant_id, query.appointment_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Appointment", query.appointment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;

    #[tokio::test]
    async fn missing_appointment_is_not_found() {
        let handler = GetAppointmentHandler::new(Arc::new(InMemoryScreeningStore::new()));
        let id = AppointmentId::new();

        let err = handler
            .handle(GetAppointmentQuery {
                tenant_id: TenantId::DEFAULT,
                appointment_id: id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ScreeningError::not_found("Appointment", id));
    }
}
