//! ListAppointmentsHandler - Query handler for a tenant's appointments.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::screening::{Appointment, ScreeningError};
use crate::ports::{AppointmentFilter, AppointmentRepository};

#[derive(Debug, Clone)]
pub struct ListAppointmentsQuery {
    pub tenant_id: TenantId,
    pub filter: AppointmentFilter,
}

pub struct ListAppointmentsHandler {
    repository: Arc<dyn AppointmentRepository>,
}

impl ListAppointmentsHandler {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListAppointmentsQuery,
    ) -> Result<Vec<Appointment>, ScreeningError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::appointment_details;
    use crate::domain::foundation::{AppointmentId, ScreeningId, Timestamp, UserId};

    #[tokio::test]
    async fn lists_open_appointments_in_date_order() {
        let store: Arc<dyn AppointmentRepository> = Arc::new(InMemoryScreeningStore::new());
        let screening_id = ScreeningId::new();
        let now = Utc::now();

        let mut booked = Vec::new();
        for days in [10, 2, 5] {
            let mut details = appointment_details(screening_id);
            details.appointment_date = Timestamp::from_datetime(now + Duration::days(days));
            let appointment =
                Appointment::new(AppointmentId::new(), TenantId::DEFAULT, UserId::new(), details)
                    .unwrap();
            store.save(&appointment).await.unwrap();
            booked.push(appointment);
        }
        let mut done = booked[2].clone();
        done.complete();
        store.update(&done).await.unwrap();

        let handler = ListAppointmentsHandler::new(store);
        let open = handler
            .handle(ListAppointmentsQuery {
                tenant_id: TenantId::DEFAULT,
                filter: AppointmentFilter {
                    screening_id: Some(screening_id),
                    completed: Some(false),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let ids: Vec<AppointmentId> = open.iter().map(Appointment::id).collect();
        assert_eq!(ids, vec![booked[1].id(), booked[0].id()]);
    }
}
