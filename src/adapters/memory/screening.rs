//! In-memory store for screenings, appointments and reminders.

use async_trait::async_trait;

use crate::domain::foundation::{AppointmentId, DomainError, ReminderId, ScreeningId, TenantId};
use crate::domain::screening::{Appointment, Reminder, Screening};
use crate::ports::{
    AppointmentFilter, AppointmentRepository, ReminderFilter, ReminderRepository,
    ScreeningFilter, ScreeningRepository,
};

use super::table::Table;

/// Holds the whole screening context so screening deletes can cascade.
pub struct InMemoryScreeningStore {
    screenings: Table<ScreeningId, Screening>,
    appointments: Table<AppointmentId, Appointment>,
    reminders: Table<ReminderId, Reminder>,
}

impl InMemoryScreeningStore {
    pub fn new() -> Self {
        Self {
            screenings: Table::new("Screening"),
            appointments: Table::new("Appointment"),
            reminders: Table::new("Reminder"),
        }
    }
}

impl Default for InMemoryScreeningStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreeningRepository for InMemoryScreeningStore {
    async fn save(&self, screening: &Screening) -> Result<(), DomainError> {
        self.screenings
            .insert(screening.tenant_id(), screening.id(), screening.clone())
            .await;
        Ok(())
    }

    async fn update(&self, screening: &Screening) -> Result<(), DomainError> {
        self.screenings
            .replace(screening.tenant_id(), screening.id(), screening.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ScreeningId,
    ) -> Result<Option<Screening>, DomainError> {
        Ok(self.screenings.get(tenant_id, id).await)
    }

    async fn exists(&self, tenant_id: TenantId, id: ScreeningId) -> Result<bool, DomainError> {
        Ok(self.screenings.contains(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ScreeningFilter,
    ) -> Result<Vec<Screening>, DomainError> {
        let mut rows = self.screenings.select(tenant_id, |s| filter.matches(s)).await;
        rows.sort_by(|a, b| {
            let due = |s: &Screening| (s.next_due_date().is_none(), s.next_due_date());
            due(a)
                .cmp(&due(b))
                .then_with(|| a.name().cmp(b.name()))
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: ScreeningId) -> Result<(), DomainError> {
        self.screenings.remove(tenant_id, id).await?;
        self.appointments
            .purge(tenant_id, |a| a.screening_id() == id)
            .await;
        self.reminders.purge(tenant_id, |r| r.screening_id() == id).await;
        Ok(())
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryScreeningStore {
    async fn save(&self, appointment: &Appointment) -> Result<(), DomainError> {
        self.appointments
            .insert(appointment.tenant_id(), appointment.id(), appointment.clone())
            .await;
        Ok(())
    }

    async fn update(&self, appointment: &Appointment) -> Result<(), DomainError> {
        self.appointments
            .replace(appointment.tenant_id(), appointment.id(), appointment.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, DomainError> {
        Ok(self.appointments.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, DomainError> {
        let mut rows = self
            .appointments
            .select(tenant_id, |a| filter.matches(a))
            .await;
        rows.sort_by_key(|a| (a.appointment_date(), a.created_at()));
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: AppointmentId) -> Result<(), DomainError> {
        self.appointments.remove(tenant_id, id).await.map(|_| ())
    }
}

#[async_trait]
impl ReminderRepository for InMemoryScreeningStore {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        self.reminders
            .insert(reminder.tenant_id(), reminder.id(), reminder.clone())
            .await;
        Ok(())
    }

    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError> {
        self.reminders
            .replace(reminder.tenant_id(), reminder.id(), reminder.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ReminderId,
    ) -> Result<Option<Reminder>, DomainError> {
        Ok(self.reminders.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ReminderFilter,
    ) -> Result<Vec<Reminder>, DomainError> {
        let mut rows = self.reminders.select(tenant_id, |r| filter.matches(r)).await;
        rows.sort_by_key(|r| (r.reminder_date(), r.created_at()));
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: ReminderId) -> Result<(), DomainError> {
        self.reminders.remove(tenant_id, id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::screening::{
        AppointmentDetails, ReminderDetails, ScreeningDetails, ScreeningType,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn screening(name: &str, next_due: Option<NaiveDate>) -> Screening {
        Screening::new(
            ScreeningId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ScreeningDetails {
                screening_type: ScreeningType::Other,
                name: name.to_string(),
                recommended_frequency_months: 12,
                last_screening_date: None,
                next_due_date: next_due,
                provider: None,
                notes: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn screenings_list_by_due_date_with_undated_last() {
        let store = InMemoryScreeningStore::new();
        let repo: &dyn ScreeningRepository = &store;
        repo.save(&screening("Undated", None)).await.unwrap();
        repo.save(&screening("Later", Some(date(2025, 9, 1)))).await.unwrap();
        repo.save(&screening("Sooner", Some(date(2025, 3, 1)))).await.unwrap();

        let names: Vec<String> = repo
            .list(TenantId::DEFAULT, &ScreeningFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();

        assert_eq!(names, vec!["Sooner", "Later", "Undated"]);
    }

    #[tokio::test]
    async fn deleting_a_screening_removes_its_children() {
        let store = InMemoryScreeningStore::new();
        let s = screening("Dental", None);
        ScreeningRepository::save(&store, &s).await.unwrap();

        let appointment = Appointment::new(
            AppointmentId::new(),
            TenantId::DEFAULT,
            s.user_id(),
            AppointmentDetails {
                screening_id: s.id(),
                appointment_date: Timestamp::now(),
                location: None,
                provider: None,
                notes: None,
            },
        )
        .unwrap();
        AppointmentRepository::save(&store, &appointment).await.unwrap();

        let reminder = Reminder::new(
            ReminderId::new(),
            TenantId::DEFAULT,
            s.user_id(),
            ReminderDetails {
                screening_id: s.id(),
                reminder_date: date(2025, 1, 15),
                message: None,
            },
        )
        .unwrap();
        ReminderRepository::save(&store, &reminder).await.unwrap();

        ScreeningRepository::delete(&store, TenantId::DEFAULT, s.id())
            .await
            .unwrap();

        let appointments: &dyn AppointmentRepository = &store;
        let reminders: &dyn ReminderRepository = &store;
        assert!(appointments
            .find_by_id(TenantId::DEFAULT, appointment.id())
            .await
            .unwrap()
            .is_none());
        assert!(reminders
            .find_by_id(TenantId::DEFAULT, reminder.id())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_of_missing_screening_is_not_found() {
        let store = InMemoryScreeningStore::new();
        let err = ScreeningRepository::update(&store, &screening("Ghost", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::NotFound);
    }
}
