//! Persistence ports for the screening context.
//!
//! Every read and delete is scoped by `TenantId`; a record in another tenant
//! behaves exactly like a missing one. `update` and `delete` report
//! `ErrorCode::NotFound` when no row matched.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{
    fields, AppointmentId, DomainError, ReminderId, ScreeningId, TenantId, Timestamp, UserId,
};
use crate::domain::screening::{Appointment, Reminder, Screening, ScreeningType};

// ════════════════════════════════════════════════════════════════════════════
// Filters
// ════════════════════════════════════════════════════════════════════════════

/// Screening list filter. Results are ordered by next due date (unset last),
/// then name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningFilter {
    pub user_id: Option<UserId>,
    pub screening_type: Option<ScreeningType>,
    /// Only screenings due on or before this date.
    pub due_by: Option<NaiveDate>,
}

impl ScreeningFilter {
    pub fn matches(&self, screening: &Screening) -> bool {
        self.user_id.map_or(true, |u| screening.user_id() == u)
            && self
                .screening_type
                .map_or(true, |t| screening.screening_type() == t)
            && self.due_by.map_or(true, |by| {
                screening.next_due_date().is_some_and(|due| due <= by)
            })
    }
}

/// Appointment list filter. Results are ordered by appointment date ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub user_id: Option<UserId>,
    pub screening_id: Option<ScreeningId>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub completed: Option<bool>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let at = appointment.appointment_date();
        self.user_id.map_or(true, |u| appointment.user_id() == u)
            && self
                .screening_id
                .map_or(true, |s| appointment.screening_id() == s)
            && self.from.map_or(true, |from| at >= from)
            && self.to.map_or(true, |to| at <= to)
            && self
                .completed
                .map_or(true, |c| appointment.is_completed() == c)
    }
}

/// Reminder list filter. Results are ordered by reminder date ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub user_id: Option<UserId>,
    pub screening_id: Option<ScreeningId>,
    pub is_sent: Option<bool>,
    /// Only unsent reminders dated on or before this date.
    pub due_on: Option<NaiveDate>,
}

impl ReminderFilter {
    pub fn matches(&self, reminder: &Reminder) -> bool {
        self.user_id.map_or(true, |u| reminder.user_id() == u)
            && self
                .screening_id
                .map_or(true, |s| reminder.screening_id() == s)
            && self.is_sent.map_or(true, |sent| reminder.is_sent() == sent)
            && self.due_on.map_or(true, |on| {
                !reminder.is_sent() && fields::within(reminder.reminder_date(), None, Some(on))
            })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Repositories
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    async fn save(&self, screening: &Screening) -> Result<(), DomainError>;

    async fn update(&self, screening: &Screening) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ScreeningId,
    ) -> Result<Option<Screening>, DomainError>;

    async fn exists(&self, tenant_id: TenantId, id: ScreeningId) -> Result<bool, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ScreeningFilter,
    ) -> Result<Vec<Screening>, DomainError>;

    /// Deletes the screening together with its appointments and reminders.
    async fn delete(&self, tenant_id: TenantId, id: ScreeningId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn save(&self, appointment: &Appointment) -> Result<(), DomainError>;

    async fn update(&self, appointment: &Appointment) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: AppointmentId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError>;

    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ReminderId,
    ) -> Result<Option<Reminder>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ReminderFilter,
    ) -> Result<Vec<Reminder>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: ReminderId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::ReminderDetails;

    #[allow(dead_code)]
    fn assert_object_safe(
        _: &dyn ScreeningRepository,
        _: &dyn AppointmentRepository,
        _: &dyn ReminderRepository,
    ) {
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(on: NaiveDate) -> Reminder {
        Reminder::new(
            ReminderId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ReminderDetails {
                screening_id: ScreeningId::new(),
                reminder_date: on,
                message: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_reminder_filter_matches_everything() {
        assert!(ReminderFilter::default().matches(&reminder(date(2025, 1, 15))));
    }

    #[test]
    fn due_on_excludes_future_and_sent_reminders() {
        let filter = ReminderFilter {
            due_on: Some(date(2025, 1, 15)),
            ..Default::default()
        };
        assert!(filter.matches(&reminder(date(2025, 1, 15))));
        assert!(!filter.matches(&reminder(date(2025, 1, 16))));

        let mut sent = reminder(date(2025, 1, 1));
        sent.mark_sent();
        assert!(!filter.matches(&sent));
    }

    #[test]
    fn user_filter_excludes_other_users() {
        let r = reminder(date(2025, 1, 15));
        let filter = ReminderFilter {
            user_id: Some(UserId::new()),
            ..Default::default()
        };
        assert!(!filter.matches(&r));
    }
}
