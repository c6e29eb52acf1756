//! Appointment - a booked visit for a screening.

use crate::domain::foundation::{
    fields, AppointmentId, ScreeningId, TenantId, Timestamp, UserId, ValidationError,
};

pub const MAX_LOCATION_LENGTH: usize = 300;
pub const MAX_PROVIDER_LENGTH: usize = 200;
pub const MAX_NOTES_LENGTH: usize = 2000;

/// Editable fields of an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDetails {
    pub screening_id: ScreeningId,
    pub appointment_date: Timestamp,
    pub location: Option<String>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

impl AppointmentDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            screening_id: self.screening_id,
            appointment_date: self.appointment_date,
            location: fields::optional_text("location", self.location, MAX_LOCATION_LENGTH)?,
            provider: fields::optional_text("provider", self.provider, MAX_PROVIDER_LENGTH)?,
            notes: fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: AppointmentId,
    tenant_id: TenantId,
    user_id: UserId,
    details: AppointmentDetails,
    is_completed: bool,
    created_at: Timestamp,
}

impl Appointment {
    /// Books a new, not yet completed appointment.
    pub fn new(
        id: AppointmentId,
        tenant_id: TenantId,
        user_id: UserId,
        details: AppointmentDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            user_id,
            details: details.validated()?,
            is_completed: false,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: AppointmentId,
        tenant_id: TenantId,
        user_id: UserId,
        details: AppointmentDetails,
        is_completed: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            user_id,
            details,
            is_completed,
            created_at,
        }
    }

    // ─── Accessors ───

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn details(&self) -> &AppointmentDetails {
        &self.details
    }

    pub fn screening_id(&self) -> ScreeningId {
        self.details.screening_id
    }

    pub fn appointment_date(&self) -> Timestamp {
        self.details.appointment_date
    }

    pub fn location(&self) -> Option<&str> {
        self.details.location.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.details.provider.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ─── Mutations ───

    pub fn update(
        &mut self,
        details: AppointmentDetails,
        is_completed: bool,
    ) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        self.is_completed = is_completed;
        Ok(())
    }

    /// Marks the appointment as attended. Returns false if it already was.
    pub fn complete(&mut self) -> bool {
        let changed = !self.is_completed;
        self.is_completed = true;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> AppointmentDetails {
        AppointmentDetails {
            screening_id: ScreeningId::new(),
            appointment_date: Timestamp::now(),
            location: Some(" Main Street Clinic ".to_string()),
            provider: None,
            notes: Some(String::new()),
        }
    }

    fn appointment() -> Appointment {
        Appointment::new(AppointmentId::new(), TenantId::DEFAULT, UserId::new(), details()).unwrap()
    }

    #[test]
    fn new_appointment_is_not_completed() {
        assert!(!appointment().is_completed());
    }

    #[test]
    fn new_normalizes_optional_text() {
        let a = appointment();
        assert_eq!(a.location(), Some("Main Street Clinic"));
        assert_eq!(a.notes(), None);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut a = appointment();
        assert!(a.complete());
        assert!(!a.complete());
        assert!(a.is_completed());
    }

    #[test]
    fn update_rejects_overlong_location() {
        let mut a = appointment();
        let result = a.update(
            AppointmentDetails {
                location: Some("x".repeat(MAX_LOCATION_LENGTH + 1)),
                ..details()
            },
            true,
        );
        assert!(result.is_err());
        assert!(!a.is_completed());
    }
}
