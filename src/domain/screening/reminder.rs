//! Reminder - a dated nudge about an upcoming screening.

use chrono::NaiveDate;

use crate::domain::foundation::{
    fields, ReminderId, ScreeningId, TenantId, Timestamp, UserId, ValidationError,
};

pub const MAX_MESSAGE_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDetails {
    pub screening_id: ScreeningId,
    pub reminder_date: NaiveDate,
    pub message: Option<String>,
}

impl ReminderDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            screening_id: self.screening_id,
            reminder_date: self.reminder_date,
            message: fields::optional_text("message", self.message, MAX_MESSAGE_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    id: ReminderId,
    tenant_id: TenantId,
    user_id: UserId,
    details: ReminderDetails,
    is_sent: bool,
    created_at: Timestamp,
}

impl Reminder {
    /// Creates an unsent reminder.
    pub fn new(
        id: ReminderId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ReminderDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            user_id,
            details: details.validated()?,
            is_sent: false,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: ReminderId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ReminderDetails,
        is_sent: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            user_id,
            details,
            is_sent,
            created_at,
        }
    }

    // ─── Accessors ───

    pub fn id(&self) -> ReminderId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn details(&self) -> &ReminderDetails {
        &self.details
    }

    pub fn screening_id(&self) -> ScreeningId {
        self.details.screening_id
    }

    pub fn reminder_date(&self) -> NaiveDate {
        self.details.reminder_date
    }

    pub fn message(&self) -> Option<&str> {
        self.details.message.as_deref()
    }

    pub fn is_sent(&self) -> bool {
        self.is_sent
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Unsent and dated on or before `on`.
    pub fn is_due(&self, on: NaiveDate) -> bool {
        !self.is_sent && self.details.reminder_date <= on
    }

    // ─── Mutations ───

    pub fn update(&mut self, details: ReminderDetails, is_sent: bool) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        self.is_sent = is_sent;
        Ok(())
    }

    pub fn mark_sent(&mut self) {
        self.is_sent = true;
    }
}
