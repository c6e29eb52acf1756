//! Screening domain events.
//!
//! Published to the topic exchange after the state change is persisted:
//! - `AppointmentCreated` - A screening appointment was booked
//! - `AppointmentCompleted` - An appointment was marked attended
//! - `ReminderCreated` - A reminder was scheduled

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, AppointmentId, EventId, ReminderId, ScreeningId, Timestamp, UserId,
};

use super::{Appointment, Reminder};

// ════════════════════════════════════════════════════════════════════════════
// AppointmentCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when an appointment is booked for a screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCreated {
    pub event_id: EventId,
    pub appointment_id: AppointmentId,
    pub user_id: UserId,
    pub screening_id: ScreeningId,
    pub appointment_date: Timestamp,
    pub location: Option<String>,
    pub created_at: Timestamp,
}

impl AppointmentCreated {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            event_id: EventId::new(),
            appointment_id: appointment.id(),
            user_id: appointment.user_id(),
            screening_id: appointment.screening_id(),
            appointment_date: appointment.appointment_date(),
            location: appointment.location().map(str::to_string),
            created_at: appointment.created_at(),
        }
    }
}

domain_event!(
    AppointmentCreated,
    event_type = "appointment.created.v1",
    aggregate_id = appointment_id,
    aggregate_type = "Appointment",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// AppointmentCompleted
// ════════════════════════════════════════════════════════════════════════════

/// Published the first time an appointment is marked completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCompleted {
    pub event_id: EventId,
    pub appointment_id: AppointmentId,
    pub user_id: UserId,
    pub screening_id: ScreeningId,
    pub completed_at: Timestamp,
}

domain_event!(
    AppointmentCompleted,
    event_type = "appointment.completed.v1",
    aggregate_id = appointment_id,
    aggregate_type = "Appointment",
    occurred_at = completed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ReminderCreated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderCreated {
    pub event_id: EventId,
    pub reminder_id: ReminderId,
    pub user_id: UserId,
    pub screening_id: ScreeningId,
    pub reminder_date: NaiveDate,
    pub created_at: Timestamp,
}

impl ReminderCreated {
    pub fn from_reminder(reminder: &Reminder) -> Self {
        Self {
            event_id: EventId::new(),
            reminder_id: reminder.id(),
            user_id: reminder.user_id(),
            screening_id: reminder.screening_id(),
            reminder_date: reminder.reminder_date(),
            created_at: reminder.created_at(),
        }
    }
}

domain_event!(
    ReminderCreated,
    event_type = "reminder.created.v1",
    aggregate_id = reminder_id,
    aggregate_type = "Reminder",
    occurred_at = created_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SerializableDomainEvent, TenantId};
    use crate::domain::screening::ReminderDetails;

    #[test]
    fn reminder_created_envelope_routes_by_type() {
        let reminder = Reminder::new(
            ReminderId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ReminderDetails {
                screening_id: ScreeningId::new(),
                reminder_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                message: None,
            },
        )
        .unwrap();

        let envelope = ReminderCreated::from_reminder(&reminder).to_envelope().unwrap();

        assert_eq!(envelope.event_type, "reminder.created.v1");
        assert_eq!(envelope.aggregate_type, "Reminder");
        assert_eq!(envelope.aggregate_id, reminder.id().to_string());
        assert_eq!(envelope.payload["reminder_date"], "2025-01-15");
    }
}
