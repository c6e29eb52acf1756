//! HTTP DTOs for screening, appointment and reminder endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AppointmentId, ReminderId, ScreeningId, Timestamp, UserId};
use crate::domain::screening::{
    Appointment, AppointmentDetails, Reminder, ReminderDetails, Screening, ScreeningDetails,
    ScreeningType,
};
use crate::ports::{AppointmentFilter, ReminderFilter, ScreeningFilter};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Editable screening fields, the body of `PUT /api/screenings/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningRequest {
    pub screening_type: ScreeningType,
    pub name: String,
    pub recommended_frequency_months: u32,
    #[serde(default)]
    pub last_screening_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ScreeningRequest> for ScreeningDetails {
    fn from(req: ScreeningRequest) -> Self {
        Self {
            screening_type: req.screening_type,
            name: req.name,
            recommended_frequency_months: req.recommended_frequency_months,
            last_screening_date: req.last_screening_date,
            next_due_date: req.next_due_date,
            provider: req.provider,
            notes: req.notes,
        }
    }
}

/// Body of `POST /api/screenings`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScreeningRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub screening: ScreeningRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordCompletionRequest {
    pub completed_on: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRequest {
    pub screening_id: ScreeningId,
    pub appointment_date: Timestamp,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<AppointmentRequest> for AppointmentDetails {
    fn from(req: AppointmentRequest) -> Self {
        Self {
            screening_id: req.screening_id,
            appointment_date: req.appointment_date,
            location: req.location,
            provider: req.provider,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub appointment: AppointmentRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(flatten)]
    pub appointment: AppointmentRequest,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRequest {
    pub screening_id: ScreeningId,
    pub reminder_date: NaiveDate,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ReminderRequest> for ReminderDetails {
    fn from(req: ReminderRequest) -> Self {
        Self {
            screening_id: req.screening_id,
            reminder_date: req.reminder_date,
            message: req.message,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub reminder: ReminderRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReminderRequest {
    #[serde(flatten)]
    pub reminder: ReminderRequest,
    #[serde(default)]
    pub is_sent: bool,
}

/// Query parameters for listing screenings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListScreeningsParams {
    pub user_id: Option<UserId>,
    pub screening_type: Option<ScreeningType>,
    pub due_by: Option<NaiveDate>,
}

impl From<ListScreeningsParams> for ScreeningFilter {
    fn from(params: ListScreeningsParams) -> Self {
        Self {
            user_id: params.user_id,
            screening_type: params.screening_type,
            due_by: params.due_by,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAppointmentsParams {
    pub user_id: Option<UserId>,
    pub screening_id: Option<ScreeningId>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub completed: Option<bool>,
}

impl From<ListAppointmentsParams> for AppointmentFilter {
    fn from(params: ListAppointmentsParams) -> Self {
        Self {
            user_id: params.user_id,
            screening_id: params.screening_id,
            from: params.from,
            to: params.to,
            completed: params.completed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRemindersParams {
    pub user_id: Option<UserId>,
    pub screening_id: Option<ScreeningId>,
    pub is_sent: Option<bool>,
    pub due_on: Option<NaiveDate>,
}

impl From<ListRemindersParams> for ReminderFilter {
    fn from(params: ListRemindersParams) -> Self {
        Self {
            user_id: params.user_id,
            screening_id: params.screening_id,
            is_sent: params.is_sent,
            due_on: params.due_on,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResponse {
    pub id: ScreeningId,
    pub user_id: UserId,
    pub screening_type: ScreeningType,
    pub name: String,
    pub recommended_frequency_months: u32,
    pub last_screening_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub provider: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Screening> for ScreeningResponse {
    fn from(screening: &Screening) -> Self {
        let d = screening.details();
        Self {
            id: screening.id(),
            user_id: screening.user_id(),
            screening_type: d.screening_type,
            name: d.name.clone(),
            recommended_frequency_months: d.recommended_frequency_months,
            last_screening_date: d.last_screening_date,
            next_due_date: d.next_due_date,
            provider: d.provider.clone(),
            notes: d.notes.clone(),
            created_at: screening.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: AppointmentId,
    pub user_id: UserId,
    pub screening_id: ScreeningId,
    pub appointment_date: Timestamp,
    pub location: Option<String>,
    pub provider: Option<String>,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: Timestamp,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(appointment: &Appointment) -> Self {
        let d = appointment.details();
        Self {
            id: appointment.id(),
            user_id: appointment.user_id(),
            screening_id: d.screening_id,
            appointment_date: d.appointment_date,
            location: d.location.clone(),
            provider: d.provider.clone(),
            notes: d.notes.clone(),
            is_completed: appointment.is_completed(),
            created_at: appointment.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub id: ReminderId,
    pub user_id: UserId,
    pub screening_id: ScreeningId,
    pub reminder_date: NaiveDate,
    pub message: Option<String>,
    pub is_sent: bool,
    pub created_at: Timestamp,
}

impl From<&Reminder> for ReminderResponse {
    fn from(reminder: &Reminder) -> Self {
        let d = reminder.details();
        Self {
            id: reminder.id(),
            user_id: reminder.user_id(),
            screening_id: d.screening_id,
            reminder_date: d.reminder_date,
            message: d.message.clone(),
            is_sent: reminder.is_sent(),
            created_at: reminder.created_at(),
        }
    }
}
