//! Screening command and query handlers.

mod complete_appointment;
mod create_appointment;
mod create_reminder;
mod create_screening;
mod delete_appointment;
mod delete_reminder;
mod delete_screening;
mod get_appointment;
mod get_reminder;
mod get_screening;
mod list_appointments;
mod list_reminders;
mod list_screenings;
mod mark_reminder_sent;
mod record_screening_completed;
mod update_appointment;
mod update_reminder;
mod update_screening;

pub use complete_appointment::{CompleteAppointmentCommand, CompleteAppointmentHandler};
pub use create_appointment::{CreateAppointmentCommand, CreateAppointmentHandler};
pub use create_reminder::{CreateReminderCommand, CreateReminderHandler};
pub use create_screening::{CreateScreeningCommand, CreateScreeningHandler};
pub use delete_appointment::{DeleteAppointmentCommand, DeleteAppointmentHandler};
pub use delete_reminder::{DeleteReminderCommand, DeleteReminderHandler};
pub use delete_screening::{DeleteScreeningCommand, DeleteScreeningHandler};
pub use get_appointment::{GetAppointmentHandler, GetAppointmentQuery};
pub use get_reminder::{GetReminderHandler, GetReminderQuery};
pub use get_screening::{GetScreeningHandler, GetScreeningQuery};
pub use list_appointments::{ListAppointmentsHandler, ListAppointmentsQuery};
pub use list_reminders::{ListRemindersHandler, ListRemindersQuery};
pub use list_screenings::{ListScreeningsHandler, ListScreeningsQuery};
pub use mark_reminder_sent::{MarkReminderSentCommand, MarkReminderSentHandler};
pub use record_screening_completed::{
    RecordScreeningCompletedCommand, RecordScreeningCompletedHandler,
};
pub use update_appointment::{UpdateAppointmentCommand, UpdateAppointmentHandler};
pub use update_reminder::{UpdateReminderCommand, UpdateReminderHandler};
pub use update_screening::{UpdateScreeningCommand, UpdateScreeningHandler};
