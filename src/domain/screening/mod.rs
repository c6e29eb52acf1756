//! Screening domain module.
//!
//! Tracks recurring preventive health screenings, the appointments booked
//! for them, and reminders about upcoming ones.
//!
//! # Events
//!
//! - `AppointmentCreated` - Published when an appointment is booked
//! - `AppointmentCompleted` - Published when an appointment is marked attended
//! - `ReminderCreated` - Published when a reminder is scheduled

mod appointment;
mod errors;
mod events;
mod reminder;
#[allow(clippy::module_inception)]
mod screening;

pub use appointment::{Appointment, AppointmentDetails};
pub use errors::ScreeningError;
pub use events::{AppointmentCompleted, AppointmentCreated, ReminderCreated};
pub use reminder::{Reminder, ReminderDetails};
pub use screening::{Screening, ScreeningDetails, ScreeningType};
