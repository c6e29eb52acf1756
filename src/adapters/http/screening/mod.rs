//! HTTP adapter for the screening context.

mod dto;
mod handlers;
mod routes;

pub use dto::{AppointmentResponse, ReminderResponse, ScreeningResponse};
pub use handlers::ScreeningHandlers;
pub use routes::{appointment_routes, reminder_routes, screening_routes};
