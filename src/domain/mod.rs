//! Domain layer - records, validation rules, events and error types.
//!
//! Each bounded context is one household organizer application:
//! - `screening` - preventive health screenings, appointments and reminders
//! - `warranty` - appliances, their warranties, manuals and service records
//! - `billing` - bills and payments
//! - `tax` - tax years and deductions

pub mod billing;
pub mod foundation;
pub mod screening;
pub mod tax;
pub mod warranty;
