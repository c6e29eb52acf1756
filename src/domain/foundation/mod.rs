//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, field validation, error types, command metadata
//! and event infrastructure used by every bounded context.

mod auth;
mod command;
mod enums;
mod errors;
mod events;
pub mod fields;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::CommandMetadata;
pub(crate) use enums::text_enum;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{
    AppointmentId, ApplianceId, BillId, DeductionId, ManualId, PaymentId, ReminderId,
    ScreeningId, ServiceRecordId, TaxYearId, TenantId, UserId, WarrantyId,
};
pub use timestamp::Timestamp;
