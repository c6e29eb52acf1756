//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! One repository per record type, grouped by bounded context. Every query
//! takes the caller's `TenantId`.
//!
//! ## Infrastructure Ports
//!
//! - `EventPublisher` - Fire-and-forget publishing to the topic exchange
//! - `AccessTokenValidator` - Bearer token validation for the HTTP layer

mod access_token_validator;
mod billing_repository;
mod event_publisher;
mod screening_repository;
mod tax_repository;
mod warranty_repository;

pub use access_token_validator::AccessTokenValidator;
pub use billing_repository::{BillFilter, BillRepository, PaymentFilter, PaymentRepository};
pub use event_publisher::EventPublisher;
pub use screening_repository::{
    AppointmentFilter, AppointmentRepository, ReminderFilter, ReminderRepository,
    ScreeningFilter, ScreeningRepository,
};
pub use tax_repository::{
    DeductionFilter, DeductionRepository, DeductionTotals, TaxYearRepository,
};
pub use warranty_repository::{
    ApplianceFilter, ApplianceRepository, ManualFilter, ManualRepository, ServiceRecordFilter,
    ServiceRecordRepository, WarrantyFilter, WarrantyRepository,
};
