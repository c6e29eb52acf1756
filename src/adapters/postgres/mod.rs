//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! One repository per record type; every statement is scoped by `tenant_id`.
//! Child rows are removed through `ON DELETE CASCADE` foreign keys declared
//! in `migrations/`.

mod billing_repository;
mod pool;
mod screening_repository;
mod support;
mod tax_repository;
mod warranty_repository;

pub use billing_repository::{PostgresBillRepository, PostgresPaymentRepository};
pub use pool::{connect, run_migrations};
pub use screening_repository::{
    PostgresAppointmentRepository, PostgresReminderRepository, PostgresScreeningRepository,
};
pub use tax_repository::{PostgresDeductionRepository, PostgresTaxYearRepository};
pub use warranty_repository::{
    PostgresApplianceRepository, PostgresManualRepository, PostgresServiceRecordRepository,
    PostgresWarrantyRepository,
};
