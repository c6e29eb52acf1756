//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Commands take a `CommandMetadata` carrying caller and tenant; queries carry
//! their tenant as a field.

pub mod handlers;
mod publish;

pub(crate) use publish::publish_best_effort;

pub use handlers::billing::{BillSummary, GetBillSummaryHandler, GetBillSummaryQuery};
pub use handlers::tax::TaxYearSummary;
pub use handlers::warranty::{
    ApplianceSummary, GetApplianceSummaryHandler, GetApplianceSummaryQuery,
};
