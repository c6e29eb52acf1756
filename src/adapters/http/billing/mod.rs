//! HTTP adapter for the billing context.

mod dto;
mod handlers;
mod routes;

pub use dto::{BillResponse, BillSummaryResponse, PaymentResponse};
pub use handlers::BillingHandlers;
pub use routes::{bill_routes, payment_routes};
