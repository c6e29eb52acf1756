//! HTTP adapter for the tax context.

mod dto;
mod handlers;
mod routes;

pub use dto::{DeductionResponse, TaxYearResponse};
pub use handlers::TaxHandlers;
pub use routes::{deduction_routes, tax_year_routes};
