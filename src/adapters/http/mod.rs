//! HTTP adapter - REST API over axum.
//!
//! Each bounded context has its own handlers, DTOs and routes. `router`
//! assembles them under `/api` behind the bearer-token middleware.

pub mod billing;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod screening;
pub mod tax;
pub mod warranty;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, build_router, AppPorts};
