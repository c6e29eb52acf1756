//! HTTP adapter for the warranty context.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ApplianceResponse, ApplianceSummaryResponse, ManualResponse, ServiceRecordResponse,
    WarrantyResponse,
};
pub use handlers::WarrantyHandlers;
pub use routes::{appliance_routes, manual_routes, service_record_routes, warranty_routes};
