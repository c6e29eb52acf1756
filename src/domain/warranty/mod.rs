//! Warranty domain module.
//!
//! Appliances owned by a household together with their warranties,
//! manuals and service history.
//!
//! # Events
//!
//! - `ApplianceAdded` - Published when an appliance is registered
//! - `WarrantyAdded` - Published when a warranty is attached
//! - `ManualUploaded` - Published when a manual is attached
//! - `ServiceRecordAdded` - Published when a service visit is logged

mod appliance;
mod errors;
mod events;
mod manual;
mod service_record;
#[allow(clippy::module_inception)]
mod warranty;

pub use appliance::{Appliance, ApplianceDetails, ApplianceType};
pub use errors::WarrantyError;
pub use events::{ApplianceAdded, ManualUploaded, ServiceRecordAdded, WarrantyAdded};
pub use manual::{Manual, ManualDetails};
pub use service_record::{ServiceRecord, ServiceRecordDetails};
pub use warranty::{Warranty, WarrantyDetails};
