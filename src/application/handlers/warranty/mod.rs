//! Warranty command and query handlers.

mod create_appliance;
mod create_manual;
mod create_service_record;
mod create_warranty;
mod delete_appliance;
mod delete_manual;
mod delete_service_record;
mod delete_warranty;
mod get_appliance;
mod get_appliance_summary;
mod get_manual;
mod get_service_record;
mod get_warranty;
mod list_appliances;
mod list_manuals;
mod list_service_records;
mod list_warranties;
mod update_appliance;
mod update_manual;
mod update_service_record;
mod update_warranty;

pub use create_appliance::{CreateApplianceCommand, CreateApplianceHandler};
pub use create_manual::{CreateManualCommand, CreateManualHandler};
pub use create_service_record::{CreateServiceRecordCommand, CreateServiceRecordHandler};
pub use create_warranty::{CreateWarrantyCommand, CreateWarrantyHandler};
pub use delete_appliance::{DeleteApplianceCommand, DeleteApplianceHandler};
pub use delete_manual::{DeleteManualCommand, DeleteManualHandler};
pub use delete_service_record::{DeleteServiceRecordCommand, DeleteServiceRecordHandler};
pub use delete_warranty::{DeleteWarrantyCommand, DeleteWarrantyHandler};
pub use get_appliance::{GetApplianceHandler, GetApplianceQuery};
pub use get_appliance_summary::{
    ApplianceSummary, GetApplianceSummaryHandler, GetApplianceSummaryQuery,
};
pub use get_manual::{GetManualHandler, GetManualQuery};
pub use get_service_record::{GetServiceRecordHandler, GetServiceRecordQuery};
pub use get_warranty::{GetWarrantyHandler, GetWarrantyQuery};
pub use list_appliances::{ListAppliancesHandler, ListAppliancesQuery};
pub use list_manuals::{ListManualsHandler, ListManualsQuery};
pub use list_service_records::{ListServiceRecordsHandler, ListServiceRecordsQuery};
pub use list_warranties::{ListWarrantiesHandler, ListWarrantiesQuery};
pub use update_appliance::{UpdateApplianceCommand, UpdateApplianceHandler};
pub use update_manual::{UpdateManualCommand, UpdateManualHandler};
pub use update_service_record::{UpdateServiceRecordCommand, UpdateServiceRecordHandler};
pub use update_warranty::{UpdateWarrantyCommand, UpdateWarrantyHandler};
