//! Warranty domain events.
//!
//! - `ApplianceAdded` - An appliance was registered
//! - `WarrantyAdded` - Coverage was attached to an appliance
//! - `ManualUploaded` - A manual file was attached to an appliance
//! - `ServiceRecordAdded` - A repair or maintenance visit was logged

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ApplianceId, EventId, ManualId, ServiceRecordId, Timestamp, UserId, WarrantyId,
};

use super::{Appliance, ApplianceType, Manual, ServiceRecord, Warranty};

// ════════════════════════════════════════════════════════════════════════════
// ApplianceAdded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceAdded {
    pub event_id: EventId,
    pub appliance_id: ApplianceId,
    pub user_id: UserId,
    pub name: String,
    pub appliance_type: ApplianceType,
    pub created_at: Timestamp,
}

impl ApplianceAdded {
    pub fn from_appliance(appliance: &Appliance) -> Self {
        Self {
            event_id: EventId::new(),
            appliance_id: appliance.id(),
            user_id: appliance.user_id(),
            name: appliance.name().to_string(),
            appliance_type: appliance.appliance_type(),
            created_at: appliance.created_at(),
        }
    }
}

domain_event!(
    ApplianceAdded,
    event_type = "appliance.added.v1",
    aggregate_id = appliance_id,
    aggregate_type = "Appliance",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// WarrantyAdded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyAdded {
    pub event_id: EventId,
    pub warranty_id: WarrantyId,
    pub appliance_id: ApplianceId,
    pub provider: String,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

impl WarrantyAdded {
    pub fn from_warranty(warranty: &Warranty) -> Self {
        Self {
            event_id: EventId::new(),
            warranty_id: warranty.id(),
            appliance_id: warranty.appliance_id(),
            provider: warranty.details().provider.clone(),
            end_date: warranty.end_date(),
            created_at: warranty.created_at(),
        }
    }
}

domain_event!(
    WarrantyAdded,
    event_type = "warranty.added.v1",
    aggregate_id = warranty_id,
    aggregate_type = "Warranty",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ManualUploaded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualUploaded {
    pub event_id: EventId,
    pub manual_id: ManualId,
    pub appliance_id: ApplianceId,
    pub created_at: Timestamp,
}

impl ManualUploaded {
    pub fn from_manual(manual: &Manual) -> Self {
        Self {
            event_id: EventId::new(),
            manual_id: manual.id(),
            appliance_id: manual.appliance_id(),
            created_at: manual.created_at(),
        }
    }
}

domain_event!(
    ManualUploaded,
    event_type = "manual.uploaded.v1",
    aggregate_id = manual_id,
    aggregate_type = "Manual",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ServiceRecordAdded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecordAdded {
    pub event_id: EventId,
    pub service_record_id: ServiceRecordId,
    pub appliance_id: ApplianceId,
    pub service_date: NaiveDate,
    pub created_at: Timestamp,
}

impl ServiceRecordAdded {
    pub fn from_service_record(record: &ServiceRecord) -> Self {
        Self {
            event_id: EventId::new(),
            service_record_id: record.id(),
            appliance_id: record.appliance_id(),
            service_date: record.service_date(),
            created_at: record.created_at(),
        }
    }
}

domain_event!(
    ServiceRecordAdded,
    event_type = "service_record.added.v1",
    aggregate_id = service_record_id,
    aggregate_type = "ServiceRecord",
    occurred_at = created_at,
    event_id = event_id
);
