//! HTTP DTOs for appliance, warranty, manual and service record endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ApplianceSummary;
use crate::domain::foundation::{
    ApplianceId, ManualId, ServiceRecordId, Timestamp, UserId, WarrantyId,
};
use crate::domain::warranty::{
    Appliance, ApplianceDetails, ApplianceType, Manual, ManualDetails, ServiceRecord,
    ServiceRecordDetails, Warranty, WarrantyDetails,
};
use crate::ports::{ApplianceFilter, ManualFilter, ServiceRecordFilter, WarrantyFilter};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Editable appliance fields, the body of `PUT /api/appliances/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplianceRequest {
    pub name: String,
    pub appliance_type: ApplianceType,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
}

impl From<ApplianceRequest> for ApplianceDetails {
    fn from(req: ApplianceRequest) -> Self {
        Self {
            name: req.name,
            appliance_type: req.appliance_type,
            brand: req.brand,
            model_number: req.model_number,
            serial_number: req.serial_number,
            purchase_date: req.purchase_date,
            purchase_price: req.purchase_price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplianceRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub appliance: ApplianceRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarrantyRequest {
    pub appliance_id: ApplianceId,
    pub provider: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub coverage_details: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
}

impl From<WarrantyRequest> for WarrantyDetails {
    fn from(req: WarrantyRequest) -> Self {
        Self {
            appliance_id: req.appliance_id,
            provider: req.provider,
            start_date: req.start_date,
            end_date: req.end_date,
            coverage_details: req.coverage_details,
            document_url: req.document_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManualRequest {
    pub appliance_id: ApplianceId,
    pub title: String,
    pub file_url: String,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl From<ManualRequest> for ManualDetails {
    fn from(req: ManualRequest) -> Self {
        Self {
            appliance_id: req.appliance_id,
            title: req.title,
            file_url: req.file_url,
            file_type: req.file_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRecordRequest {
    pub appliance_id: ApplianceId,
    pub service_date: NaiveDate,
    #[serde(default)]
    pub service_provider: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

impl From<ServiceRecordRequest> for ServiceRecordDetails {
    fn from(req: ServiceRecordRequest) -> Self {
        Self {
            appliance_id: req.appliance_id,
            service_date: req.service_date,
            service_provider: req.service_provider,
            description: req.description,
            cost: req.cost,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAppliancesParams {
    pub user_id: Option<UserId>,
    pub appliance_type: Option<ApplianceType>,
}

impl From<ListAppliancesParams> for ApplianceFilter {
    fn from(params: ListAppliancesParams) -> Self {
        Self {
            user_id: params.user_id,
            appliance_type: params.appliance_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWarrantiesParams {
    pub appliance_id: Option<ApplianceId>,
    pub active_on: Option<NaiveDate>,
}

impl From<ListWarrantiesParams> for WarrantyFilter {
    fn from(params: ListWarrantiesParams) -> Self {
        Self {
            appliance_id: params.appliance_id,
            active_on: params.active_on,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListManualsParams {
    pub appliance_id: Option<ApplianceId>,
}

impl From<ListManualsParams> for ManualFilter {
    fn from(params: ListManualsParams) -> Self {
        Self {
            appliance_id: params.appliance_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListServiceRecordsParams {
    pub appliance_id: Option<ApplianceId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<ListServiceRecordsParams> for ServiceRecordFilter {
    fn from(params: ListServiceRecordsParams) -> Self {
        Self {
            appliance_id: params.appliance_id,
            from: params.from,
            to: params.to,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceResponse {
    pub id: ApplianceId,
    pub user_id: UserId,
    pub name: String,
    pub appliance_type: ApplianceType,
    pub brand: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub created_at: Timestamp,
}

impl From<&Appliance> for ApplianceResponse {
    fn from(appliance: &Appliance) -> Self {
        let d = appliance.details();
        Self {
            id: appliance.id(),
            user_id: appliance.user_id(),
            name: d.name.clone(),
            appliance_type: d.appliance_type,
            brand: d.brand.clone(),
            model_number: d.model_number.clone(),
            serial_number: d.serial_number.clone(),
            purchase_date: d.purchase_date,
            purchase_price: d.purchase_price,
            created_at: appliance.created_at(),
        }
    }
}

/// Appliance with counts of its warranties, manuals and service records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSummaryResponse {
    #[serde(flatten)]
    pub appliance: ApplianceResponse,
    pub warranty_count: usize,
    pub active_warranty_count: usize,
    pub manual_count: usize,
    pub service_record_count: usize,
}

impl From<&ApplianceSummary> for ApplianceSummaryResponse {
    fn from(summary: &ApplianceSummary) -> Self {
        Self {
            appliance: ApplianceResponse::from(&summary.appliance),
            warranty_count: summary.warranty_count,
            active_warranty_count: summary.active_warranty_count,
            manual_count: summary.manual_count,
            service_record_count: summary.service_record_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantyResponse {
    pub id: WarrantyId,
    pub appliance_id: ApplianceId,
    pub provider: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub coverage_details: Option<String>,
    pub document_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Warranty> for WarrantyResponse {
    fn from(warranty: &Warranty) -> Self {
        let d = warranty.details();
        Self {
            id: warranty.id(),
            appliance_id: d.appliance_id,
            provider: d.provider.clone(),
            start_date: d.start_date,
            end_date: d.end_date,
            coverage_details: d.coverage_details.clone(),
            document_url: d.document_url.clone(),
            created_at: warranty.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualResponse {
    pub id: ManualId,
    pub appliance_id: ApplianceId,
    pub title: String,
    pub file_url: String,
    pub file_type: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Manual> for ManualResponse {
    fn from(manual: &Manual) -> Self {
        let d = manual.details();
        Self {
            id: manual.id(),
            appliance_id: d.appliance_id,
            title: d.title.clone(),
            file_url: d.file_url.clone(),
            file_type: d.file_type.clone(),
            created_at: manual.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecordResponse {
    pub id: ServiceRecordId,
    pub appliance_id: ApplianceId,
    pub service_date: NaiveDate,
    pub service_provider: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub created_at: Timestamp,
}

impl From<&ServiceRecord> for ServiceRecordResponse {
    fn from(record: &ServiceRecord) -> Self {
        let d = record.details();
        Self {
            id: record.id(),
            appliance_id: d.appliance_id,
            service_date: d.service_date,
            service_provider: d.service_provider.clone(),
            description: d.description.clone(),
            cost: d.cost,
            created_at: record.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TenantId;

    #[test]
    fn purchase_price_reads_json_number() {
        let json = r#"{"name": "Fridge", "appliance_type": "refrigerator", "purchase_price": 1299.99}"#;
        let req: CreateApplianceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.appliance.purchase_price, Some(Decimal::new(129_999, 2)));
        assert!(req.user_id.is_none());
    }

    #[test]
    fn summary_flattens_appliance_fields() {
        let appliance = Appliance::new(
            ApplianceId::new(),
            TenantId::new(),
            UserId::new(),
            ApplianceDetails {
                name: "Dishwasher".to_string(),
                appliance_type: ApplianceType::Dishwasher,
                brand: None,
                model_number: None,
                serial_number: None,
                purchase_date: None,
                purchase_price: Some(Decimal::new(49_950, 2)),
            },
        )
        .unwrap();
        let summary = ApplianceSummary {
            appliance,
            warranty_count: 2,
            active_warranty_count: 1,
            manual_count: 0,
            service_record_count: 3,
        };

        let json = serde_json::to_value(ApplianceSummaryResponse::from(&summary)).unwrap();
        assert_eq!(json["name"], "Dishwasher");
        assert_eq!(json["appliance_type"], "dishwasher");
        assert_eq!(json["purchase_price"], serde_json::json!(499.5));
        assert_eq!(json["active_warranty_count"], 1);
        assert_eq!(json["service_record_count"], 3);
    }
}
