//! GetApplianceSummaryHandler - Query handler for an appliance together
//! with counts of its warranties, manuals and service records.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{ApplianceId, TenantId};
use crate::domain::warranty::{Appliance, WarrantyError};
use crate::ports::{
    ApplianceRepository, ManualFilter, ManualRepository, ServiceRecordFilter,
    ServiceRecordRepository, WarrantyFilter, WarrantyRepository,
};

#[derive(Debug, Clone)]
pub struct GetApplianceSummaryQuery {
    pub tenant_id: TenantId,
    pub appliance_id: ApplianceId,
    /// Date warranty coverage is evaluated on.
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceSummary {
    pub appliance: Appliance,
    pub warranty_count: usize,
    pub active_warranty_count: usize,
    pub manual_count: usize,
    pub service_record_count: usize,
}

pub struct GetApplianceSummaryHandler {
    appliances: Arc<dyn ApplianceRepository>,
    warranties: Arc<dyn WarrantyRepository>,
    manuals: Arc<dyn ManualRepository>,
    service_records: Arc<dyn ServiceRecordRepository>,
}

impl GetApplianceSummaryHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        warranties: Arc<dyn WarrantyRepository>,
        manuals: Arc<dyn ManualRepository>,
        service_records: Arc<dyn ServiceRecordRepository>,
    ) -> Self {
        Self {
            appliances,
            warranties,
            manuals,
            service_records,
        }
    }

    pub async fn handle(
        &self,
        query: GetApplianceSummaryQuery,
    ) -> Result<ApplianceSummary, WarrantyError> {
        let appliance = self
            .appliances
            .find_by_id(query.tenant_id, query.appliance_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Appliance", query.appliance_id))?;

        let warranties = self
            .warranties
            .list(query.tenant_id, &WarrantyFilter::for_appliance(appliance.id()))
            .await?;
        let manuals = self
            .manuals
            .list(
                query.tenant_id,
                &ManualFilter {
                    appliance_id: Some(appliance.id()),
                },
            )
            .await?;
        let service_records = self
            .service_records
            .list(
                query.tenant_id,
                &ServiceRecordFilter::for_appliance(appliance.id()),
            )
            .await?;

        let active_warranty_count = warranties
            .iter()
            .filter(|w| w.is_active(query.as_of))
            .count();

        Ok(ApplianceSummary {
            appliance,
            warranty_count: warranties.len(),
            active_warranty_count,
            manual_count: manuals.len(),
            service_record_count: service_records.len(),
        })
    }
}
