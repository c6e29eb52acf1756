//! UpdateServiceRecordHandler - Command handler for editing a service record.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ServiceRecordId};
use crate::domain::warranty::{ServiceRecord, ServiceRecordDetails, WarrantyError};
use crate::ports::{ApplianceRepository, ServiceRecordRepository};

#[derive(Debug, Clone)]
pub struct UpdateServiceRecordCommand {
    pub service_record_id: ServiceRecordId,
    pub details: ServiceRecordDetails,
}

pub struct UpdateServiceRecordHandler {
    appliances: Arc<dyn ApplianceRepository>,
    service_records: Arc<dyn ServiceRecordRepository>,
}

impl UpdateServiceRecordHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        service_records: Arc<dyn ServiceRecordRepository>,
    ) -> Self {
        Self {
            appliances,
            service_records,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateServiceRecordCommand,
        metadata: CommandMetadata,
    ) -> Result<ServiceRecord, WarrantyError> {
        let mut record = self
            .service_records
            .find_by_id(metadata.tenant_id, cmd.service_record_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("ServiceRecord", cmd.service_record_id))?;

        let appliance_id = cmd.details.appliance_id;
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        record.update(cmd.details)?;
        self.service_records.update(&record).await?;

        Ok(record)
    }
}
