//! CreateServiceRecordHandler - Command handler for logging a repair or
//! maintenance visit against an appliance.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{CommandMetadata, ServiceRecordId};
use crate::domain::warranty::{
    ServiceRecord, ServiceRecordAdded, ServiceRecordDetails, WarrantyError,
};
use crate::ports::{ApplianceRepository, EventPublisher, ServiceRecordRepository};

#[derive(Debug, Clone)]
pub struct CreateServiceRecordCommand {
    pub details: ServiceRecordDetails,
}

pub struct CreateServiceRecordHandler {
    appliances: Arc<dyn ApplianceRepository>,
    service_records: Arc<dyn ServiceRecordRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateServiceRecordHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        service_records: Arc<dyn ServiceRecordRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            appliances,
            service_records,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateServiceRecordCommand,
        metadata: CommandMetadata,
    ) -> Result<ServiceRecord, WarrantyError> {
        let record = ServiceRecord::new(ServiceRecordId::new(), metadata.tenant_id, cmd.details)?;

        let appliance_id = record.appliance_id();
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        self.service_records.save(&record).await?;

        let event = ServiceRecordAdded::from_service_record(&record);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(record)
    }
}
