//! DeleteServiceRecordHandler - Command handler for removing a service record.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ServiceRecordId};
use crate::domain::warranty::WarrantyError;
use crate::ports::ServiceRecordRepository;

#[derive(Debug, Clone)]
pub struct DeleteServiceRecordCommand {
    pub service_record_id: ServiceRecordId,
}

pub struct DeleteServiceRecordHandler {
    repository: Arc<dyn ServiceRecordRepository>,
}

impl DeleteServiceRecordHandler {
    pub fn new(repository: Arc<dyn ServiceRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteServiceRecordCommand,
        metadata: CommandMetadata,
    ) -> Result<(), WarrantyError> {
        self.repository
            .delete(metadata.tenant_id, cmd.service_record_id)
            .await?;
        Ok(())
    }
}
