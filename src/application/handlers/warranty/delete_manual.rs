//! DeleteManualHandler - Command handler for removing a manual.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ManualId};
use crate::domain::warranty::WarrantyError;
use crate::ports::ManualRepository;

#[derive(Debug, Clone)]
pub struct DeleteManualCommand {
    pub manual_id: ManualId,
}

pub struct DeleteManualHandler {
    repository: Arc<dyn ManualRepository>,
}

impl DeleteManualHandler {
    pub fn new(repository: Arc<dyn ManualRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteManualCommand,
        metadata: CommandMetadata,
    ) -> Result<(), WarrantyError> {
        self.repository.delete(metadata.tenant_id, cmd.manual_id).await?;
        Ok(())
    }
}
