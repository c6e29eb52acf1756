//! DeleteWarrantyHandler - Command handler for removing a warranty.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, WarrantyId};
use crate::domain::warranty::WarrantyError;
use crate::ports::WarrantyRepository;

#[derive(Debug, Clone)]
pub struct DeleteWarrantyCommand {
    pub warranty_id: WarrantyId,
}

pub struct DeleteWarrantyHandler {
    repository: Arc<dyn WarrantyRepository>,
}

impl DeleteWarrantyHandler {
    pub fn new(repository: Arc<dyn WarrantyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteWarrantyCommand,
        metadata: CommandMetadata,
    ) -> Result<(), WarrantyError> {
        self.repository
            .delete(metadata.tenant_id, cmd.warranty_id)
            .await?;
        Ok(())
    }
}
