//! DeleteApplianceHandler - Command handler for removing an appliance.
//!
//! Its warranties, manuals and service records are removed with it.

use std::sync::Arc;

use crate::domain::foundation::{ApplianceId, CommandMetadata};
use crate::domain::warranty::WarrantyError;
use crate::ports::ApplianceRepository;

#[derive(Debug, Clone)]
pub struct DeleteApplianceCommand {
    pub appliance_id: ApplianceId,
}

pub struct DeleteApplianceHandler {
    repository: Arc<dyn ApplianceRepository>,
}

impl DeleteApplianceHandler {
    pub fn new(repository: Arc<dyn ApplianceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteApplianceCommand,
        metadata: CommandMetadata,
    ) -> Result<(), WarrantyError> {
        self.repository
            .delete(metadata.tenant_id, cmd.appliance_id)
            .await?;
        Ok(())
    }
}
