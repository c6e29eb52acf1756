//! UpdateApplianceHandler - Command handler for editing an appliance.

use std::sync::Arc;

use crate::domain::foundation::{ApplianceId, CommandMetadata};
use crate::domain::warranty::{Appliance, ApplianceDetails, WarrantyError};
use crate::ports::ApplianceRepository;

#[derive(Debug, Clone)]
pub struct UpdateApplianceCommand {
    pub appliance_id: ApplianceId,
    pub details: ApplianceDetails,
}

pub struct UpdateApplianceHandler {
    repository: Arc<dyn ApplianceRepository>,
}

impl UpdateApplianceHandler {
    pub fn new(repository: Arc<dyn ApplianceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateApplianceCommand,
        metadata: CommandMetadata,
    ) -> Result<Appliance, WarrantyError> {
        let mut appliance = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.appliance_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Appliance", cmd.appliance_id))?;

        appliance.update(cmd.details)?;
        self.repository.update(&appliance).await?;

        Ok(appliance)
    }
}
