//! UpdateManualHandler - Command handler for editing a manual.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ManualId};
use crate::domain::warranty::{Manual, ManualDetails, WarrantyError};
use crate::ports::{ApplianceRepository, ManualRepository};

#[derive(Debug, Clone)]
pub struct UpdateManualCommand {
    pub manual_id: ManualId,
    pub details: ManualDetails,
}

pub struct UpdateManualHandler {
    appliances: Arc<dyn ApplianceRepository>,
    manuals: Arc<dyn ManualRepository>,
}

impl UpdateManualHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        manuals: Arc<dyn ManualRepository>,
    ) -> Self {
        Self {
            appliances,
            manuals,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateManualCommand,
        metadata: CommandMetadata,
    ) -> Result<Manual, WarrantyError> {
        let mut manual = self
            .manuals
            .find_by_id(metadata.tenant_id, cmd.manual_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Manual", cmd.manual_id))?;

        let appliance_id = cmd.details.appliance_id;
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        manual.update(cmd.details)?;
        self.manuals.update(&manual).await?;

        Ok(manual)
    }
}
