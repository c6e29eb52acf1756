//! UpdateWarrantyHandler - Command handler for editing a warranty.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, WarrantyId};
use crate::domain::warranty::{Warranty, WarrantyDetails, WarrantyError};
use crate::ports::{ApplianceRepository, WarrantyRepository};

#[derive(Debug, Clone)]
pub struct UpdateWarrantyCommand {
    pub warranty_id: WarrantyId,
    pub details: WarrantyDetails,
}

pub struct UpdateWarrantyHandler {
    appliances: Arc<dyn ApplianceRepository>,
    warranties: Arc<dyn WarrantyRepository>,
}

impl UpdateWarrantyHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        warranties: Arc<dyn WarrantyRepository>,
    ) -> Self {
        Self {
            appliances,
            warranties,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateWarrantyCommand,
        metadata: CommandMetadata,
    ) -> Result<Warranty, WarrantyError> {
        let mut warranty = self
            .warranties
            .find_by_id(metadata.tenant_id, cmd.warranty_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Warranty", cmd.warranty_id))?;

        let appliance_id = cmd.details.appliance_id;
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        warranty.update(cmd.details)?;
        self.warranties.update(&warranty).await?;

        Ok(warranty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWarrantyStore;
    use crate::application::handlers::test_support::{
        appliance_details, date, metadata, warranty_details,
    };
    use crate::domain::foundation::{ApplianceId, UserId};
    use crate::domain::warranty::Appliance;

    #[tokio::test]
    async fn extends_coverage() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let metadata = metadata();
        let appliance = Appliance::new(
            ApplianceId::new(),
            metadata.tenant_id,
            UserId::new(),
            appliance_details("Furnace"),
        )
        .unwrap();
        ApplianceRepository::save(&*store, &appliance).await.unwrap();
        let warranty = Warranty::new(
            WarrantyId::new(),
            metadata.tenant_id,
            warranty_details(appliance.id(), Some(date(2024, 1, 1)), Some(date(2025, 1, 1))),
        )
        .unwrap();
        WarrantyRepository::save(&*store, &warranty).await.unwrap();
        let handler = UpdateWarrantyHandler::new(store.clone(), store.clone());

        let updated = handler
            .handle(
                UpdateWarrantyCommand {
                    warranty_id: warranty.id(),
                    details: warranty_details(
                        appliance.id(),
                        Some(date(2024, 1, 1)),
                        Some(date(2029, 1, 1)),
                    ),
                },
                metadata,
            )
            .await
            .unwrap();

        assert_eq!(updated.end_date(), Some(date(2029, 1, 1)));
        assert!(updated.is_active(date(2027, 1, 1)));
    }
}
