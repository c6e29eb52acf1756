//! CreateWarrantyHandler - Command handler for recording an appliance
//! warranty.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{CommandMetadata, WarrantyId};
use crate::domain::warranty::{Warranty, WarrantyAdded, WarrantyDetails, WarrantyError};
use crate::ports::{ApplianceRepository, EventPublisher, WarrantyRepository};

#[derive(Debug, Clone)]
pub struct CreateWarrantyCommand {
    pub details: WarrantyDetails,
}

pub struct CreateWarrantyHandler {
    appliances: Arc<dyn ApplianceRepository>,
    warranties: Arc<dyn WarrantyRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateWarrantyHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        warranties: Arc<dyn WarrantyRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            appliances,
            warranties,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateWarrantyCommand,
        metadata: CommandMetadata,
    ) -> Result<Warranty, WarrantyError> {
        let warranty = Warranty::new(WarrantyId::new(), metadata.tenant_id, cmd.details)?;

        let appliance_id = warranty.appliance_id();
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        self.warranties.save(&warranty).await?;

        let event = WarrantyAdded::from_warranty(&warranty);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(warranty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryWarrantyStore;
    use crate::application::handlers::test_support::{
        appliance_details, date, metadata, warranty_details,
    };
    use crate::domain::foundation::{ApplianceId, UserId};
    use crate::domain::warranty::Appliance;

    #[tokio::test]
    async fn records_warranty_for_existing_appliance() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let metadata = metadata();
        let appliance = Appliance::new(
            ApplianceId::new(),
            metadata.tenant_id,
            UserId::new(),
            appliance_details("Dishwasher"),
        )
        .unwrap();
        ApplianceRepository::save(&*store, &appliance).await.unwrap();
        let handler = CreateWarrantyHandler::new(store.clone(), store.clone(), bus.clone());

        let details = warranty_details(
            appliance.id(),
            Some(date(2024, 1, 1)),
            Some(date(2026, 1, 1)),
        );
        let warranty = handler
            .handle(
                CreateWarrantyCommand {
                    details: details.clone(),
                },
                metadata,
            )
            .await
            .unwrap();

        assert_eq!(warranty.details(), &details);
        assert!(bus.has_event("warranty.added.v1"));
    }

    #[tokio::test]
    async fn end_before_start_is_rejected() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let handler = CreateWarrantyHandler::new(
            store.clone(),
            store,
            Arc::new(InMemoryEventBus::new()),
        );

        let result = handler
            .handle(
                CreateWarrantyCommand {
                    details: warranty_details(
                        ApplianceId::new(),
                        Some(date(2026, 1, 1)),
                        Some(date(2024, 1, 1)),
                    ),
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(WarrantyError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn missing_appliance_is_not_found() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CreateWarrantyHandler::new(store.clone(), store, bus.clone());

        let result = handler
            .handle(
                CreateWarrantyCommand {
                    details: warranty_details(ApplianceId::new(), None, None),
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(WarrantyError::NotFound { ref resource, .. }) if resource == "Appliance"
        ));
        assert_eq!(bus.event_count(), 0);
    }
}
