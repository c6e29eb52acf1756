//! CreateApplianceHandler - Command handler for adding an appliance to the
//! household inventory.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{ApplianceId, CommandMetadata, UserId};
use crate::domain::warranty::{Appliance, ApplianceAdded, ApplianceDetails, WarrantyError};
use crate::ports::{ApplianceRepository, EventPublisher};

#[derive(Debug, Clone)]
pub struct CreateApplianceCommand {
    /// Owner of the appliance. Defaults to the caller.
    pub user_id: Option<UserId>,
    pub details: ApplianceDetails,
}

pub struct CreateApplianceHandler {
    repository: Arc<dyn ApplianceRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateApplianceHandler {
    pub fn new(
        repository: Arc<dyn ApplianceRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateApplianceCommand,
        metadata: CommandMetadata,
    ) -> Result<Appliance, WarrantyError> {
        let user_id = cmd.user_id.unwrap_or(metadata.user_id);
        let appliance = Appliance::new(ApplianceId::new(), metadata.tenant_id, user_id, cmd.details)?;

        self.repository.save(&appliance).await?;

        let event = ApplianceAdded::from_appliance(&appliance);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(appliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryWarrantyStore;
    use crate::application::handlers::test_support::{appliance_details, metadata};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn adds_appliance_and_publishes_event() {
        let store: Arc<dyn ApplianceRepository> = Arc::new(InMemoryWarrantyStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CreateApplianceHandler::new(store.clone(), bus.clone());
        let metadata = metadata();

        let appliance = handler
            .handle(
                CreateApplianceCommand {
                    user_id: None,
                    details: appliance_details("Kitchen dishwasher"),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert_eq!(appliance.details(), &appliance_details("Kitchen dishwasher"));
        assert_eq!(
            store.find_by_id(metadata.tenant_id, appliance.id()).await.unwrap(),
            Some(appliance.clone())
        );
        let events = bus.events_of_type("appliance.added.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, appliance.id().to_string());
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler =
            CreateApplianceHandler::new(Arc::new(InMemoryWarrantyStore::new()), bus.clone());
        let mut details = appliance_details("Oven");
        details.purchase_price = Some(Decimal::new(-1, 0));

        let result = handler
            .handle(CreateApplianceCommand { user_id: None, details }, metadata())
            .await;

        assert!(matches!(
            result,
            Err(WarrantyError::ValidationFailed { ref field, .. }) if field == "purchase_price"
        ));
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_the_command() {
        let handler = CreateApplianceHandler::new(
            Arc::new(InMemoryWarrantyStore::new()),
            Arc::new(InMemoryEventBus::failing()),
        );

        let result = handler
            .handle(
                CreateApplianceCommand {
                    user_id: None,
                    details: appliance_details("Furnace"),
                },
                metadata(),
            )
            .await;

        assert!(result.is_ok());
    }
}
