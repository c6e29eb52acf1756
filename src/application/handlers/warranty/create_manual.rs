//! CreateManualHandler - Command handler for attaching a manual to an
//! appliance.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{CommandMetadata, ManualId};
use crate::domain::warranty::{Manual, ManualDetails, ManualUploaded, WarrantyError};
use crate::ports::{ApplianceRepository, EventPublisher, ManualRepository};

#[derive(Debug, Clone)]
pub struct CreateManualCommand {
    pub details: ManualDetails,
}

pub struct CreateManualHandler {
    appliances: Arc<dyn ApplianceRepository>,
    manuals: Arc<dyn ManualRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateManualHandler {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        manuals: Arc<dyn ManualRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            appliances,
            manuals,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateManualCommand,
        metadata: CommandMetadata,
    ) -> Result<Manual, WarrantyError> {
        let manual = Manual::new(ManualId::new(), metadata.tenant_id, cmd.details)?;

        let appliance_id = manual.appliance_id();
        if !self.appliances.exists(metadata.tenant_id, appliance_id).await? {
            return Err(WarrantyError::not_found("Appliance", appliance_id));
        }

        self.manuals.save(&manual).await?;

        let event = ManualUploaded::from_manual(&manual);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(manual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryWarrantyStore;
    use crate::application::handlers::test_support::{
        appliance_details, manual_details, metadata,
    };
    use crate::domain::foundation::{ApplianceId, UserId};
    use crate::domain::warranty::Appliance;

    #[tokio::test]
    async fn attaches_manual_and_publishes_event() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let metadata = metadata();
        let appliance = Appliance::new(
            ApplianceId::new(),
            metadata.tenant_id,
            UserId::new(),
            appliance_details("Microwave"),
        )
        .unwrap();
        ApplianceRepository::save(&*store, &appliance).await.unwrap();
        let handler = CreateManualHandler::new(store.clone(), store.clone(), bus.clone());

        let manual = handler
            .handle(
                CreateManualCommand {
                    details: manual_details(appliance.id(), "Quick start"),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert_eq!(manual.details(), &manual_details(appliance.id(), "Quick start"));
        let stored = ManualRepository::find_by_id(&*store, metadata.tenant_id, manual.id())
            .await
            .unwrap();
        assert_eq!(stored, Some(manual.clone()));

        let events = bus.events_of_type("manual.uploaded.v1");
        assert_eq!(events.len(), 1);
        let envelope = &events[0];
        assert_eq!(envelope.aggregate_id, manual.id().to_string());
        assert_eq!(
            envelope.payload["appliance_id"],
            appliance.id().to_string()
        );
    }

    #[tokio::test]
    async fn blank_file_url_is_rejected() {
        let store = Arc::new(InMemoryWarrantyStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CreateManualHandler::new(store.clone(), store, bus.clone());
        let mut details = manual_details(ApplianceId::new(), "Guide");
        details.file_url = " ".to_string();

        let result = handler.handle(CreateManualCommand { details }, metadata()).await;

        assert!(matches!(
            result,
            Err(WarrantyError::ValidationFailed { ref field, .. }) if field == "file_url"
        ));
        assert_eq!(bus.event_count(), 0);
    }
}
