//! UpdateScreeningHandler - Command handler for editing a screening.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ScreeningId};
use crate::domain::screening::{Screening, ScreeningDetails, ScreeningError};
use crate::ports::ScreeningRepository;

#[derive(Debug, Clone)]
pub struct UpdateScreeningCommand {
    pub screening_id: ScreeningId,
    pub details: ScreeningDetails,
}

pub struct UpdateScreeningHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl UpdateScreeningHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateScreeningCommand,
        metadata: CommandMetadata,
    ) -> Result<Screening, ScreeningError> {
        let mut screening = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.screening_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Screening", cmd.screening_id))?;

        screening.update(cmd.details)?;
        self.repository.update(&screening).await?;

        Ok(screening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::{metadata, screening_details};

    #[tokio::test]
    async fn replaces_editable_fields() {
        let store: Arc<dyn ScreeningRepository> = Arc::new(InMemoryScreeningStore::new());
        let metadata = metadata();
        let screening = Screening::new(
            ScreeningId::new(),
            metadata.tenant_id,
            metadata.user_id,
            screening_details("Dental"),
        )
        .unwrap();
        store.save(&screening).await.unwrap();
        let handler = UpdateScreeningHandler::new(store.clone());

        let mut details = screening_details("Dental cleaning");
        details.recommended_frequency_months = 12;
        let updated = handler
            .handle(
                UpdateScreeningCommand {
                    screening_id: screening.id(),
                    details: details.clone(),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert_eq!(updated.details(), &details);
        assert_eq!(updated.created_at(), screening.created_at());
        let stored = store
            .find_by_id(metadata.tenant_id, screening.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Dental cleaning");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = UpdateScreeningHandler::new(Arc::new(InMemoryScreeningStore::new()));

        let result = handler
            .handle(
                UpdateScreeningCommand {
                    screening_id: ScreeningId::new(),
                    details: screening_details("Ghost"),
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(ScreeningError::NotFound { .. })));
    }
}
