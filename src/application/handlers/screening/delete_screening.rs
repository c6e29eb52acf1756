//! DeleteScreeningHandler - Command handler for removing a screening.
//!
//! Appointments and reminders of the screening are removed with it.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ScreeningId};
use crate::domain::screening::ScreeningError;
use crate::ports::ScreeningRepository;

#[derive(Debug, Clone)]
pub struct DeleteScreeningCommand {
    pub screening_id: ScreeningId,
}

pub struct DeleteScreeningHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl DeleteScreeningHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteScreeningCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ScreeningError> {
        self.repository
            .delete(metadata.tenant_id, cmd.screening_id)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::{metadata, screening_details};
    use crate::domain::screening::Screening;

    #[tokio::test]
    async fn deleted_screening_is_gone() {
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
        let handler = DeleteScreeningHandler::new(store.clone());

        handler
            .handle(
                DeleteScreeningCommand {
                    screening_id: screening.id(),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert!(store
            .find_by_id(metadata.tenant_id, screening.id())
            .await
            .unwrap()
            .is_none());

        let again = handler
            .handle(
                DeleteScreeningCommand {
                    screening_id: screening.id(),
                },
                metadata,
            )
            .await;
        assert!(matches!(again, Err(ScreeningError::NotFound { .. })));
    }
}
