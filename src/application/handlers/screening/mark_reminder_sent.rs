//! MarkReminderSentHandler - Command handler for flagging a reminder as
//! delivered. Marking an already sent reminder is a no-op.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ReminderId};
use crate::domain::screening::{Reminder, ScreeningError};
use crate::ports::ReminderRepository;

#[derive(Debug, Clone)]
pub struct MarkReminderSentCommand {
    pub reminder_id: ReminderId,
}

pub struct MarkReminderSentHandler {
    repository: Arc<dyn ReminderRepository>,
}

impl MarkReminderSentHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: MarkReminderSentCommand,
        metadata: CommandMetadata,
    ) -> Result<Reminder, ScreeningError> {
        let mut reminder = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.reminder_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Reminder", cmd.reminder_id))?;

        if !reminder.is_sent() {
            reminder.mark_sent();
            self.repository.update(&reminder).await?;
        }

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::{date, metadata, reminder_details};
    use crate::domain::foundation::ScreeningId;

    #[tokio::test]
    async fn marks_reminder_sent_idempotently() {
        let store: Arc<dyn ReminderRepository> = Arc::new(InMemoryScreeningStore::new());
        let metadata = metadata();
        let reminder = Reminder::new(
            ReminderId::new(),
            metadata.tenant_id,
            metadata.user_id,
            reminder_details(ScreeningId::new(), date(2025, 1, 15)),
        )
        .unwrap();
        store.save(&reminder).await.unwrap();
        let handler = MarkReminderSentHandler::new(store.clone());
        let cmd = MarkReminderSentCommand {
            reminder_id: reminder.id(),
        };

        assert!(handler.handle(cmd.clone(), metadata.clone()).await.unwrap().is_sent());
        assert!(handler.handle(cmd, metadata.clone()).await.unwrap().is_sent());

        let stored = store
            .find_by_id(metadata.tenant_id, reminder.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_sent());
    }
}
