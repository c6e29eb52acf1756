//! DeleteReminderHandler - Command handler for removing a reminder.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ReminderId};
use crate::domain::screening::ScreeningError;
use crate::ports::ReminderRepository;

#[derive(Debug, Clone)]
pub struct DeleteReminderCommand {
    pub reminder_id: ReminderId,
}

pub struct DeleteReminderHandler {
    repository: Arc<dyn ReminderRepository>,
}

impl DeleteReminderHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteReminderCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ScreeningError> {
        self.repository
            .delete(metadata.tenant_id, cmd.reminder_id)
            .await?;
        Ok(())
    }
}
