//! UpdateReminderHandler - Command handler for editing a reminder.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ReminderId};
use crate::domain::screening::{Reminder, ReminderDetails, ScreeningError};
use crate::ports::{ReminderRepository, ScreeningRepository};

#[derive(Debug, Clone)]
pub struct UpdateReminderCommand {
    pub reminder_id: ReminderId,
    pub details: ReminderDetails,
    pub is_sent: bool,
}

pub struct UpdateReminderHandler {
    screenings: Arc<dyn ScreeningRepository>,
    reminders: Arc<dyn ReminderRepository>,
}

impl UpdateReminderHandler {
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        reminders: Arc<dyn ReminderRepository>,
    ) -> Self {
        Self {
            screenings,
            reminders,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateReminderCommand,
        metadata: CommandMetadata,
    ) -> Result<Reminder, ScreeningError> {
        let mut reminder = self
            .reminders
            .find_by_id(metadata.tenant_id, cmd.reminder_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Reminder", cmd.reminder_id))?;

        let screening_id = cmd.details.screening_id;
        if !self.screenings.exists(metadata.tenant_id, screening_id).await? {
            return Err(ScreeningError::not_found("Screening", screening_id));
        }

        reminder.update(cmd.details, cmd.is_sent)?;
        self.reminders.update(&reminder).await?;

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
    async fn unknown_reminder_is_not_found() {
        let store = Arc::new(InMemoryScreeningStore::new());
        let handler = UpdateReminderHandler::new(store.clone(), store);

        let result = handler
            .handle(
                UpdateReminderCommand {
                    reminder_id: ReminderId::new(),
                    details: reminder_details(ScreeningId::new(), date(2025, 2, 1)),
                    is_sent: false,
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ScreeningError::NotFound { ref resource, .. }) if resource == "Reminder"
        ));
    }
}
