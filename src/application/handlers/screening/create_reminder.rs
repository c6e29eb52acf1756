//! CreateReminderHandler - Command handler for scheduling a screening
//! reminder.

use std::sync::Arc;

use crate::application::publish_best_effort;
use crate::domain::foundation::{CommandMetadata, ReminderId, UserId};
use crate::domain::screening::{Reminder, ReminderCreated, ReminderDetails, ScreeningError};
use crate::ports::{EventPublisher, ReminderRepository, ScreeningRepository};

#[derive(Debug, Clone)]
pub struct CreateReminderCommand {
    /// Recipient of the reminder. Defaults to the caller.
    pub user_id: Option<UserId>,
    pub details: ReminderDetails,
}

pub struct CreateReminderHandler {
    screenings: Arc<dyn ScreeningRepository>,
    reminders: Arc<dyn ReminderRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateReminderHandler {
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        reminders: Arc<dyn ReminderRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            screenings,
            reminders,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateReminderCommand,
        metadata: CommandMetadata,
    ) -> Result<Reminder, ScreeningError> {
        let user_id = cmd.user_id.unwrap_or(metadata.user_id);
        let reminder = Reminder::new(ReminderId::new(), metadata.tenant_id, user_id, cmd.details)?;

        let screening_id = reminder.screening_id();
        if !self.screenings.exists(metadata.tenant_id, screening_id).await? {
            return Err(ScreeningError::not_found("Screening", screening_id));
        }

        self.reminders.save(&reminder).await?;

        let event = ReminderCreated::from_reminder(&reminder);
        publish_best_effort(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(reminder)
    }
}
