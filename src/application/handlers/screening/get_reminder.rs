//! GetReminderHandler - Query handler for a single reminder.

use std::sync::Arc;

use crate::domain::foundation::{ReminderId, TenantId};
use crate::domain::screening::{Reminder, ScreeningError};
use crate::ports::ReminderRepository;

#[derive(Debug, Clone)]
pub struct GetReminderQuery {
    pub tenant_id: TenantId,
    pub reminder_id: ReminderId,
}

pub struct GetReminderHandler {
    repository: Arc<dyn ReminderRepository>,
}

impl GetReminderHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReminderQuery) -> Result<Reminder, ScreeningError> {
        self.repository
            .find_by_id(query.tenant_id, query.reminder_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Reminder", query.reminder_id))
    }
}
