//! ListRemindersHandler - Query handler for a tenant's reminders.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::screening::{Reminder, ScreeningError};
use crate::ports::{ReminderFilter, ReminderRepository};

#[derive(Debug, Clone)]
pub struct ListRemindersQuery {
    pub tenant_id: TenantId,
    pub filter: ReminderFilter,
}

pub struct ListRemindersHandler {
    repository: Arc<dyn ReminderRepository>,
}

impl ListRemindersHandler {
    pub fn new(repository: Arc<dyn ReminderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRemindersQuery) -> Result<Vec<Reminder>, ScreeningError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
