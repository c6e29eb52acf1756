//! GetManualHandler - Query handler for a single manual.

use std::sync::Arc;

use crate::domain::foundation::{ManualId, TenantId};
use crate::domain::warranty::{Manual, WarrantyError};
use crate::ports::ManualRepository;

#[derive(Debug, Clone)]
pub struct GetManualQuery {
    pub tenant_id: TenantId,
    pub manual_id: ManualId,
}

pub struct GetManualHandler {
    repository: Arc<dyn ManualRepository>,
}

impl GetManualHandler {
    pub fn new(repository: Arc<dyn ManualRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetManualQuery) -> Result<Manual, WarrantyError> {
        self.repository
            .find_by_id(query.tenant_id, query.manual_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Manual", query.manual_id))
    }
}
