//! ListManualsHandler - Query handler for a tenant's manuals.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::warranty::{Manual, WarrantyError};
use crate::ports::{ManualFilter, ManualRepository};

#[derive(Debug, Clone)]
pub struct ListManualsQuery {
    pub tenant_id: TenantId,
    pub filter: ManualFilter,
}

pub struct ListManualsHandler {
    repository: Arc<dyn ManualRepository>,
}

impl ListManualsHandler {
    pub fn new(repository: Arc<dyn ManualRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListManualsQuery) -> Result<Vec<Manual>, WarrantyError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
