//! ListWarrantiesHandler - Query handler for a tenant's warranties.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::warranty::{Warranty, WarrantyError};
use crate::ports::{WarrantyFilter, WarrantyRepository};

#[derive(Debug, Clone)]
pub struct ListWarrantiesQuery {
    pub tenant_id: TenantId,
    pub filter: WarrantyFilter,
}

pub struct ListWarrantiesHandler {
    repository: Arc<dyn WarrantyRepository>,
}

impl ListWarrantiesHandler {
    pub fn new(repository: Arc<dyn WarrantyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListWarrantiesQuery) -> Result<Vec<Warranty>, WarrantyError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
