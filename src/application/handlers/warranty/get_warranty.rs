//! GetWarrantyHandler - Query handler for a single warranty.

use std::sync::Arc;

use crate::domain::foundation::{TenantId, WarrantyId};
use crate::domain::warranty::{Warranty, WarrantyError};
use crate::ports::WarrantyRepository;

#[derive(Debug, Clone)]
pub struct GetWarrantyQuery {
    pub tenant_id: TenantId,
    pub warranty_id: WarrantyId,
}

pub struct GetWarrantyHandler {
    repository: Arc<dyn WarrantyRepository>,
}

impl GetWarrantyHandler {
    pub fn new(repository: Arc<dyn WarrantyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWarrantyQuery) -> Result<Warranty, WarrantyError> {
        self.repository
            .find_by_id(query.tenant_id, query.warranty_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Warranty", query.warranty_id))
    }
}
