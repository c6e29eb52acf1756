//! GetApplianceHandler - Query handler for a single appliance.

use std::sync::Arc;

use crate::domain::foundation::{ApplianceId, TenantId};
use crate::domain::warranty::{Appliance, WarrantyError};
use crate::ports::ApplianceRepository;

#[derive(Debug, Clone)]
pub struct GetApplianceQuery {
    pub tenant_id: TenantId,
    pub appliance_id: ApplianceId,
}

pub struct GetApplianceHandler {
    repository: Arc<dyn ApplianceRepository>,
}

impl GetApplianceHandler {
    pub fn new(repository: Arc<dyn ApplianceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetApplianceQuery) -> Result<Appliance, WarrantyError> {
        self.repository
            .find_by_id(query.tenant_id, query.appliance_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("Appliance", query.appliance_id))
    }
}
