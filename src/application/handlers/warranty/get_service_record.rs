//! GetServiceRecordHandler - Query handler for a single service record.

use std::sync::Arc;

use crate::domain::foundation::{ServiceRecordId, TenantId};
use crate::domain::warranty::{ServiceRecord, WarrantyError};
use crate::ports::ServiceRecordRepository;

#[derive(Debug, Clone)]
pub struct GetServiceRecordQuery {
    pub tenant_id: TenantId,
    pub service_record_id: ServiceRecordId,
}

pub struct GetServiceRecordHandler {
    repository: Arc<dyn ServiceRecordRepository>,
}

impl GetServiceRecordHandler {
    pub fn new(repository: Arc<dyn ServiceRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetServiceRecordQuery,
    ) -> Result<ServiceRecord, WarrantyError> {
        self.repository
            .find_by_id(query.tenant_id, query.service_record_id)
            .await?
            .ok_or_else(|| WarrantyError::not_found("ServiceRecord", query.service_record_id))
    }
}
