//! ListServiceRecordsHandler - Query handler for an appliance's service
//! history.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::warranty::{ServiceRecord, WarrantyError};
use crate::ports::{ServiceRecordFilter, ServiceRecordRepository};

#[derive(Debug, Clone)]
pub struct ListServiceRecordsQuery {
    pub tenant_id: TenantId,
    pub filter: ServiceRecordFilter,
}

pub struct ListServiceRecordsHandler {
    repository: Arc<dyn ServiceRecordRepository>,
}

impl ListServiceRecordsHandler {
    pub fn new(repository: Arc<dyn ServiceRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListServiceRecordsQuery,
    ) -> Result<Vec<ServiceRecord>, WarrantyError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
