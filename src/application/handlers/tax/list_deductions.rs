//! ListDeductionsHandler - Query handler for a tenant's deductions.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::tax::{Deduction, TaxError};
use crate::ports::{DeductionFilter, DeductionRepository};

#[derive(Debug, Clone)]
pub struct ListDeductionsQuery {
    pub tenant_id: TenantId,
    pub filter: DeductionFilter,
}

pub struct ListDeductionsHandler {
    repository: Arc<dyn DeductionRepository>,
}

impl ListDeductionsHandler {
    pub fn new(repository: Arc<dyn DeductionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDeductionsQuery) -> Result<Vec<Deduction>, TaxError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
