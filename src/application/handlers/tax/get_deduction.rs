//! GetDeductionHandler - Query handler for a single deduction.

use std::sync::Arc;

use crate::domain::foundation::{DeductionId, TenantId};
use crate::domain::tax::{Deduction, TaxError};
use crate::ports::DeductionRepository;

#[derive(Debug, Clone)]
pub struct GetDeductionQuery {
    pub tenant_id: TenantId,
    pub deduction_id: DeductionId,
}

pub struct GetDeductionHandler {
    repository: Arc<dyn DeductionRepository>,
}

impl GetDeductionHandler {
    pub fn new(repository: Arc<dyn DeductionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDeductionQuery) -> Result<Deduction, TaxError> {
        self.repository
            .find_by_id(query.tenant_id, query.deduction_id)
            .await?
            .ok_or_else(|| TaxError::not_found("Deduction", query.deduction_id))
    }
}
