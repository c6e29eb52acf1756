//! GetBillHandler - Query handler for a single bill.

use std::sync::Arc;

use crate::domain::billing::{Bill, BillingError};
use crate::domain::foundation::{BillId, TenantId};
use crate::ports::BillRepository;

#[derive(Debug, Clone)]
pub struct GetBillQuery {
    pub tenant_id: TenantId,
    pub bill_id: BillId,
}

pub struct GetBillHandler {
    repository: Arc<dyn BillRepository>,
}

impl GetBillHandler {
    pub fn new(repository: Arc<dyn BillRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBillQuery) -> Result<Bill, BillingError> {
        self.repository
            .find_by_id(query.tenant_id, query.bill_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Bill", query.bill_id))
    }
}
