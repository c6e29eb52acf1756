//! ListPaymentsHandler - Query handler for a tenant's payments.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Payment};
use crate::domain::foundation::TenantId;
use crate::ports::{PaymentFilter, PaymentRepository};

#[derive(Debug, Clone)]
pub struct ListPaymentsQuery {
    pub tenant_id: TenantId,
    pub filter: PaymentFilter,
}

pub struct ListPaymentsHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl ListPaymentsHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPaymentsQuery) -> Result<Vec<Payment>, BillingError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}
