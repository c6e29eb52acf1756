//! GetPaymentHandler - Query handler for a single payment.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Payment};
use crate::domain::foundation::{PaymentId, TenantId};
use crate::ports::PaymentRepository;

#[derive(Debug, Clone)]
pub struct GetPaymentQuery {
    pub tenant_id: TenantId,
    pub payment_id: PaymentId,
}

pub struct GetPaymentHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPaymentQuery) -> Result<Payment, BillingError> {
        self.repository
            .find_by_id(query.tenant_id, query.payment_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Payment", query.payment_id))
    }
}
