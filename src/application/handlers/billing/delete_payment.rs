//! DeletePaymentHandler - Command handler for removing a payment.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::domain::foundation::{CommandMetadata, PaymentId};
use crate::ports::PaymentRepository;

#[derive(Debug, Clone)]
pub struct DeletePaymentCommand {
    pub payment_id: PaymentId,
}

pub struct DeletePaymentHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl DeletePaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeletePaymentCommand,
        metadata: CommandMetadata,
    ) -> Result<(), BillingError> {
        self.repository
            .delete(metadata.tenant_id, cmd.payment_id)
            .await?;
        Ok(())
    }
}
