//! UpdatePaymentHandler - Command handler for correcting a payment.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Payment, PaymentDetails};
use crate::domain::foundation::{CommandMetadata, PaymentId};
use crate::ports::{BillRepository, PaymentRepository};

#[derive(Debug, Clone)]
pub struct UpdatePaymentCommand {
    pub payment_id: PaymentId,
    pub details: PaymentDetails,
}

pub struct UpdatePaymentHandler {
    bills: Arc<dyn BillRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl UpdatePaymentHandler {
    pub fn new(bills: Arc<dyn BillRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { bills, payments }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePaymentCommand,
        metadata: CommandMetadata,
    ) -> Result<Payment, BillingError> {
        let mut payment = self
            .payments
            .find_by_id(metadata.tenant_id, cmd.payment_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Payment", cmd.payment_id))?;

        let bill_id = cmd.details.bill_id;
        if !self.bills.exists(metadata.tenant_id, bill_id).await? {
            return Err(BillingError::not_found("Bill", bill_id));
        }

        payment.update(cmd.details)?;
        self.payments.update(&payment).await?;

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryBillingStore;
    use crate::application::handlers::test_support::{date, metadata, payment_details};
    use crate::domain::foundation::BillId;

    #[tokio::test]
    async fn unknown_payment_is_not_found() {
        let store = Arc::new(InMemoryBillingStore::new());
        let handler = UpdatePaymentHandler::new(store.clone(), store);

        let result = handler
            .handle(
                UpdatePaymentCommand {
                    payment_id: PaymentId::new(),
                    details: payment_details(BillId::new(), Decimal::ONE, date(2025, 1, 1)),
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(BillingError::NotFound { ref resource, .. }) if resource == "Payment"
        ));
    }
}
