//! CreatePaymentHandler - Command handler for recording a payment against
//! a bill.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Payment, PaymentDetails};
use crate::domain::foundation::{CommandMetadata, PaymentId};
use crate::ports::{BillRepository, PaymentRepository};

#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    pub details: PaymentDetails,
}

pub struct CreatePaymentHandler {
    bills: Arc<dyn BillRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl CreatePaymentHandler {
    pub fn new(bills: Arc<dyn BillRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { bills, payments }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
        metadata: CommandMetadata,
    ) -> Result<Payment, BillingError> {
        let payment = Payment::new(PaymentId::new(), metadata.tenant_id, cmd.details)?;

        let bill_id = payment.bill_id();
        if !self.bills.exists(metadata.tenant_id, bill_id).await? {
            return Err(BillingError::not_found("Bill", bill_id));
        }

        self.payments.save(&payment).await?;

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryBillingStore;
    use crate::application::handlers::test_support::{
        bill_details, date, metadata, payment_details,
    };
    use crate::domain::billing::{Bill, PaymentMethod};
    use crate::domain::foundation::BillId;

    #[tokio::test]
    async fn records_payment_with_submitted_fields() {
        let store = Arc::new(InMemoryBillingStore::new());
        let metadata = metadata();
        let bill = Bill::new(
            BillId::new(),
            metadata.tenant_id,
            bill_details("Water", Decimal::new(60, 0)),
        )
        .unwrap();
        BillRepository::save(&*store, &bill).await.unwrap();
        let handler = CreatePaymentHandler::new(store.clone(), store.clone());

        let mut details = payment_details(bill.id(), Decimal::new(60, 0), date(2025, 1, 30));
        details.payment_method = Some(PaymentMethod::AutoPay);
        details.confirmation_number = Some("CONF-123".to_string());
        let payment = handler
            .handle(
                CreatePaymentCommand {
                    details: details.clone(),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert_eq!(payment.details(), &details);
        let stored = PaymentRepository::find_by_id(&*store, metadata.tenant_id, payment.id())
            .await
            .unwrap();
        assert_eq!(stored, Some(payment));
    }

    #[tokio::test]
    async fn missing_bill_is_not_found() {
        let store = Arc::new(InMemoryBillingStore::new());
        let handler = CreatePaymentHandler::new(store.clone(), store);

        let result = handler
            .handle(
                CreatePaymentCommand {
                    details: payment_details(BillId::new(), Decimal::new(5, 0), date(2025, 1, 2)),
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(BillingError::NotFound { ref resource, .. }) if resource == "Bill"
        ));
    }
}
