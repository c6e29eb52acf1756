//! CreateBillHandler - Command handler for scheduling a bill.

use std::sync::Arc;

use crate::domain::billing::{Bill, BillDetails, BillingError};
use crate::domain::foundation::{BillId, CommandMetadata};
use crate::ports::BillRepository;

#[derive(Debug, Clone)]
pub struct CreateBillCommand {
    pub details: BillDetails,
}

pub struct CreateBillHandler {
    repository: Arc<dyn BillRepository>,
}

impl CreateBillHandler {
    pub fn new(repository: Arc<dyn BillRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateBillCommand,
        metadata: CommandMetadata,
    ) -> Result<Bill, BillingError> {
        let bill = Bill::new(BillId::new(), metadata.tenant_id, cmd.details)?;
        self.repository.save(&bill).await?;
        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryBillingStore;
    use crate::application::handlers::test_support::{bill_details, metadata};
    use crate::domain::foundation::{DomainError, ErrorCode, TenantId};
    use crate::ports::BillFilter;
    use async_trait::async_trait;

    struct FailingBillRepository;

    #[async_trait]
    impl BillRepository for FailingBillRepository {
        async fn save(&self, _bill: &Bill) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated save failure"))
        }

        async fn update(&self, _bill: &Bill) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _: TenantId, _: BillId) -> Result<Option<Bill>, DomainError> {
            Ok(None)
        }

        async fn exists(&self, _: TenantId, _: BillId) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list(&self, _: TenantId, _: &BillFilter) -> Result<Vec<Bill>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _: TenantId, _: BillId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn created_bill_round_trips_through_the_store() {
        let store: Arc<dyn BillRepository> = Arc::new(InMemoryBillingStore::new());
        let handler = CreateBillHandler::new(store.clone());
        let metadata = metadata();
        let details = bill_details("Electricity", Decimal::new(12_034, 2));

        let bill = handler
            .handle(
                CreateBillCommand {
                    details: details.clone(),
                },
                metadata.clone(),
            )
            .await
            .unwrap();

        assert_eq!(bill.details(), &details);
        assert_eq!(
            store.find_by_id(metadata.tenant_id, bill.id()).await.unwrap(),
            Some(bill)
        );
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        let handler = CreateBillHandler::new(Arc::new(InMemoryBillingStore::new()));

        let result = handler
            .handle(
                CreateBillCommand {
                    details: bill_details("Free", Decimal::ZERO),
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(BillingError::ValidationFailed { ref field, .. }) if field == "amount"
        ));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler = CreateBillHandler::new(Arc::new(FailingBillRepository));

        let result = handler
            .handle(
                CreateBillCommand {
                    details: bill_details("Rent", Decimal::new(1_500, 0)),
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(BillingError::Infrastructure(_))));
    }
}
