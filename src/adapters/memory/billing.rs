//! In-memory store for bills and payments.

use async_trait::async_trait;

use crate::domain::billing::{Bill, Payment};
use crate::domain::foundation::{BillId, DomainError, PaymentId, TenantId};
use crate::ports::{BillFilter, BillRepository, PaymentFilter, PaymentRepository};

use super::table::Table;

pub struct InMemoryBillingStore {
    bills: Table<BillId, Bill>,
    payments: Table<PaymentId, Payment>,
}

impl InMemoryBillingStore {
    pub fn new() -> Self {
        Self {
            bills: Table::new("Bill"),
            payments: Table::new("Payment"),
        }
    }
}

impl Default for InMemoryBillingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillRepository for InMemoryBillingStore {
    async fn save(&self, bill: &Bill) -> Result<(), DomainError> {
        self.bills.insert(bill.tenant_id(), bill.id(), bill.clone()).await;
        Ok(())
    }

    async fn update(&self, bill: &Bill) -> Result<(), DomainError> {
        self.bills.replace(bill.tenant_id(), bill.id(), bill.clone()).await
    }

    async fn find_by_id(&self, tenant_id: TenantId, id: BillId) -> Result<Option<Bill>, DomainError> {
        Ok(self.bills.get(tenant_id, id).await)
    }

    async fn exists(&self, tenant_id: TenantId, id: BillId) -> Result<bool, DomainError> {
        Ok(self.bills.contains(tenant_id, id).await)
    }

    async fn list(&self, tenant_id: TenantId, filter: &BillFilter) -> Result<Vec<Bill>, DomainError> {
        let mut rows = self.bills.select(tenant_id, |b| filter.matches(b)).await;
        rows.sort_by_key(|b| (b.due_date(), b.created_at()));
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: BillId) -> Result<(), DomainError> {
        self.bills.remove(tenant_id, id).await?;
        self.payments.purge(tenant_id, |p| p.bill_id() == id).await;
        Ok(())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryBillingStore {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
        self.payments
            .insert(payment.tenant_id(), payment.id(), payment.clone())
            .await;
        Ok(())
    }

    async fn update(&self, payment: &Payment) -> Result<(), DomainError> {
        self.payments
            .replace(payment.tenant_id(), payment.id(), payment.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: PaymentId,
    ) -> Result<Option<Payment>, DomainError> {
        Ok(self.payments.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &PaymentFilter,
    ) -> Result<Vec<Payment>, DomainError> {
        let mut rows = self.payments.select(tenant_id, |p| filter.matches(p)).await;
        rows.sort_by(|a, b| {
            b.payment_date()
                .cmp(&a.payment_date())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: PaymentId) -> Result<(), DomainError> {
        self.payments.remove(tenant_id, id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::domain::billing::PaymentDetails;

    fn payment(bill_id: BillId, day: u32) -> Payment {
        Payment::new(
            PaymentId::new(),
            TenantId::DEFAULT,
            PaymentDetails {
                bill_id,
                amount: Decimal::new(10, 0),
                payment_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                payment_method: None,
                confirmation_number: None,
                notes: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn payments_list_newest_first() {
        let store = InMemoryBillingStore::new();
        let repo: &dyn PaymentRepository = &store;
        let bill_id = BillId::new();
        let early = payment(bill_id, 2);
        let late = payment(bill_id, 20);
        repo.save(&early).await.unwrap();
        repo.save(&late).await.unwrap();

        let listed = repo
            .list(TenantId::DEFAULT, &PaymentFilter::for_bill(bill_id))
            .await
            .unwrap();

        assert_eq!(listed, vec![late, early]);
    }
}
