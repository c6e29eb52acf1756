//! Persistence ports for the billing context.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::billing::{Bill, BillStatus, Payment};
use crate::domain::foundation::{fields, BillId, DomainError, PaymentId, TenantId};

/// Bill list filter. Results are ordered by due date ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillFilter {
    pub status: Option<BillStatus>,
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
}

impl BillFilter {
    pub fn matches(&self, bill: &Bill) -> bool {
        self.status.map_or(true, |s| bill.status() == s)
            && fields::within(bill.due_date(), self.due_from, self.due_to)
    }
}

/// Payment list filter. Results are ordered by payment date, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    pub bill_id: Option<BillId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PaymentFilter {
    pub fn for_bill(bill_id: BillId) -> Self {
        Self {
            bill_id: Some(bill_id),
            ..Self::default()
        }
    }

    pub fn matches(&self, payment: &Payment) -> bool {
        self.bill_id.map_or(true, |b| payment.bill_id() == b)
            && fields::within(payment.payment_date(), self.from, self.to)
    }
}

#[async_trait]
pub trait BillRepository: Send + Sync {
    async fn save(&self, bill: &Bill) -> Result<(), DomainError>;

    async fn update(&self, bill: &Bill) -> Result<(), DomainError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: BillId) -> Result<Option<Bill>, DomainError>;

    async fn exists(&self, tenant_id: TenantId, id: BillId) -> Result<bool, DomainError>;

    async fn list(&self, tenant_id: TenantId, filter: &BillFilter) -> Result<Vec<Bill>, DomainError>;

    /// Deletes the bill together with its payments.
    async fn delete(&self, tenant_id: TenantId, id: BillId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError>;

    async fn update(&self, payment: &Payment) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: PaymentId,
    ) -> Result<Option<Payment>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &PaymentFilter,
    ) -> Result<Vec<Payment>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: PaymentId) -> Result<(), DomainError>;
}
