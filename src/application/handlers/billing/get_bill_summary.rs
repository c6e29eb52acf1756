//! GetBillSummaryHandler - Query handler for a bill with its payment
//! totals.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::billing::{Bill, BillingError};
use crate::domain::foundation::{fields, BillId, TenantId};
use crate::ports::{BillRepository, PaymentFilter, PaymentRepository};

#[derive(Debug, Clone)]
pub struct GetBillSummaryQuery {
    pub tenant_id: TenantId,
    pub bill_id: BillId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillSummary {
    pub bill: Bill,
    pub total_paid: Decimal,
    /// Amount still owed, never below zero.
    pub remaining_balance: Decimal,
    pub payment_count: usize,
}

pub struct GetBillSummaryHandler {
    bills: Arc<dyn BillRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl GetBillSummaryHandler {
    pub fn new(bills: Arc<dyn BillRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { bills, payments }
    }

    pub async fn handle(&self, query: GetBillSummaryQuery) -> Result<BillSummary, BillingError> {
        let bill = self
            .bills
            .find_by_id(query.tenant_id, query.bill_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Bill", query.bill_id))?;

        let payments = self
            .payments
            .list(query.tenant_id, &PaymentFilter::for_bill(bill.id()))
            .await?;
        let total_paid = fields::checked_total(payments.iter().map(|p| p.amount()))
            .ok_or_else(|| BillingError::infrastructure("Payment total is out of range"))?;

        Ok(BillSummary {
            remaining_balance: bill.remaining_balance(total_paid),
            total_paid,
            payment_count: payments.len(),
            bill,
        })
    }
}
