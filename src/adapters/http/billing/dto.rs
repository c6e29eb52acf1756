//! HTTP DTOs for bill and payment endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::BillSummary;
use crate::domain::billing::{
    Bill, BillDetails, BillStatus, BillingFrequency, Payment, PaymentDetails, PaymentMethod,
};
use crate::domain::foundation::{BillId, PaymentId, Timestamp};
use crate::ports::{BillFilter, PaymentFilter};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/bills` and `PUT /api/bills/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct BillRequest {
    pub name: String,
    #[serde(default)]
    pub payee: Option<String>,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub billing_frequency: BillingFrequency,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<BillRequest> for BillDetails {
    fn from(req: BillRequest) -> Self {
        Self {
            name: req.name,
            payee: req.payee,
            amount: req.amount,
            due_date: req.due_date,
            billing_frequency: req.billing_frequency,
            status: req.status,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub bill_id: BillId,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub confirmation_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<PaymentRequest> for PaymentDetails {
    fn from(req: PaymentRequest) -> Self {
        Self {
            bill_id: req.bill_id,
            amount: req.amount,
            payment_date: req.payment_date,
            payment_method: req.payment_method,
            confirmation_number: req.confirmation_number,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBillsParams {
    pub status: Option<BillStatus>,
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
}

impl From<ListBillsParams> for BillFilter {
    fn from(params: ListBillsParams) -> Self {
        Self {
            status: params.status,
            due_from: params.due_from,
            due_to: params.due_to,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPaymentsParams {
    pub bill_id: Option<BillId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<ListPaymentsParams> for PaymentFilter {
    fn from(params: ListPaymentsParams) -> Self {
        Self {
            bill_id: params.bill_id,
            from: params.from,
            to: params.to,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillResponse {
    pub id: BillId,
    pub name: String,
    pub payee: Option<String>,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub billing_frequency: BillingFrequency,
    pub status: BillStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Bill> for BillResponse {
    fn from(bill: &Bill) -> Self {
        let d = bill.details();
        Self {
            id: bill.id(),
            name: d.name.clone(),
            payee: d.payee.clone(),
            amount: d.amount,
            due_date: d.due_date,
            billing_frequency: d.billing_frequency,
            status: d.status,
            notes: d.notes.clone(),
            created_at: bill.created_at(),
        }
    }
}

/// Bill with its payment totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSummaryResponse {
    #[serde(flatten)]
    pub bill: BillResponse,
    pub total_paid: Decimal,
    pub remaining_balance: Decimal,
    pub payment_count: usize,
}

impl From<&BillSummary> for BillSummaryResponse {
    fn from(summary: &BillSummary) -> Self {
        Self {
            bill: BillResponse::from(&summary.bill),
            total_paid: summary.total_paid,
            remaining_balance: summary.remaining_balance,
            payment_count: summary.payment_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub bill_id: BillId,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: Option<PaymentMethod>,
    pub confirmation_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        let d = payment.details();
        Self {
            id: payment.id(),
            bill_id: d.bill_id,
            amount: d.amount,
            payment_date: d.payment_date,
            payment_method: d.payment_method,
            confirmation_number: d.confirmation_number.clone(),
            notes: d.notes.clone(),
            created_at: payment.created_at(),
        }
    }
}
