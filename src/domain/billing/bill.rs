//! Bill - a recurring or one-off amount owed to a payee.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{fields, text_enum, BillId, TenantId, Timestamp, ValidationError};

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_PAYEE_LENGTH: usize = 200;
pub const MAX_NOTES_LENGTH: usize = 2000;

text_enum!(
    BillingFrequency {
        OneTime => "one_time",
        Weekly => "weekly",
        BiWeekly => "bi_weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        SemiAnnually => "semi_annually",
        Annually => "annually",
    }
);

text_enum!(
    BillStatus {
        Pending => "pending",
        Scheduled => "scheduled",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
);

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillDetails {
    pub name: String,
    pub payee: Option<String>,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub billing_frequency: BillingFrequency,
    pub status: BillStatus,
    pub notes: Option<String>,
}

impl BillDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields::required_text("name", &self.name, MAX_NAME_LENGTH)?,
            payee: fields::optional_text("payee", self.payee, MAX_PAYEE_LENGTH)?,
            amount: fields::positive_amount("amount", self.amount)?,
            due_date: self.due_date,
            billing_frequency: self.billing_frequency,
            status: self.status,
            notes: fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    id: BillId,
    tenant_id: TenantId,
    details: BillDetails,
    created_at: Timestamp,
}

impl Bill {
    pub fn new(id: BillId, tenant_id: TenantId, details: BillDetails) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: BillId,
        tenant_id: TenantId,
        details: BillDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    // ─── Accessors ───

    pub fn id(&self) -> BillId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &BillDetails {
        &self.details
    }

    pub fn amount(&self) -> Decimal {
        self.details.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.details.due_date
    }

    pub fn status(&self) -> BillStatus {
        self.details.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Amount still owed after `total_paid`, never below zero.
    pub fn remaining_balance(&self, total_paid: Decimal) -> Decimal {
        (self.details.amount - total_paid).max(Decimal::ZERO)
    }

    // ─── Mutations ───

    pub fn update(&mut self, details: BillDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}
