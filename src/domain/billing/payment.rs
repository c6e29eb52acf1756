//! Payment - money paid against a bill.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{
    fields, text_enum, BillId, PaymentId, TenantId, Timestamp, ValidationError,
};

pub const MAX_CONFIRMATION_LENGTH: usize = 100;
pub const MAX_NOTES_LENGTH: usize = 2000;

text_enum!(
    PaymentMethod {
        Cash => "cash",
        Check => "check",
        CreditCard => "credit_card",
        DebitCard => "debit_card",
        BankTransfer => "bank_transfer",
        AutoPay => "auto_pay",
        Other => "other",
    }
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub bill_id: BillId,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: Option<PaymentMethod>,
    pub confirmation_number: Option<String>,
    pub notes: Option<String>,
}

impl PaymentDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            bill_id: self.bill_id,
            amount: fields::positive_amount("amount", self.amount)?,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
            confirmation_number: fields::optional_text(
                "confirmation_number",
                self.confirmation_number,
                MAX_CONFIRMATION_LENGTH,
            )?,
            notes: fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    id: PaymentId,
    tenant_id: TenantId,
    details: PaymentDetails,
    created_at: Timestamp,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        tenant_id: TenantId,
        details: PaymentDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: PaymentId,
        tenant_id: TenantId,
        details: PaymentDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }

    pub fn bill_id(&self) -> BillId {
        self.details.bill_id
    }

    pub fn amount(&self) -> Decimal {
        self.details.amount
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.details.payment_date
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn update(&mut self, details: PaymentDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_is_rejected() {
        let result = Payment::new(
            PaymentId::new(),
            TenantId::DEFAULT,
            PaymentDetails {
                bill_id: BillId::new(),
                amount: Decimal::new(-500, 2),
                payment_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                payment_method: Some(PaymentMethod::CreditCard),
                confirmation_number: None,
                notes: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn confirmation_number_is_trimmed() {
        let payment = Payment::new(
            PaymentId::new(),
            TenantId::DEFAULT,
            PaymentDetails {
                bill_id: BillId::new(),
                amount: Decimal::new(5_000, 2),
                payment_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                payment_method: None,
                confirmation_number: Some("  CONF-123 ".to_string()),
                notes: None,
            },
        )
        .unwrap();
        assert_eq!(payment.details().confirmation_number.as_deref(), Some("CONF-123"));
    }
}
