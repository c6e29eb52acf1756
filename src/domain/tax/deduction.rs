//! Deduction - a deductible expense claimed under a tax year.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{
    fields, text_enum, DeductionId, TaxYearId, TenantId, Timestamp, ValidationError,
};

pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_NOTES_LENGTH: usize = 2000;

text_enum!(
    DeductionCategory {
        MedicalExpenses => "medical_expenses",
        CharitableDonations => "charitable_donations",
        BusinessExpenses => "business_expenses",
        HomeOffice => "home_office",
        EducationExpenses => "education_expenses",
        MortgageInterest => "mortgage_interest",
        StateAndLocalTaxes => "state_and_local_taxes",
        RetirementContributions => "retirement_contributions",
        Other => "other",
    }
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionDetails {
    pub tax_year_id: TaxYearId,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: DeductionCategory,
    pub notes: Option<String>,
    pub has_receipt: bool,
}

impl DeductionDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            tax_year_id: self.tax_year_id,
            description: fields::required_text(
                "description",
                &self.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            amount: fields::non_negative_amount("amount", self.amount)?,
            date: self.date,
            category: self.category,
            notes: fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?,
            has_receipt: self.has_receipt,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    id: DeductionId,
    tenant_id: TenantId,
    details: DeductionDetails,
    created_at: Timestamp,
}

impl Deduction {
    pub fn new(
        id: DeductionId,
        tenant_id: TenantId,
        details: DeductionDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: DeductionId,
        tenant_id: TenantId,
        details: DeductionDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> DeductionId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &DeductionDetails {
        &self.details
    }

    pub fn tax_year_id(&self) -> TaxYearId {
        self.details.tax_year_id
    }

    pub fn amount(&self) -> Decimal {
        self.details.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.details.date
    }

    pub fn category(&self) -> DeductionCategory {
        self.details.category
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn update(&mut self, details: DeductionDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}
