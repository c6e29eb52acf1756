//! TaxYear - a filing year that deductions are collected under.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{fields, TaxYearId, TenantId, Timestamp, ValidationError};

use super::Deduction;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_NOTES_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearDetails {
    pub year: i32,
    pub notes: Option<String>,
}

impl TaxYearDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::out_of_range(
                "year",
                MIN_YEAR as i64,
                MAX_YEAR as i64,
                self.year as i64,
            ));
        }
        Ok(Self {
            year: self.year,
            notes: fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYear {
    id: TaxYearId,
    tenant_id: TenantId,
    details: TaxYearDetails,
    is_filed: bool,
    filing_date: Option<NaiveDate>,
    created_at: Timestamp,
}

impl TaxYear {
    /// Opens an unfiled tax year.
    pub fn new(
        id: TaxYearId,
        tenant_id: TenantId,
        details: TaxYearDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            is_filed: false,
            filing_date: None,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: TaxYearId,
        tenant_id: TenantId,
        details: TaxYearDetails,
        is_filed: bool,
        filing_date: Option<NaiveDate>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            is_filed,
            filing_date,
            created_at,
        }
    }

    // ─── Accessors ───

    pub fn id(&self) -> TaxYearId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn year(&self) -> i32 {
        self.details.year
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn is_filed(&self) -> bool {
        self.is_filed
    }

    pub fn filing_date(&self) -> Option<NaiveDate> {
        self.filing_date
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ─── Mutations ───

    /// Replaces the year and notes. A filed year may still be annotated.
    pub fn update(&mut self, details: TaxYearDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }

    /// Marks the year filed on `on`. An already filed year keeps its date.
    pub fn mark_filed(&mut self, on: NaiveDate) {
        if !self.is_filed {
            self.is_filed = true;
            self.filing_date = Some(on);
        }
    }
}

/// Sum of deduction amounts; zero when there are none and `None` on overflow.
pub fn total_deductions<'a>(
    deductions: impl IntoIterator<Item = &'a Deduction>,
) -> Option<Decimal> {
    fields::checked_total(deductions.into_iter().map(Deduction::amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DeductionId;
    use crate::domain::tax::{DeductionCategory, DeductionDetails};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tax_year() -> TaxYear {
        TaxYear::new(
            TaxYearId::new(),
            TenantId::DEFAULT,
            TaxYearDetails {
                year: 2024,
                notes: Some("Tax year notes".to_string()),
            },
        )
        .unwrap()
    }

    fn deduction(tax_year_id: TaxYearId, amount: Decimal) -> Deduction {
        Deduction::new(
            DeductionId::new(),
            TenantId::DEFAULT,
            DeductionDetails {
                tax_year_id,
                description: "Deduction".to_string(),
                amount,
                date: date(2024, 3, 1),
                category: DeductionCategory::Other,
                notes: None,
                has_receipt: false,
            },
        )
        .unwrap()
    }

    #[test]
    fn new_year_is_unfiled() {
        let ty = tax_year();
        assert_eq!(ty.year(), 2024);
        assert!(!ty.is_filed());
        assert_eq!(ty.filing_date(), None);
        assert_eq!(ty.notes(), Some("Tax year notes"));
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        let result = TaxYear::new(
            TaxYearId::new(),
            TenantId::DEFAULT,
            TaxYearDetails {
                year: 1800,
                notes: None,
            },
        );
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn mark_filed_sets_date_once() {
        let mut ty = tax_year();
        ty.mark_filed(date(2025, 4, 1));
        ty.mark_filed(date(2025, 4, 15));
        assert!(ty.is_filed());
        assert_eq!(ty.filing_date(), Some(date(2025, 4, 1)));
    }

    #[test]
    fn total_of_no_deductions_is_zero() {
        assert_eq!(total_deductions(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn total_sums_amounts() {
        let ty = tax_year();
        let deductions = vec![
            deduction(ty.id(), Decimal::new(100, 0)),
            deduction(ty.id(), Decimal::new(25_050, 2)),
            deduction(ty.id(), Decimal::new(500, 0)),
        ];
        assert_eq!(total_deductions(&deductions), Some(Decimal::new(85_050, 2)));
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_cents(cents in proptest::collection::vec(0i64..10_000_000, 0..20)) {
            let ty = tax_year();
            let deductions: Vec<_> = cents
                .iter()
                .map(|c| deduction(ty.id(), Decimal::new(*c, 2)))
                .collect();
            let expected = Decimal::new(cents.iter().sum::<i64>(), 2);
            prop_assert_eq!(total_deductions(&deductions), Some(expected));
        }
    }
}
