//! Tax year read model with derived deduction totals.

use rust_decimal::Decimal;

use crate::domain::tax::{total_deductions, TaxError, TaxYear};
use crate::ports::{DeductionFilter, DeductionRepository, DeductionTotals};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearSummary {
    pub tax_year: TaxYear,
    pub total_deductions: Decimal,
    pub deduction_count: u32,
}

impl TaxYearSummary {
    pub fn new(tax_year: TaxYear, totals: DeductionTotals) -> Self {
        Self {
            tax_year,
            total_deductions: totals.total,
            deduction_count: totals.count,
        }
    }

    /// Loads the deductions of `tax_year` and totals them.
    pub(super) async fn load(
        deductions: &dyn DeductionRepository,
        tax_year: TaxYear,
    ) -> Result<Self, TaxError> {
        let rows = deductions
            .list(
                tax_year.tenant_id(),
                &DeductionFilter {
                    tax_year_id: Some(tax_year.id()),
                    ..Default::default()
                },
            )
            .await?;

        let total = total_deductions(&rows)
            .ok_or_else(|| TaxError::infrastructure("Deduction total is out of range"))?;

        Ok(Self {
            total_deductions: total,
            deduction_count: rows.len() as u32,
            tax_year,
        })
    }
}
