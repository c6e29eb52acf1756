//! UpdateTaxYearHandler - Command handler for editing a tax year.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, TaxYearId};
use crate::domain::tax::{TaxError, TaxYearDetails};
use crate::ports::{DeductionRepository, TaxYearRepository};

use super::create_tax_year::duplicate_year;
use super::TaxYearSummary;

#[derive(Debug, Clone)]
pub struct UpdateTaxYearCommand {
    pub tax_year_id: TaxYearId,
    pub details: TaxYearDetails,
}

pub struct UpdateTaxYearHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl UpdateTaxYearHandler {
    pub fn new(
        tax_years: Arc<dyn TaxYearRepository>,
        deductions: Arc<dyn DeductionRepository>,
    ) -> Self {
        Self {
            tax_years,
            deductions,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateTaxYearCommand,
        metadata: CommandMetadata,
    ) -> Result<TaxYearSummary, TaxError> {
        let mut tax_year = self
            .tax_years
            .find_by_id(metadata.tenant_id, cmd.tax_year_id)
            .await?
            .ok_or_else(|| TaxError::not_found("TaxYear", cmd.tax_year_id))?;

        tax_year.update(cmd.details)?;

        if let Some(existing) = self
            .tax_years
            .find_by_year(metadata.tenant_id, tax_year.year())
            .await?
        {
            if existing.id() != tax_year.id() {
                return Err(duplicate_year(tax_year.year()));
            }
        }

        self.tax_years.update(&tax_year).await?;

        TaxYearSummary::load(self.deductions.as_ref(), tax_year).await
    }
}
