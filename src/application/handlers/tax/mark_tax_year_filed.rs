//! MarkTaxYearFiledHandler - Command handler for recording that a return
//! was filed. Filing twice keeps the first filing date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{CommandMetadata, TaxYearId};
use crate::domain::tax::TaxError;
use crate::ports::{DeductionRepository, TaxYearRepository};

use super::TaxYearSummary;

#[derive(Debug, Clone)]
pub struct MarkTaxYearFiledCommand {
    pub tax_year_id: TaxYearId,
    pub filed_on: NaiveDate,
}

pub struct MarkTaxYearFiledHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl MarkTaxYearFiledHandler {
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
        cmd: MarkTaxYearFiledCommand,
        metadata: CommandMetadata,
    ) -> Result<TaxYearSummary, TaxError> {
        let mut tax_year = self
            .tax_years
            .find_by_id(metadata.tenant_id, cmd.tax_year_id)
            .await?
            .ok_or_else(|| TaxError::not_found("TaxYear", cmd.tax_year_id))?;

        if !tax_year.is_filed() {
            tax_year.mark_filed(cmd.filed_on);
            self.tax_years.update(&tax_year).await?;
        }

        TaxYearSummary::load(self.deductions.as_ref(), tax_year).await
    }
}
