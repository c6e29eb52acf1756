//! CreateTaxYearHandler - Command handler for opening a tax year.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, TaxYearId};
use crate::domain::tax::{TaxError, TaxYear, TaxYearDetails};
use crate::ports::{DeductionTotals, TaxYearRepository};

use super::TaxYearSummary;

#[derive(Debug, Clone)]
pub struct CreateTaxYearCommand {
    pub details: TaxYearDetails,
}

pub struct CreateTaxYearHandler {
    repository: Arc<dyn TaxYearRepository>,
}

impl CreateTaxYearHandler {
    pub fn new(repository: Arc<dyn TaxYearRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateTaxYearCommand,
        metadata: CommandMetadata,
    ) -> Result<TaxYearSummary, TaxError> {
        let tax_year = TaxYear::new(TaxYearId::new(), metadata.tenant_id, cmd.details)?;

        if self
            .repository
            .find_by_year(metadata.tenant_id, tax_year.year())
            .await?
            .is_some()
        {
            return Err(duplicate_year(tax_year.year()));
        }

        self.repository.save(&tax_year).await?;

        Ok(TaxYearSummary::new(tax_year, DeductionTotals::default()))
    }
}

pub(super) fn duplicate_year(year: i32) -> TaxError {
    TaxError::validation("year", format!("tax year {year} already exists"))
}
