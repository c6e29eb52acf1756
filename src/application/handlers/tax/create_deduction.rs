//! CreateDeductionHandler - Command handler for recording a deduction
//! under a tax year.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DeductionId};
use crate::domain::tax::{Deduction, DeductionDetails, TaxError};
use crate::ports::{DeductionRepository, TaxYearRepository};

#[derive(Debug, Clone)]
pub struct CreateDeductionCommand {
    pub details: DeductionDetails,
}

pub struct CreateDeductionHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl CreateDeductionHandler {
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
        cmd: CreateDeductionCommand,
        metadata: CommandMetadata,
    ) -> Result<Deduction, TaxError> {
        let deduction = Deduction::new(DeductionId::new(), metadata.tenant_id, cmd.details)?;

        let tax_year_id = deduction.tax_year_id();
        if !self.tax_years.exists(metadata.tenant_id, tax_year_id).await? {
            return Err(TaxError::not_found("TaxYear", tax_year_id));
        }

        self.deductions.save(&deduction).await?;

        Ok(deduction)
    }
}
