//! DeleteTaxYearHandler - Command handler for removing a tax year and its
//! deductions.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, TaxYearId};
use crate::domain::tax::TaxError;
use crate::ports::TaxYearRepository;

#[derive(Debug, Clone)]
pub struct DeleteTaxYearCommand {
    pub tax_year_id: TaxYearId,
}

pub struct DeleteTaxYearHandler {
    repository: Arc<dyn TaxYearRepository>,
}

impl DeleteTaxYearHandler {
    pub fn new(repository: Arc<dyn TaxYearRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteTaxYearCommand,
        metadata: CommandMetadata,
    ) -> Result<(), TaxError> {
        self.repository
            .delete(metadata.tenant_id, cmd.tax_year_id)
            .await?;
        Ok(())
    }
}
