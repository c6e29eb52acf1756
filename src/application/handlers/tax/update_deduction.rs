//! UpdateDeductionHandler - Command handler for editing a deduction.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DeductionId};
use crate::domain::tax::{Deduction, DeductionDetails, TaxError};
use crate::ports::{DeductionRepository, TaxYearRepository};

#[derive(Debug, Clone)]
pub struct UpdateDeductionCommand {
    pub deduction_id: DeductionId,
    pub details: DeductionDetails,
}

pub struct UpdateDeductionHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl UpdateDeductionHandler {
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
        cmd: UpdateDeductionCommand,
        metadata: CommandMetadata,
    ) -> Result<Deduction, TaxError> {
        let mut deduction = self
            .deductions
            .find_by_id(metadata.tenant_id, cmd.deduction_id)
            .await?
            .ok_or_else(|| TaxError::not_found("Deduction", cmd.deduction_id))?;

        let tax_year_id = cmd.details.tax_year_id;
        if !self.tax_years.exists(metadata.tenant_id, tax_year_id).await? {
            return Err(TaxError::not_found("TaxYear", tax_year_id));
        }

        deduction.update(cmd.details)?;
        self.deductions.update(&deduction).await?;

        Ok(deduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryTaxStore;
    use crate::application::handlers::test_support::{
        date, deduction_details, metadata, tax_year_details,
    };
    use crate::domain::foundation::TaxYearId;
    use crate::domain::tax::TaxYear;

    #[tokio::test]
    async fn moves_deduction_to_another_year() {
        let store = Arc::new(InMemoryTaxStore::new());
        let metadata = metadata();
        let from =
            TaxYear::new(TaxYearId::new(), metadata.tenant_id, tax_year_details(2023)).unwrap();
        let to = TaxYear::new(TaxYearId::new(), metadata.tenant_id, tax_year_details(2024)).unwrap();
        TaxYearRepository::save(&*store, &from).await.unwrap();
        TaxYearRepository::save(&*store, &to).await.unwrap();
        let deduction = Deduction::new(
            DeductionId::new(),
            metadata.tenant_id,
            deduction_details(from.id(), Decimal::TEN, date(2024, 1, 2)),
        )
        .unwrap();
        DeductionRepository::save(&*store, &deduction).await.unwrap();
        let handler = UpdateDeductionHandler::new(store.clone(), store.clone());

        let moved = handler
            .handle(
                UpdateDeductionCommand {
                    deduction_id: deduction.id(),
                    details: deduction_details(to.id(), Decimal::TEN, date(2024, 1, 2)),
                },
                metadata,
            )
            .await
            .unwrap();

        assert_eq!(moved.tax_year_id(), to.id());
    }
}
