//! GetTaxYearHandler - Query handler for a tax year with its deduction
//! totals.

use std::sync::Arc;

use crate::domain::foundation::{TaxYearId, TenantId};
use crate::domain::tax::TaxError;
use crate::ports::{DeductionRepository, TaxYearRepository};

use super::TaxYearSummary;

#[derive(Debug, Clone)]
pub struct GetTaxYearQuery {
    pub tenant_id: TenantId,
    pub tax_year_id: TaxYearId,
}

pub struct GetTaxYearHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl GetTaxYearHandler {
    pub fn new(
        tax_years: Arc<dyn TaxYearRepository>,
        deductions: Arc<dyn DeductionRepository>,
    ) -> Self {
        Self {
            tax_years,
            deductions,
        }
    }

    pub async fn handle(&self, query: GetTaxYearQuery) -> Result<TaxYearSummary, TaxError> {
        let tax_year = self
            .tax_years
            .find_by_id(query.tenant_id, query.tax_year_id)
            .await?
            .ok_or_else(|| TaxError::not_found("TaxYear", query.tax_year_id))?;

        TaxYearSummary::load(self.deductions.as_ref(), tax_year).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryTaxStore;
    use crate::application::handlers::test_support::{date, deduction_details, tax_year_details};
    use crate::domain::foundation::DeductionId;
    use crate::domain::tax::{Deduction, TaxYear};

    #[tokio::test]
    async fn includes_deduction_totals() {
        let store = Arc::new(InMemoryTaxStore::new());
        let tax_year =
            TaxYear::new(TaxYearId::new(), TenantId::DEFAULT, tax_year_details(2024)).unwrap();
        TaxYearRepository::save(&*store, &tax_year).await.unwrap();
        for cents in [10_000, 4_999] {
            let deduction = Deduction::new(
                DeductionId::new(),
                TenantId::DEFAULT,
                deduction_details(tax_year.id(), Decimal::new(cents, 2), date(2024, 3, 1)),
            )
            .unwrap();
            DeductionRepository::save(&*store, &deduction).await.unwrap();
        }
        let handler = GetTaxYearHandler::new(store.clone(), store);

        let summary = handler
            .handle(GetTaxYearQuery {
                tenant_id: TenantId::DEFAULT,
                tax_year_id: tax_year.id(),
            })
            .await
            .unwrap();

        assert_eq!(summary.tax_year, tax_year);
        assert_eq!(summary.total_deductions, Decimal::new(14_999, 2));
        assert_eq!(summary.deduction_count, 2);
    }

    #[tokio::test]
    async fn unknown_year_is_not_found() {
        let store = Arc::new(InMemoryTaxStore::new());
        let handler = GetTaxYearHandler::new(store.clone(), store);

        let result = handler
            .handle(GetTaxYearQuery {
                tenant_id: TenantId::DEFAULT,
                tax_year_id: TaxYearId::new(),
            })
            .await;

        assert!(matches!(result, Err(TaxError::NotFound { .. })));
    }
}
