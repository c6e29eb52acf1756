//! ListTaxYearsHandler - Query handler for a tenant's tax years, newest
//! first, each with its deduction totals.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::tax::TaxError;
use crate::ports::{DeductionRepository, TaxYearRepository};

use super::TaxYearSummary;

#[derive(Debug, Clone)]
pub struct ListTaxYearsQuery {
    pub tenant_id: TenantId,
}

pub struct ListTaxYearsHandler {
    tax_years: Arc<dyn TaxYearRepository>,
    deductions: Arc<dyn DeductionRepository>,
}

impl ListTaxYearsHandler {
    pub fn new(
        tax_years: Arc<dyn TaxYearRepository>,
        deductions: Arc<dyn DeductionRepository>,
    ) -> Self {
        Self {
            tax_years,
            deductions,
        }
    }

    pub async fn handle(&self, query: ListTaxYearsQuery) -> Result<Vec<TaxYearSummary>, TaxError> {
        let tax_years = self.tax_years.list(query.tenant_id).await?;
        let mut totals = self.deductions.totals_by_tax_year(query.tenant_id).await?;

        Ok(tax_years
            .into_iter()
            .map(|tax_year| {
                let year_totals = totals.remove(&tax_year.id()).unwrap_or_default();
                TaxYearSummary::new(tax_year, year_totals)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryTaxStore;
    use crate::application::handlers::test_support::{date, deduction_details, tax_year_details};
    use crate::domain::foundation::{DeductionId, TaxYearId};
    use crate::domain::tax::{Deduction, TaxYear};

    #[tokio::test]
    async fn years_without_deductions_total_zero() {
        let store = Arc::new(InMemoryTaxStore::new());
        let older =
            TaxYear::new(TaxYearId::new(), TenantId::DEFAULT, tax_year_details(2023)).unwrap();
        let newer =
            TaxYear::new(TaxYearId::new(), TenantId::DEFAULT, tax_year_details(2024)).unwrap();
        TaxYearRepository::save(&*store, &older).await.unwrap();
        TaxYearRepository::save(&*store, &newer).await.unwrap();
        let deduction = Deduction::new(
            DeductionId::new(),
            TenantId::DEFAULT,
            deduction_details(older.id(), Decimal::new(300, 0), date(2023, 11, 2)),
        )
        .unwrap();
        DeductionRepository::save(&*store, &deduction).await.unwrap();
        let handler = ListTaxYearsHandler::new(store.clone(), store);

        let years = handler
            .handle(ListTaxYearsQuery {
                tenant_id: TenantId::DEFAULT,
            })
            .await
            .unwrap();

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].tax_year.year(), 2024);
        assert_eq!(years[0].total_deductions, Decimal::ZERO);
        assert_eq!(years[0].deduction_count, 0);
        assert_eq!(years[1].total_deductions, Decimal::new(300, 0));
        assert_eq!(years[1].deduction_count, 1);
    }
}
