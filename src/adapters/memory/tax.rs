//! In-memory store for tax years and deductions.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{DeductionId, DomainError, TaxYearId, TenantId};
use crate::domain::tax::{Deduction, TaxYear};
use crate::ports::{
    DeductionFilter, DeductionRepository, DeductionTotals, TaxYearRepository,
};

use super::table::Table;

pub struct InMemoryTaxStore {
    tax_years: Table<TaxYearId, TaxYear>,
    deductions: Table<DeductionId, Deduction>,
}

impl InMemoryTaxStore {
    pub fn new() -> Self {
        Self {
            tax_years: Table::new("TaxYear"),
            deductions: Table::new("Deduction"),
        }
    }
}

impl Default for InMemoryTaxStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaxYearRepository for InMemoryTaxStore {
    async fn save(&self, tax_year: &TaxYear) -> Result<(), DomainError> {
        self.tax_years
            .insert(tax_year.tenant_id(), tax_year.id(), tax_year.clone())
            .await;
        Ok(())
    }

    async fn update(&self, tax_year: &TaxYear) -> Result<(), DomainError> {
        self.tax_years
            .replace(tax_year.tenant_id(), tax_year.id(), tax_year.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: TaxYearId,
    ) -> Result<Option<TaxYear>, DomainError> {
        Ok(self.tax_years.get(tenant_id, id).await)
    }

    async fn find_by_year(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<Option<TaxYear>, DomainError> {
        Ok(self
            .tax_years
            .select(tenant_id, |t| t.year() == year)
            .await
            .into_iter()
            .next())
    }

    async fn exists(&self, tenant_id: TenantId, id: TaxYearId) -> Result<bool, DomainError> {
        Ok(self.tax_years.contains(tenant_id, id).await)
    }

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<TaxYear>, DomainError> {
        let mut rows = self.tax_years.select(tenant_id, |_| true).await;
        rows.sort_by(|a, b| b.year().cmp(&a.year()));
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: TaxYearId) -> Result<(), DomainError> {
        self.tax_years.remove(tenant_id, id).await?;
        self.deductions
            .purge(tenant_id, |d| d.tax_year_id() == id)
            .await;
        Ok(())
    }
}

#[async_trait]
impl DeductionRepository for InMemoryTaxStore {
    async fn save(&self, deduction: &Deduction) -> Result<(), DomainError> {
        self.deductions
            .insert(deduction.tenant_id(), deduction.id(), deduction.clone())
            .await;
        Ok(())
    }

    async fn update(&self, deduction: &Deduction) -> Result<(), DomainError> {
        self.deductions
            .replace(deduction.tenant_id(), deduction.id(), deduction.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: DeductionId,
    ) -> Result<Option<Deduction>, DomainError> {
        Ok(self.deductions.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &DeductionFilter,
    ) -> Result<Vec<Deduction>, DomainError> {
        let mut rows = self.deductions.select(tenant_id, |d| filter.matches(d)).await;
        rows.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        Ok(rows)
    }

    async fn totals_by_tax_year(
        &self,
        tenant_id: TenantId,
    ) -> Result<HashMap<TaxYearId, DeductionTotals>, DomainError> {
        let mut totals: HashMap<TaxYearId, DeductionTotals> = HashMap::new();
        for deduction in self.deductions.select(tenant_id, |_| true).await {
            totals
                .entry(deduction.tax_year_id())
                .or_default()
                .add(deduction.amount())?;
        }
        Ok(totals)
    }

    async fn delete(&self, tenant_id: TenantId, id: DeductionId) -> Result<(), DomainError> {
        self.deductions.remove(tenant_id, id).await.map(|_| ())
    }
}
