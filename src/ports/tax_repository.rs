//! Persistence ports for the tax context.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{fields, DeductionId, DomainError, ErrorCode, TaxYearId, TenantId};
use crate::domain::tax::{Deduction, DeductionCategory, TaxYear};

/// Derived totals of the deductions filed under one tax year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeductionTotals {
    pub total: Decimal,
    pub count: u32,
}

impl DeductionTotals {
    /// Counts one more deduction. Fails when the total leaves `Decimal`'s range.
    pub fn add(&mut self, amount: Decimal) -> Result<(), DomainError> {
        self.total = self.total.checked_add(amount).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Deduction total is out of range")
        })?;
        self.count += 1;
        Ok(())
    }
}

/// Deduction list filter. Results are ordered by date, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionFilter {
    pub tax_year_id: Option<TaxYearId>,
    pub category: Option<DeductionCategory>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DeductionFilter {
    pub fn matches(&self, deduction: &Deduction) -> bool {
        self.tax_year_id
            .map_or(true, |t| deduction.tax_year_id() == t)
            && self.category.map_or(true, |c| deduction.category() == c)
            && fields::within(deduction.date(), self.from, self.to)
    }
}

/// Tax years are listed newest year first.
#[async_trait]
pub trait TaxYearRepository: Send + Sync {
    async fn save(&self, tax_year: &TaxYear) -> Result<(), DomainError>;

    async fn update(&self, tax_year: &TaxYear) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: TaxYearId,
    ) -> Result<Option<TaxYear>, DomainError>;

    async fn find_by_year(&self, tenant_id: TenantId, year: i32)
        -> Result<Option<TaxYear>, DomainError>;

    async fn exists(&self, tenant_id: TenantId, id: TaxYearId) -> Result<bool, DomainError>;

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<TaxYear>, DomainError>;

    /// Deletes the tax year together with its deductions.
    async fn delete(&self, tenant_id: TenantId, id: TaxYearId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait DeductionRepository: Send + Sync {
    async fn save(&self, deduction: &Deduction) -> Result<(), DomainError>;

    async fn update(&self, deduction: &Deduction) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: DeductionId,
    ) -> Result<Option<Deduction>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &DeductionFilter,
    ) -> Result<Vec<Deduction>, DomainError>;

    /// Totals per tax year for every year with at least one deduction.
    async fn totals_by_tax_year(
        &self,
        tenant_id: TenantId,
    ) -> Result<HashMap<TaxYearId, DeductionTotals>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: DeductionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn TaxYearRepository, _: &dyn DeductionRepository) {}

    #[test]
    fn totals_accumulate() {
        let mut totals = DeductionTotals::default();
        totals.add(Decimal::new(100, 0)).unwrap();
        totals.add(Decimal::new(25_050, 2)).unwrap();
        assert_eq!(totals.total, Decimal::new(35_050, 2));
        assert_eq!(totals.count, 2);
    }

    #[test]
    fn totals_overflow_is_an_error_not_a_panic() {
        let mut totals = DeductionTotals::default();
        totals.add(Decimal::MAX).unwrap();

        let err = totals.add(Decimal::ONE).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(totals.total, Decimal::MAX);
        assert_eq!(totals.count, 1);
    }
}
