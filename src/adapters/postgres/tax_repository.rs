//! PostgreSQL implementations of the tax context repositories.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::support::{column, db_error, expect_row, text_column, timestamp_column};
use crate::domain::foundation::{DeductionId, DomainError, ErrorCode, TaxYearId, TenantId};
use crate::domain::tax::{Deduction, DeductionDetails, TaxYear, TaxYearDetails};
use crate::ports::{
    DeductionFilter, DeductionRepository, DeductionTotals, TaxYearRepository,
};

const TAX_YEAR_COLUMNS: &str = "id, tenant_id, year, is_filed, filing_date, notes, created_at";

const DEDUCTION_COLUMNS: &str = "id, tenant_id, tax_year_id, description, amount, date, \
    category, notes, has_receipt, created_at";

// ════════════════════════════════════════════════════════════════════════════
// Tax years
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresTaxYearRepository {
    pool: PgPool,
}

impl PostgresTaxYearRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        tenant_id: TenantId,
        bind: TaxYearKey,
    ) -> Result<Option<TaxYear>, DomainError> {
        let sql = format!(
            "SELECT {} FROM tax_years WHERE tenant_id = $1 AND {}",
            TAX_YEAR_COLUMNS, condition
        );
        let query = sqlx::query(&sql).bind(tenant_id.as_uuid());
        let query = match bind {
            TaxYearKey::Id(id) => query.bind(id),
            TaxYearKey::Year(year) => query.bind(year),
        };
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch tax year"))?;

        row.map(row_to_tax_year).transpose()
    }
}

enum TaxYearKey {
    Id(Uuid),
    Year(i32),
}

#[async_trait]
impl TaxYearRepository for PostgresTaxYearRepository {
    async fn save(&self, tax_year: &TaxYear) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tax_years (id, tenant_id, year, is_filed, filing_date, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(tax_year.id().as_uuid())
        .bind(tax_year.tenant_id().as_uuid())
        .bind(tax_year.year())
        .bind(tax_year.is_filed())
        .bind(tax_year.filing_date())
        .bind(tax_year.notes())
        .bind(tax_year.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| unique_year_violation(e, tax_year.year(), "insert tax year"))?;

        Ok(())
    }

    async fn update(&self, tax_year: &TaxYear) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE tax_years SET
                year = $3,
                is_filed = $4,
                filing_date = $5,
                notes = $6
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(tax_year.id().as_uuid())
        .bind(tax_year.tenant_id().as_uuid())
        .bind(tax_year.year())
        .bind(tax_year.is_filed())
        .bind(tax_year.filing_date())
        .bind(tax_year.notes())
        .execute(&self.pool)
        .await
        .map_err(|e| unique_year_violation(e, tax_year.year(), "update tax year"))?;

        expect_row(result, "TaxYear", tax_year.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: TaxYearId,
    ) -> Result<Option<TaxYear>, DomainError> {
        self.fetch_one_where("id = $2", tenant_id, TaxYearKey::Id(*id.as_uuid()))
            .await
    }

    async fn find_by_year(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<Option<TaxYear>, DomainError> {
        self.fetch_one_where("year = $2", tenant_id, TaxYearKey::Year(year))
            .await
    }

    async fn exists(&self, tenant_id: TenantId, id: TaxYearId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tax_years WHERE tenant_id = $1 AND id = $2)",
        )
        .bind(tenant_id.as_uuid())
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check tax year"))
    }

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<TaxYear>, DomainError> {
        let sql = format!(
            "SELECT {} FROM tax_years WHERE tenant_id = $1 ORDER BY year DESC",
            TAX_YEAR_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list tax years"))?;

        rows.into_iter().map(row_to_tax_year).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: TaxYearId) -> Result<(), DomainError> {
        // Deductions go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM tax_years WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete tax year"))?;

        expect_row(result, "TaxYear", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Deductions
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresDeductionRepository {
    pool: PgPool,
}

impl PostgresDeductionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeductionRepository for PostgresDeductionRepository {
    async fn save(&self, deduction: &Deduction) -> Result<(), DomainError> {
        let d = deduction.details();
        sqlx::query(
            r#"
            INSERT INTO deductions (
                id, tenant_id, tax_year_id, description, amount, date, category,
                notes, has_receipt, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(deduction.id().as_uuid())
        .bind(deduction.tenant_id().as_uuid())
        .bind(d.tax_year_id.as_uuid())
        .bind(&d.description)
        .bind(d.amount)
        .bind(d.date)
        .bind(d.category.as_str())
        .bind(&d.notes)
        .bind(d.has_receipt)
        .bind(deduction.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert deduction"))?;

        Ok(())
    }

    async fn update(&self, deduction: &Deduction) -> Result<(), DomainError> {
        let d = deduction.details();
        let result = sqlx::query(
            r#"
            UPDATE deductions SET
                tax_year_id = $3,
                description = $4,
                amount = $5,
                date = $6,
                category = $7,
                notes = $8,
                has_receipt = $9
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(deduction.id().as_uuid())
        .bind(deduction.tenant_id().as_uuid())
        .bind(d.tax_year_id.as_uuid())
        .bind(&d.description)
        .bind(d.amount)
        .bind(d.date)
        .bind(d.category.as_str())
        .bind(&d.notes)
        .bind(d.has_receipt)
        .execute(&self.pool)
        .await
        .map_err(db_error("update deduction"))?;

        expect_row(result, "Deduction", deduction.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: DeductionId,
    ) -> Result<Option<Deduction>, DomainError> {
        let sql = format!(
            "SELECT {} FROM deductions WHERE tenant_id = $1 AND id = $2",
            DEDUCTION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch deduction"))?;

        row.map(row_to_deduction).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &DeductionFilter,
    ) -> Result<Vec<Deduction>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM deductions
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR tax_year_id = $2)
              AND ($3::text IS NULL OR category = $3)
              AND ($4::date IS NULL OR date >= $4)
              AND ($5::date IS NULL OR date <= $5)
            ORDER BY date DESC, created_at DESC
            "#,
            DEDUCTION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.tax_year_id.map(|t| *t.as_uuid()))
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list deductions"))?;

        rows.into_iter().map(row_to_deduction).collect()
    }

    async fn totals_by_tax_year(
        &self,
        tenant_id: TenantId,
    ) -> Result<HashMap<TaxYearId, DeductionTotals>, DomainError> {
        let rows = sqlx::query_as::<_, (Uuid, Decimal, i64)>(
            r#"
            SELECT tax_year_id, COALESCE(SUM(amount), 0), COUNT(*)
            FROM deductions
            WHERE tenant_id = $1
            GROUP BY tax_year_id
            "#,
        )
        .bind(tenant_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("total deductions"))?;

        rows.into_iter()
            .map(|(tax_year_id, total, count)| {
                let count = u32::try_from(count).map_err(|_| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Deduction count out of range: {}", count),
                    )
                })?;
                Ok((
                    TaxYearId::from_uuid(tax_year_id),
                    DeductionTotals { total, count },
                ))
            })
            .collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: DeductionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM deductions WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete deduction"))?;

        expect_row(result, "Deduction", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Maps the `(tenant_id, year)` unique index onto the same validation error
/// the handlers raise for duplicate years.
fn unique_year_violation(e: sqlx::Error, year: i32, action: &'static str) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::validation("year", format!("tax year {} already exists", year));
        }
    }
    db_error(action)(e)
}

fn row_to_tax_year(row: PgRow) -> Result<TaxYear, DomainError> {
    let details = TaxYearDetails {
        year: column(&row, "year")?,
        notes: column(&row, "notes")?,
    };

    Ok(TaxYear::reconstitute(
        TaxYearId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        column(&row, "is_filed")?,
        column(&row, "filing_date")?,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_deduction(row: PgRow) -> Result<Deduction, DomainError> {
    let details = DeductionDetails {
        tax_year_id: TaxYearId::from_uuid(column::<Uuid>(&row, "tax_year_id")?),
        description: column(&row, "description")?,
        amount: column(&row, "amount")?,
        date: column(&row, "date")?,
        category: text_column(&row, "category")?,
        notes: column(&row, "notes")?,
        has_receipt: column(&row, "has_receipt")?,
    };

    Ok(Deduction::reconstitute(
        DeductionId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}
