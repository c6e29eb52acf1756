//! PostgreSQL implementations of the billing context repositories.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::support::{
    column, db_error, expect_row, optional_text_column, text_column, timestamp_column,
};
use crate::domain::billing::{Bill, BillDetails, Payment, PaymentDetails};
use crate::domain::foundation::{BillId, DomainError, PaymentId, TenantId};
use crate::ports::{BillFilter, BillRepository, PaymentFilter, PaymentRepository};

const BILL_COLUMNS: &str = "id, tenant_id, name, payee, amount, due_date, billing_frequency, \
    status, notes, created_at";

const PAYMENT_COLUMNS: &str = "id, tenant_id, bill_id, amount, payment_date, payment_method, \
    confirmation_number, notes, created_at";

// ════════════════════════════════════════════════════════════════════════════
// Bills
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresBillRepository {
    pool: PgPool,
}

impl PostgresBillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillRepository for PostgresBillRepository {
    async fn save(&self, bill: &Bill) -> Result<(), DomainError> {
        let d = bill.details();
        sqlx::query(
            r#"
            INSERT INTO bills (
                id, tenant_id, name, payee, amount, due_date, billing_frequency,
                status, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(bill.id().as_uuid())
        .bind(bill.tenant_id().as_uuid())
        .bind(&d.name)
        .bind(&d.payee)
        .bind(d.amount)
        .bind(d.due_date)
        .bind(d.billing_frequency.as_str())
        .bind(d.status.as_str())
        .bind(&d.notes)
        .bind(bill.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert bill"))?;

        Ok(())
    }

    async fn update(&self, bill: &Bill) -> Result<(), DomainError> {
        let d = bill.details();
        let result = sqlx::query(
            r#"
            UPDATE bills SET
                name = $3,
                payee = $4,
                amount = $5,
                due_date = $6,
                billing_frequency = $7,
                status = $8,
                notes = $9
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(bill.id().as_uuid())
        .bind(bill.tenant_id().as_uuid())
        .bind(&d.name)
        .bind(&d.payee)
        .bind(d.amount)
        .bind(d.due_date)
        .bind(d.billing_frequency.as_str())
        .bind(d.status.as_str())
        .bind(&d.notes)
        .execute(&self.pool)
        .await
        .map_err(db_error("update bill"))?;

        expect_row(result, "Bill", bill.id())
    }

    async fn find_by_id(&self, tenant_id: TenantId, id: BillId) -> Result<Option<Bill>, DomainError> {
        let sql = format!(
            "SELECT {} FROM bills WHERE tenant_id = $1 AND id = $2",
            BILL_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch bill"))?;

        row.map(row_to_bill).transpose()
    }

    async fn exists(&self, tenant_id: TenantId, id: BillId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bills WHERE tenant_id = $1 AND id = $2)",
        )
        .bind(tenant_id.as_uuid())
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check bill"))
    }

    async fn list(&self, tenant_id: TenantId, filter: &BillFilter) -> Result<Vec<Bill>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM bills
            WHERE tenant_id = $1
              AND ($2::text IS NULL OR status = $2)
              AND ($3::date IS NULL OR due_date >= $3)
              AND ($4::date IS NULL OR due_date <= $4)
            ORDER BY due_date ASC, created_at ASC
            "#,
            BILL_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.due_from)
            .bind(filter.due_to)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list bills"))?;

        rows.into_iter().map(row_to_bill).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: BillId) -> Result<(), DomainError> {
        // Payments go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM bills WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete bill"))?;

        expect_row(result, "Bill", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Payments
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
        let d = payment.details();
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, tenant_id, bill_id, amount, payment_date, payment_method,
                confirmation_number, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(payment.id().as_uuid())
        .bind(payment.tenant_id().as_uuid())
        .bind(d.bill_id.as_uuid())
        .bind(d.amount)
        .bind(d.payment_date)
        .bind(d.payment_method.map(|m| m.as_str()))
        .bind(&d.confirmation_number)
        .bind(&d.notes)
        .bind(payment.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert payment"))?;

        Ok(())
    }

    async fn update(&self, payment: &Payment) -> Result<(), DomainError> {
        let d = payment.details();
        let result = sqlx::query(
            r#"
            UPDATE payments SET
                bill_id = $3,
                amount = $4,
                payment_date = $5,
                payment_method = $6,
                confirmation_number = $7,
                notes = $8
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(payment.id().as_uuid())
        .bind(payment.tenant_id().as_uuid())
        .bind(d.bill_id.as_uuid())
        .bind(d.amount)
        .bind(d.payment_date)
        .bind(d.payment_method.map(|m| m.as_str()))
        .bind(&d.confirmation_number)
        .bind(&d.notes)
        .execute(&self.pool)
        .await
        .map_err(db_error("update payment"))?;

        expect_row(result, "Payment", payment.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: PaymentId,
    ) -> Result<Option<Payment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payments WHERE tenant_id = $1 AND id = $2",
            PAYMENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch payment"))?;

        row.map(row_to_payment).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &PaymentFilter,
    ) -> Result<Vec<Payment>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM payments
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR bill_id = $2)
              AND ($3::date IS NULL OR payment_date >= $3)
              AND ($4::date IS NULL OR payment_date <= $4)
            ORDER BY payment_date DESC, created_at DESC
            "#,
            PAYMENT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.bill_id.map(|b| *b.as_uuid()))
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list payments"))?;

        rows.into_iter().map(row_to_payment).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: PaymentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM payments WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete payment"))?;

        expect_row(result, "Payment", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_bill(row: PgRow) -> Result<Bill, DomainError> {
    let details = BillDetails {
        name: column(&row, "name")?,
        payee: column(&row, "payee")?,
        amount: column(&row, "amount")?,
        due_date: column(&row, "due_date")?,
        billing_frequency: text_column(&row, "billing_frequency")?,
        status: text_column(&row, "status")?,
        notes: column(&row, "notes")?,
    };

    Ok(Bill::reconstitute(
        BillId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_payment(row: PgRow) -> Result<Payment, DomainError> {
    let details = PaymentDetails {
        bill_id: BillId::from_uuid(column::<Uuid>(&row, "bill_id")?),
        amount: column(&row, "amount")?,
        payment_date: column(&row, "payment_date")?,
        payment_method: optional_text_column(&row, "payment_method")?,
        confirmation_number: column(&row, "confirmation_number")?,
        notes: column(&row, "notes")?,
    };

    Ok(Payment::reconstitute(
        PaymentId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}
