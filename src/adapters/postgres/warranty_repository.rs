//! PostgreSQL implementations of the warranty context repositories.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::support::{column, db_error, expect_row, text_column, timestamp_column};
use crate::domain::foundation::{
    ApplianceId, DomainError, ManualId, ServiceRecordId, TenantId, UserId, WarrantyId,
};
use crate::domain::warranty::{
    Appliance, ApplianceDetails, Manual, ManualDetails, ServiceRecord, ServiceRecordDetails,
    Warranty, WarrantyDetails,
};
use crate::ports::{
    ApplianceFilter, ApplianceRepository, ManualFilter, ManualRepository, ServiceRecordFilter,
    ServiceRecordRepository, WarrantyFilter, WarrantyRepository,
};

const APPLIANCE_COLUMNS: &str = "id, tenant_id, user_id, name, appliance_type, brand, \
    model_number, serial_number, purchase_date, purchase_price, created_at";

const WARRANTY_COLUMNS: &str = "id, tenant_id, appliance_id, provider, start_date, end_date, \
    coverage_details, document_url, created_at";

const MANUAL_COLUMNS: &str = "id, tenant_id, appliance_id, title, file_url, file_type, created_at";

const SERVICE_RECORD_COLUMNS: &str = "id, tenant_id, appliance_id, service_date, \
    service_provider, description, cost, created_at";

// ════════════════════════════════════════════════════════════════════════════
// Appliances
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresApplianceRepository {
    pool: PgPool,
}

impl PostgresApplianceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplianceRepository for PostgresApplianceRepository {
    async fn save(&self, appliance: &Appliance) -> Result<(), DomainError> {
        let d = appliance.details();
        sqlx::query(
            r#"
            INSERT INTO appliances (
                id, tenant_id, user_id, name, appliance_type, brand, model_number,
                serial_number, purchase_date, purchase_price, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(appliance.id().as_uuid())
        .bind(appliance.tenant_id().as_uuid())
        .bind(appliance.user_id().as_uuid())
        .bind(&d.name)
        .bind(d.appliance_type.as_str())
        .bind(&d.brand)
        .bind(&d.model_number)
        .bind(&d.serial_number)
        .bind(d.purchase_date)
        .bind(d.purchase_price)
        .bind(appliance.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert appliance"))?;

        Ok(())
    }

    async fn update(&self, appliance: &Appliance) -> Result<(), DomainError> {
        let d = appliance.details();
        let result = sqlx::query(
            r#"
            UPDATE appliances SET
                name = $3,
                appliance_type = $4,
                brand = $5,
                model_number = $6,
                serial_number = $7,
                purchase_date = $8,
                purchase_price = $9
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(appliance.id().as_uuid())
        .bind(appliance.tenant_id().as_uuid())
        .bind(&d.name)
        .bind(d.appliance_type.as_str())
        .bind(&d.brand)
        .bind(&d.model_number)
        .bind(&d.serial_number)
        .bind(d.purchase_date)
        .bind(d.purchase_price)
        .execute(&self.pool)
        .await
        .map_err(db_error("update appliance"))?;

        expect_row(result, "Appliance", appliance.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ApplianceId,
    ) -> Result<Option<Appliance>, DomainError> {
        let sql = format!(
            "SELECT {} FROM appliances WHERE tenant_id = $1 AND id = $2",
            APPLIANCE_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch appliance"))?;

        row.map(row_to_appliance).transpose()
    }

    async fn exists(&self, tenant_id: TenantId, id: ApplianceId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM appliances WHERE tenant_id = $1 AND id = $2)",
        )
        .bind(tenant_id.as_uuid())
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check appliance"))
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ApplianceFilter,
    ) -> Result<Vec<Appliance>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM appliances
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR user_id = $2)
              AND ($3::text IS NULL OR appliance_type = $3)
            ORDER BY name ASC, created_at ASC
            "#,
            APPLIANCE_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.user_id.map(|u| *u.as_uuid()))
            .bind(filter.appliance_type.map(|t| t.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list appliances"))?;

        rows.into_iter().map(row_to_appliance).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: ApplianceId) -> Result<(), DomainError> {
        // Child rows go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM appliances WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete appliance"))?;

        expect_row(result, "Appliance", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Warranties
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresWarrantyRepository {
    pool: PgPool,
}

impl PostgresWarrantyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarrantyRepository for PostgresWarrantyRepository {
    async fn save(&self, warranty: &Warranty) -> Result<(), DomainError> {
        let d = warranty.details();
        sqlx::query(
            r#"
            INSERT INTO warranties (
                id, tenant_id, appliance_id, provider, start_date, end_date,
                coverage_details, document_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(warranty.id().as_uuid())
        .bind(warranty.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(&d.provider)
        .bind(d.start_date)
        .bind(d.end_date)
        .bind(&d.coverage_details)
        .bind(&d.document_url)
        .bind(warranty.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert warranty"))?;

        Ok(())
    }

    async fn update(&self, warranty: &Warranty) -> Result<(), DomainError> {
        let d = warranty.details();
        let result = sqlx::query(
            r#"
            UPDATE warranties SET
                appliance_id = $3,
                provider = $4,
                start_date = $5,
                end_date = $6,
                coverage_details = $7,
                document_url = $8
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(warranty.id().as_uuid())
        .bind(warranty.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(&d.provider)
        .bind(d.start_date)
        .bind(d.end_date)
        .bind(&d.coverage_details)
        .bind(&d.document_url)
        .execute(&self.pool)
        .await
        .map_err(db_error("update warranty"))?;

        expect_row(result, "Warranty", warranty.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: WarrantyId,
    ) -> Result<Option<Warranty>, DomainError> {
        let sql = format!(
            "SELECT {} FROM warranties WHERE tenant_id = $1 AND id = $2",
            WARRANTY_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch warranty"))?;

        row.map(row_to_warranty).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &WarrantyFilter,
    ) -> Result<Vec<Warranty>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM warranties
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR appliance_id = $2)
              AND ($3::date IS NULL OR (
                    (start_date IS NULL OR start_date <= $3)
                AND (end_date IS NULL OR end_date >= $3)))
            ORDER BY end_date ASC NULLS LAST, created_at ASC
            "#,
            WARRANTY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.appliance_id.map(|a| *a.as_uuid()))
            .bind(filter.active_on)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list warranties"))?;

        rows.into_iter().map(row_to_warranty).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: WarrantyId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM warranties WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete warranty"))?;

        expect_row(result, "Warranty", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Manuals
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresManualRepository {
    pool: PgPool,
}

impl PostgresManualRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManualRepository for PostgresManualRepository {
    async fn save(&self, manual: &Manual) -> Result<(), DomainError> {
        let d = manual.details();
        sqlx::query(
            r#"
            INSERT INTO manuals (id, tenant_id, appliance_id, title, file_url, file_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(manual.id().as_uuid())
        .bind(manual.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(&d.title)
        .bind(&d.file_url)
        .bind(&d.file_type)
        .bind(manual.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert manual"))?;

        Ok(())
    }

    async fn update(&self, manual: &Manual) -> Result<(), DomainError> {
        let d = manual.details();
        let result = sqlx::query(
            r#"
            UPDATE manuals SET
                appliance_id = $3,
                title = $4,
                file_url = $5,
                file_type = $6
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(manual.id().as_uuid())
        .bind(manual.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(&d.title)
        .bind(&d.file_url)
        .bind(&d.file_type)
        .execute(&self.pool)
        .await
        .map_err(db_error("update manual"))?;

        expect_row(result, "Manual", manual.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ManualId,
    ) -> Result<Option<Manual>, DomainError> {
        let sql = format!(
            "SELECT {} FROM manuals WHERE tenant_id = $1 AND id = $2",
            MANUAL_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch manual"))?;

        row.map(row_to_manual).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ManualFilter,
    ) -> Result<Vec<Manual>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM manuals
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR appliance_id = $2)
            ORDER BY title ASC, created_at ASC
            "#,
            MANUAL_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.appliance_id.map(|a| *a.as_uuid()))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list manuals"))?;

        rows.into_iter().map(row_to_manual).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: ManualId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM manuals WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete manual"))?;

        expect_row(result, "Manual", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Service records
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresServiceRecordRepository {
    pool: PgPool,
}

impl PostgresServiceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRecordRepository for PostgresServiceRecordRepository {
    async fn save(&self, record: &ServiceRecord) -> Result<(), DomainError> {
        let d = record.details();
        sqlx::query(
            r#"
            INSERT INTO service_records (
                id, tenant_id, appliance_id, service_date, service_provider,
                description, cost, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(d.service_date)
        .bind(&d.service_provider)
        .bind(&d.description)
        .bind(d.cost)
        .bind(record.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert service record"))?;

        Ok(())
    }

    async fn update(&self, record: &ServiceRecord) -> Result<(), DomainError> {
        let d = record.details();
        let result = sqlx::query(
            r#"
            UPDATE service_records SET
                appliance_id = $3,
                service_date = $4,
                service_provider = $5,
                description = $6,
                cost = $7
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.tenant_id().as_uuid())
        .bind(d.appliance_id.as_uuid())
        .bind(d.service_date)
        .bind(&d.service_provider)
        .bind(&d.description)
        .bind(d.cost)
        .execute(&self.pool)
        .await
        .map_err(db_error("update service record"))?;

        expect_row(result, "ServiceRecord", record.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ServiceRecordId,
    ) -> Result<Option<ServiceRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM service_records WHERE tenant_id = $1 AND id = $2",
            SERVICE_RECORD_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch service record"))?;

        row.map(row_to_service_record).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ServiceRecordFilter,
    ) -> Result<Vec<ServiceRecord>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM service_records
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR appliance_id = $2)
              AND ($3::date IS NULL OR service_date >= $3)
              AND ($4::date IS NULL OR service_date <= $4)
            ORDER BY service_date DESC, created_at DESC
            "#,
            SERVICE_RECORD_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.appliance_id.map(|a| *a.as_uuid()))
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list service records"))?;

        rows.into_iter().map(row_to_service_record).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: ServiceRecordId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM service_records WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete service record"))?;

        expect_row(result, "ServiceRecord", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_appliance(row: PgRow) -> Result<Appliance, DomainError> {
    let details = ApplianceDetails {
        name: column(&row, "name")?,
        appliance_type: text_column(&row, "appliance_type")?,
        brand: column(&row, "brand")?,
        model_number: column(&row, "model_number")?,
        serial_number: column(&row, "serial_number")?,
        purchase_date: column(&row, "purchase_date")?,
        purchase_price: column(&row, "purchase_price")?,
    };

    Ok(Appliance::reconstitute(
        ApplianceId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        UserId::from_uuid(column::<Uuid>(&row, "user_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_warranty(row: PgRow) -> Result<Warranty, DomainError> {
    let details = WarrantyDetails {
        appliance_id: ApplianceId::from_uuid(column::<Uuid>(&row, "appliance_id")?),
        provider: column(&row, "provider")?,
        start_date: column(&row, "start_date")?,
        end_date: column(&row, "end_date")?,
        coverage_details: column(&row, "coverage_details")?,
        document_url: column(&row, "document_url")?,
    };

    Ok(Warranty::reconstitute(
        WarrantyId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_manual(row: PgRow) -> Result<Manual, DomainError> {
    let details = ManualDetails {
        appliance_id: ApplianceId::from_uuid(column::<Uuid>(&row, "appliance_id")?),
        title: column(&row, "title")?,
        file_url: column(&row, "file_url")?,
        file_type: column(&row, "file_type")?,
    };

    Ok(Manual::reconstitute(
        ManualId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_service_record(row: PgRow) -> Result<ServiceRecord, DomainError> {
    let details = ServiceRecordDetails {
        appliance_id: ApplianceId::from_uuid(column::<Uuid>(&row, "appliance_id")?),
        service_date: column(&row, "service_date")?,
        service_provider: column(&row, "service_provider")?,
        description: column(&row, "description")?,
        cost: column(&row, "cost")?,
    };

    Ok(ServiceRecord::reconstitute(
        ServiceRecordId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}
