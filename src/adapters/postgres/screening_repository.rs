//! PostgreSQL implementations of the screening context repositories.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::support::{column, db_error, expect_row, text_column, timestamp_column};
use crate::domain::foundation::{
    AppointmentId, DomainError, ErrorCode, ReminderId, ScreeningId, TenantId, UserId,
};
use crate::domain::screening::{
    Appointment, AppointmentDetails, Reminder, ReminderDetails, Screening, ScreeningDetails,
};
use crate::ports::{
    AppointmentFilter, AppointmentRepository, ReminderFilter, ReminderRepository,
    ScreeningFilter, ScreeningRepository,
};

const SCREENING_COLUMNS: &str = "id, tenant_id, user_id, screening_type, name, \
    recommended_frequency_months, last_screening_date, next_due_date, provider, notes, created_at";

const APPOINTMENT_COLUMNS: &str = "id, tenant_id, user_id, screening_id, appointment_date, \
    location, provider, notes, is_completed, created_at";

const REMINDER_COLUMNS: &str =
    "id, tenant_id, user_id, screening_id, reminder_date, message, is_sent, created_at";

// ════════════════════════════════════════════════════════════════════════════
// Screenings
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresScreeningRepository {
    pool: PgPool,
}

impl PostgresScreeningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScreeningRepository for PostgresScreeningRepository {
    async fn save(&self, screening: &Screening) -> Result<(), DomainError> {
        let d = screening.details();
        sqlx::query(
            r#"
            INSERT INTO screenings (
                id, tenant_id, user_id, screening_type, name, recommended_frequency_months,
                last_screening_date, next_due_date, provider, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(screening.id().as_uuid())
        .bind(screening.tenant_id().as_uuid())
        .bind(screening.user_id().as_uuid())
        .bind(d.screening_type.as_str())
        .bind(&d.name)
        .bind(months_to_db(d.recommended_frequency_months)?)
        .bind(d.last_screening_date)
        .bind(d.next_due_date)
        .bind(&d.provider)
        .bind(&d.notes)
        .bind(screening.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert screening"))?;

        Ok(())
    }

    async fn update(&self, screening: &Screening) -> Result<(), DomainError> {
        let d = screening.details();
        let result = sqlx::query(
            r#"
            UPDATE screenings SET
                screening_type = $3,
                name = $4,
                recommended_frequency_months = $5,
                last_screening_date = $6,
                next_due_date = $7,
                provider = $8,
                notes = $9
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(screening.id().as_uuid())
        .bind(screening.tenant_id().as_uuid())
        .bind(d.screening_type.as_str())
        .bind(&d.name)
        .bind(months_to_db(d.recommended_frequency_months)?)
        .bind(d.last_screening_date)
        .bind(d.next_due_date)
        .bind(&d.provider)
        .bind(&d.notes)
        .execute(&self.pool)
        .await
        .map_err(db_error("update screening"))?;

        expect_row(result, "Screening", screening.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ScreeningId,
    ) -> Result<Option<Screening>, DomainError> {
        let sql = format!(
            "SELECT {} FROM screenings WHERE tenant_id = $1 AND id = $2",
            SCREENING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch screening"))?;

        row.map(row_to_screening).transpose()
    }

    async fn exists(&self, tenant_id: TenantId, id: ScreeningId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM screenings WHERE tenant_id = $1 AND id = $2)",
        )
        .bind(tenant_id.as_uuid())
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check screening"))
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ScreeningFilter,
    ) -> Result<Vec<Screening>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM screenings
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR user_id = $2)
              AND ($3::text IS NULL OR screening_type = $3)
              AND ($4::date IS NULL OR next_due_date <= $4)
            ORDER BY next_due_date ASC NULLS LAST, name ASC, created_at ASC
            "#,
            SCREENING_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.user_id.map(|u| *u.as_uuid()))
            .bind(filter.screening_type.map(|t| t.as_str()))
            .bind(filter.due_by)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list screenings"))?;

        rows.into_iter().map(row_to_screening).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: ScreeningId) -> Result<(), DomainError> {
        // Appointments and reminders go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM screenings WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete screening"))?;

        expect_row(result, "Screening", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Appointments
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn save(&self, appointment: &Appointment) -> Result<(), DomainError> {
        let d = appointment.details();
        sqlx::query(
            r#"
            INSERT INTO appointments (
                id, tenant_id, user_id, screening_id, appointment_date,
                location, provider, notes, is_completed, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(appointment.id().as_uuid())
        .bind(appointment.tenant_id().as_uuid())
        .bind(appointment.user_id().as_uuid())
        .bind(d.screening_id.as_uuid())
        .bind(d.appointment_date.as_datetime())
        .bind(&d.location)
        .bind(&d.provider)
        .bind(&d.notes)
        .bind(appointment.is_completed())
        .bind(appointment.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert appointment"))?;

        Ok(())
    }

    async fn update(&self, appointment: &Appointment) -> Result<(), DomainError> {
        let d = appointment.details();
        let result = sqlx::query(
            r#"
            UPDATE appointments SET
                screening_id = $3,
                appointment_date = $4,
                location = $5,
                provider = $6,
                notes = $7,
                is_completed = $8
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(appointment.id().as_uuid())
        .bind(appointment.tenant_id().as_uuid())
        .bind(d.screening_id.as_uuid())
        .bind(d.appointment_date.as_datetime())
        .bind(&d.location)
        .bind(&d.provider)
        .bind(&d.notes)
        .bind(appointment.is_completed())
        .execute(&self.pool)
        .await
        .map_err(db_error("update appointment"))?;

        expect_row(result, "Appointment", appointment.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM appointments WHERE tenant_id = $1 AND id = $2",
            APPOINTMENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch appointment"))?;

        row.map(row_to_appointment).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM appointments
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR user_id = $2)
              AND ($3::uuid IS NULL OR screening_id = $3)
              AND ($4::timestamptz IS NULL OR appointment_date >= $4)
              AND ($5::timestamptz IS NULL OR appointment_date <= $5)
              AND ($6::boolean IS NULL OR is_completed = $6)
            ORDER BY appointment_date ASC, created_at ASC
            "#,
            APPOINTMENT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.user_id.map(|u| *u.as_uuid()))
            .bind(filter.screening_id.map(|s| *s.as_uuid()))
            .bind(filter.from.map(|t| *t.as_datetime()))
            .bind(filter.to.map(|t| *t.as_datetime()))
            .bind(filter.completed)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list appointments"))?;

        rows.into_iter().map(row_to_appointment).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: AppointmentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM appointments WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete appointment"))?;

        expect_row(result, "Appointment", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Reminders
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresReminderRepository {
    pool: PgPool,
}

impl PostgresReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderRepository for PostgresReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let d = reminder.details();
        sqlx::query(
            r#"
            INSERT INTO reminders (
                id, tenant_id, user_id, screening_id, reminder_date, message, is_sent, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reminder.id().as_uuid())
        .bind(reminder.tenant_id().as_uuid())
        .bind(reminder.user_id().as_uuid())
        .bind(d.screening_id.as_uuid())
        .bind(d.reminder_date)
        .bind(&d.message)
        .bind(reminder.is_sent())
        .bind(reminder.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert reminder"))?;

        Ok(())
    }

    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let d = reminder.details();
        let result = sqlx::query(
            r#"
            UPDATE reminders SET
                screening_id = $3,
                reminder_date = $4,
                message = $5,
                is_sent = $6
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(reminder.id().as_uuid())
        .bind(reminder.tenant_id().as_uuid())
        .bind(d.screening_id.as_uuid())
        .bind(d.reminder_date)
        .bind(&d.message)
        .bind(reminder.is_sent())
        .execute(&self.pool)
        .await
        .map_err(db_error("update reminder"))?;

        expect_row(result, "Reminder", reminder.id())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ReminderId,
    ) -> Result<Option<Reminder>, DomainError> {
        let sql = format!(
            "SELECT {} FROM reminders WHERE tenant_id = $1 AND id = $2",
            REMINDER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch reminder"))?;

        row.map(row_to_reminder).transpose()
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ReminderFilter,
    ) -> Result<Vec<Reminder>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM reminders
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR user_id = $2)
              AND ($3::uuid IS NULL OR screening_id = $3)
              AND ($4::boolean IS NULL OR is_sent = $4)
              AND ($5::date IS NULL OR (NOT is_sent AND reminder_date <= $5))
            ORDER BY reminder_date ASC, created_at ASC
            "#,
            REMINDER_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_uuid())
            .bind(filter.user_id.map(|u| *u.as_uuid()))
            .bind(filter.screening_id.map(|s| *s.as_uuid()))
            .bind(filter.is_sent)
            .bind(filter.due_on)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list reminders"))?;

        rows.into_iter().map(row_to_reminder).collect()
    }

    async fn delete(&self, tenant_id: TenantId, id: ReminderId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM reminders WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete reminder"))?;

        expect_row(result, "Reminder", id)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn months_to_db(months: u32) -> Result<i32, DomainError> {
    i32::try_from(months).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Screening frequency out of range: {}", months),
        )
    })
}

fn months_from_db(months: i32) -> Result<u32, DomainError> {
    u32::try_from(months).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative screening frequency stored: {}", months),
        )
    })
}

fn row_to_screening(row: PgRow) -> Result<Screening, DomainError> {
    let details = ScreeningDetails {
        screening_type: text_column(&row, "screening_type")?,
        name: column(&row, "name")?,
        recommended_frequency_months: months_from_db(column(&row, "recommended_frequency_months")?)?,
        last_screening_date: column(&row, "last_screening_date")?,
        next_due_date: column(&row, "next_due_date")?,
        provider: column(&row, "provider")?,
        notes: column(&row, "notes")?,
    };

    Ok(Screening::reconstitute(
        ScreeningId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        UserId::from_uuid(column::<Uuid>(&row, "user_id")?),
        details,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_appointment(row: PgRow) -> Result<Appointment, DomainError> {
    let details = AppointmentDetails {
        screening_id: ScreeningId::from_uuid(column::<Uuid>(&row, "screening_id")?),
        appointment_date: timestamp_column(&row, "appointment_date")?,
        location: column(&row, "location")?,
        provider: column(&row, "provider")?,
        notes: column(&row, "notes")?,
    };

    Ok(Appointment::reconstitute(
        AppointmentId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        UserId::from_uuid(column::<Uuid>(&row, "user_id")?),
        details,
        column(&row, "is_completed")?,
        timestamp_column(&row, "created_at")?,
    ))
}

fn row_to_reminder(row: PgRow) -> Result<Reminder, DomainError> {
    let details = ReminderDetails {
        screening_id: ScreeningId::from_uuid(column::<Uuid>(&row, "screening_id")?),
        reminder_date: column(&row, "reminder_date")?,
        message: column(&row, "message")?,
    };

    Ok(Reminder::reconstitute(
        ReminderId::from_uuid(column::<Uuid>(&row, "id")?),
        TenantId::from_uuid(column::<Uuid>(&row, "tenant_id")?),
        UserId::from_uuid(column::<Uuid>(&row, "user_id")?),
        details,
        column(&row, "is_sent")?,
        timestamp_column(&row, "created_at")?,
    ))
}
