//! Row decoding and error mapping shared by the PostgreSQL repositories.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgQueryResult, PgRow};
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, ValidationError};

/// Maps a driver error onto `ErrorCode::DatabaseError`, naming the failed action.
pub(super) fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

/// Turns a zero-row `UPDATE`/`DELETE` into a not-found error.
pub(super) fn expect_row(
    result: PgQueryResult,
    resource: &str,
    id: impl fmt::Display,
) -> Result<(), DomainError> {
    if result.rows_affected() == 0 {
        return Err(DomainError::not_found(resource, id));
    }
    Ok(())
}

pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read column {}: {}", name, e),
        )
    })
}

pub(super) fn timestamp_column(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    column::<DateTime<Utc>>(row, name).map(Timestamp::from_datetime)
}

/// Reads a TEXT column holding one of the closed enum values.
pub(super) fn text_column<T>(row: &PgRow, name: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    let raw: String = column(row, name)?;
    parse_text(name, &raw)
}

pub(super) fn optional_text_column<T>(row: &PgRow, name: &str) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    let raw: Option<String> = column(row, name)?;
    raw.map(|value| parse_text(name, &value)).transpose()
}

fn parse_text<T>(name: &str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.parse().map_err(|e: ValidationError| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} stored in database: {}", name, e),
        )
    })
}
