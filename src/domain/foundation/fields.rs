//! Field-level validation shared by every record type.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::ValidationError;

/// Trims a required string and enforces a maximum length in characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = trimmed.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional string; blank input becomes `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let len = trimmed.chars().count();
            if len > max {
                return Err(ValidationError::too_long(field, max, len));
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}

/// Decimal places a stored amount may carry (`NUMERIC(12, 2)`).
pub const AMOUNT_SCALE: u32 = 2;

/// Largest amount a `NUMERIC(12, 2)` column holds.
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, AMOUNT_SCALE)
}

/// Amounts must fit the money columns exactly: no rounding on insert.
fn storable_amount(field: &str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(ValidationError::invalid_format(
            field,
            "must have at most 2 decimal places",
        ));
    }
    if amount.abs() > max_amount() {
        return Err(ValidationError::invalid_format(
            field,
            format!("must not exceed {}", max_amount()),
        ));
    }
    Ok(amount)
}

pub fn positive_amount(field: &str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::invalid_format(field, "must be greater than zero"));
    }
    storable_amount(field, amount)
}

pub fn non_negative_amount(field: &str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::invalid_format(field, "must not be negative"));
    }
    storable_amount(field, amount)
}

/// Sums amounts, or `None` once the total leaves `Decimal`'s range.
pub fn checked_total(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

/// Rejects a range whose end precedes its start. Open bounds always pass.
pub fn ordered_dates(
    field: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ValidationError::invalid_format(
                field,
                "end date must not precede start date",
            ));
        }
    }
    Ok(())
}

/// Inclusive date-range membership with open bounds.
pub fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}
