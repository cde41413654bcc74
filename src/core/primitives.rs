use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a textual number, accepting scientific notation as a fallback.
pub fn parse_decimal_text(input: &str, field_name: &str) -> ChartResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChartError::InvalidData(format!("{field_name} is empty")));
    }

    let decimal = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| ChartError::InvalidData(format!("{field_name} `{trimmed}`: {e}")))?;
    let value = decimal_to_f64(decimal, field_name)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

/// Parses the timestamp shapes seen in NAV feeds into a UTC instant.
///
/// Accepted: RFC 3339, `YYYY-MM-DD`, and naive `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
