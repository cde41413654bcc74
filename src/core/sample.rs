//! Parse-or-exclude boundary between loosely typed NAV feeds and the engine.
//!
//! Nothing downstream of [`prepare_samples`] sees a non-finite value or an
//! unparsable timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::{parse_decimal_text, parse_timestamp};
use crate::error::ChartError;

/// Feed value as it arrives: numbers and numeric strings are both common.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

/// One unvalidated history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNavRecord {
    #[serde(default, alias = "nav")]
    pub value: RawValue,
    #[serde(default, alias = "nav_date")]
    pub timestamp: Option<String>,
}

impl RawNavRecord {
    #[must_use]
    pub fn new(value: RawValue, timestamp: impl Into<String>) -> Self {
        Self {
            value,
            timestamp: Some(timestamp.into()),
        }
    }

    #[must_use]
    pub fn number(value: f64, timestamp: impl Into<String>) -> Self {
        Self::new(RawValue::Number(value), timestamp)
    }
}

/// Validated observation consumed by the chart engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    pub value: f64,
    pub timestamp: String,
    pub instant: DateTime<Utc>,
    pub raw_point: T,
}

/// Result of running a feed through [`prepare_samples`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries<T> {
    pub samples: Vec<Sample<T>>,
    pub excluded: Vec<ChartError>,
}

impl<T> PreparedSeries<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Resolves a raw value to a finite number, or `None` when it must be excluded.
#[must_use]
pub fn parse_value(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) if number.is_finite() => Some(*number),
        RawValue::Number(_) | RawValue::Missing => None,
        RawValue::Text(text) => parse_decimal_text(text, "value").ok(),
    }
}

fn prepare_record(
    index: usize,
    record: &RawNavRecord,
) -> Result<(f64, String, DateTime<Utc>), ChartError> {
    let value = parse_value(&record.value).ok_or_else(|| ChartError::InvalidRecord {
        index,
        reason: format!("value {:?} is not a finite number", record.value),
    })?;
    let timestamp = record
        .timestamp
        .as_deref()
        .ok_or_else(|| ChartError::InvalidRecord {
            index,
            reason: "timestamp is missing".to_owned(),
        })?;
    let instant = parse_timestamp(timestamp).ok_or_else(|| ChartError::InvalidRecord {
        index,
        reason: format!("timestamp `{timestamp}` is not a valid instant"),
    })?;
    Ok((value, timestamp.to_owned(), instant))
}

/// Converts every record into a sample or an exclusion, preserving order.
pub fn prepare_samples<I>(records: I) -> PreparedSeries<RawNavRecord>
where
    I: IntoIterator<Item = RawNavRecord>,
{
    let mut samples = Vec::new();
    let mut excluded = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match prepare_record(index, &record) {
            Ok((value, timestamp, instant)) => samples.push(Sample {
                value,
                timestamp,
                instant,
                raw_point: record,
            }),
            Err(err) => {
                warn!(index, error = %err, "excluding nav record");
                excluded.push(err);
            }
        }
    }

    debug!(
        prepared = samples.len(),
        excluded = excluded.len(),
        "prepared nav samples"
    );
    PreparedSeries { samples, excluded }
}

#[cfg(test)]
mod tests {
    use super::{RawNavRecord, RawValue, parse_value, prepare_samples};

    #[test]
    fn parse_value_accepts_numeric_text() {
        assert_eq!(parse_value(&RawValue::Text("12.5".to_owned())), Some(12.5));
        assert_eq!(parse_value(&RawValue::Number(f64::INFINITY)), None);
        assert_eq!(parse_value(&RawValue::Text("n/a".to_owned())), None);
        assert_eq!(parse_value(&RawValue::Missing), None);
    }

    #[test]
    fn json_feed_with_mixed_value_types_deserializes() {
        let feed = r#"[
            {"nav": 101.5, "nav_date": "2024-01-01"},
            {"nav": "102.25", "nav_date": "2024-01-02"},
            {"nav_date": "2024-01-03"}
        ]"#;
        let records: Vec<RawNavRecord> = serde_json::from_str(feed).expect("feed");
        let prepared = prepare_samples(records);

        assert_eq!(prepared.samples.len(), 2);
        assert_eq!(prepared.samples[1].value, 102.25);
        assert_eq!(prepared.excluded.len(), 1);
    }
}
