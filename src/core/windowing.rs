use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::core::sample::Sample;
use crate::error::ChartError;

/// History ranges offered under the NAV chart, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum DurationPreset {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "MAX")]
    Max,
}

impl DurationPreset {
    pub const ALL: [Self; 6] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::ThreeYears,
        Self::Max,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
            Self::Max => "MAX",
        }
    }

    /// Calendar-day lookback used when a feed does not supply its own.
    #[must_use]
    pub fn default_days(self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(91),
            Self::SixMonths => Some(182),
            Self::OneYear => Some(365),
            Self::ThreeYears => Some(1_095),
            Self::Max => None,
        }
    }
}

impl fmt::Display for DurationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationPreset {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let upper = input.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.label() == upper)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown duration `{input}`")))
    }
}

/// Presets named in `labels`, deduplicated and in canonical order.
#[must_use]
pub fn available_presets<'a, I>(labels: I) -> Vec<DurationPreset>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut presets: Vec<DurationPreset> = labels
        .into_iter()
        .filter_map(|label| label.parse().ok())
        .collect();
    presets.sort_unstable();
    presets.dedup();
    presets
}

/// `1Y` when offered, else the first offered preset, else `MAX`.
#[must_use]
pub fn default_preset(available: &[DurationPreset]) -> DurationPreset {
    if available.contains(&DurationPreset::OneYear) {
        return DurationPreset::OneYear;
    }
    available.first().copied().unwrap_or(DurationPreset::Max)
}

/// Samples within `days` of the latest sample, inclusive.
///
/// `None` keeps the whole series.
#[must_use]
pub fn samples_in_duration<T: Clone>(samples: &[Sample<T>], days: Option<u32>) -> Vec<Sample<T>> {
    let (Some(days), Some(last)) = (days, samples.last()) else {
        return samples.to_vec();
    };
    let start = last.instant - TimeDelta::days(i64::from(days));

    samples
        .iter()
        .filter(|sample| sample.instant >= start)
        .cloned()
        .collect()
}
