use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Approximate number of divisions between the padded bounds.
pub const TARGET_DIVISIONS: f64 = 6.0;
/// Smallest magnitude fed into the nice-number exponent.
pub const MIN_ROUGH_STEP: f64 = 0.1;
/// Minimum rendered bar height, so zero-ish returns stay visible.
pub const MIN_BAR_HEIGHT: f64 = 6.0;
pub const DEFAULT_BAR_MAX_HEIGHT: f64 = 170.0;

/// Relative band used when `+ 1` padding is absorbed by a huge value.
const DEGENERATE_BAND_RATIO: f64 = 1e-6;
const NICE_FRACTIONS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Axis bounds snapped to a 1/2/5 step grid.
///
/// `ticks` run from `max` down to `min`, rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks: SmallVec<[f64; 8]>,
}

impl AxisScale {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Rounds `rough_step` up to 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_step(rough_step: f64) -> f64 {
    let safe = if rough_step.is_finite() {
        rough_step.max(MIN_ROUGH_STEP)
    } else {
        MIN_ROUGH_STEP
    };
    let magnitude = 10f64.powi(safe.log10().floor() as i32);
    // Compared in step space so the chosen step never lands below `safe`.
    NICE_FRACTIONS
        .into_iter()
        .map(|candidate| candidate * magnitude)
        .find(|step| *step >= safe)
        .unwrap_or(10.0 * magnitude)
}

fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    // Avoid `-0` labels.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Computes a padded, zero-floored axis for `values`.
///
/// Empty input behaves like the range `[0, 1]`. Non-finite values are ignored.
#[must_use]
pub fn compute_scale(values: &[f64]) -> AxisScale {
    let finite = values.iter().copied().filter(|value| value.is_finite());
    let (raw_min, raw_max) = finite
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            Some((min, max)) => Some((min.min(value), max.max(value))),
            None => Some((value, value)),
        })
        .unwrap_or((0.0, 1.0));

    let mut padded_min = (raw_min - 1.0).max(0.0);
    let mut padded_max = raw_max + 1.0;
    if padded_max <= padded_min {
        // Entirely negative input, or magnitudes where `+ 1` is absorbed.
        let band = (padded_min * DEGENERATE_BAND_RATIO).max(1.0);
        padded_max = padded_min + band;
        if !padded_max.is_finite() {
            padded_max = padded_min;
            padded_min -= band;
        }
    }

    let step = nice_step((padded_max - padded_min) / TARGET_DIVISIONS);
    let min = (padded_min / step).floor() * step;
    let mut max = (padded_max / step).ceil() * step;
    if !max.is_finite() {
        // Largest finite multiple of `step`; bars above it are clamped.
        max = f64::MAX - f64::MAX % step;
    }

    let divisions = ((max - min) / step).round().max(1.0) as usize;
    let ticks = (0..=divisions)
        .map(|index| round_to_cents(max - index as f64 * step))
        .collect();

    AxisScale {
        min,
        max,
        step,
        ticks,
    }
}

/// Which return table the bar chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReturnsMode {
    #[default]
    PointToPoint,
    Sip,
}

/// One rendered bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnBar {
    pub label: String,
    pub value: f64,
    pub height: f64,
}

/// Scaled bars for the return-analysis chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnBarChart {
    pub mode: ReturnsMode,
    pub scale: AxisScale,
    pub bars: Vec<ReturnBar>,
}

/// Height of one bar for `value` against `scale`.
#[must_use]
pub fn bar_height(value: f64, scale: &AxisScale, max_height: f64) -> f64 {
    let clamped = value.clamp(scale.min, scale.max);
    let height = (clamped - scale.min) / scale.span().max(1.0) * max_height;
    height.max(MIN_BAR_HEIGHT)
}

impl ReturnBarChart {
    /// Builds bars from labelled rows in first-seen label order.
    ///
    /// Rows with non-finite values are excluded; a repeated label keeps its
    /// original position and takes the later value.
    #[must_use]
    pub fn build<I, S>(mode: ReturnsMode, rows: I, max_height: f64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut by_label: IndexMap<String, f64> = IndexMap::new();
        for (label, value) in rows {
            if value.is_finite() {
                by_label.insert(label.into(), value);
            }
        }

        let values: Vec<f64> = by_label.values().copied().collect();
        let scale = compute_scale(&values);
        let bars = by_label
            .into_iter()
            .map(|(label, value)| ReturnBar {
                height: bar_height(value, &scale, max_height),
                label,
                value,
            })
            .collect();

        Self { mode, scale, bars }
    }
}
