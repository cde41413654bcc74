#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::sample::Sample;
use crate::core::types::{ScreenPoint, Viewport};

/// Observed value range of one series, with the flat-series fallback applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), &value| {
                (min.min(value), max.max(value))
            });
        Some(Self { min, max })
    }

    /// Span used as the normalizing divisor; `1.0` when the series is flat.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }

    /// Position of `value` within the range, `0.0` at `min` and `1.0` at `max`.
    ///
    /// Ranges wider than `f64::MAX` are normalized on halved operands.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if (self.max - self.min).is_finite() {
            return (value - self.min) / self.span();
        }
        let half_min = self.min / 2.0;
        (value / 2.0 - half_min) / (self.max / 2.0 - half_min)
    }
}

/// Index-to-x and value-to-y mapping for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    range: ValueRange,
    len: usize,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(viewport: Viewport, range: ValueRange, len: usize) -> Self {
        Self {
            viewport,
            range,
            len,
        }
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    /// Single-sample series map onto the left padding edge.
    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        let denominator = self.len.saturating_sub(1).max(1) as f64;
        self.viewport.padding + (index as f64 / denominator) * self.viewport.inner_width()
    }

    /// Screen y grows downward, so larger values produce smaller y.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.viewport.height
            - self.viewport.padding
            - self.range.normalize(value) * self.viewport.inner_height()
    }

    #[must_use]
    pub fn map(self, index: usize, value: f64) -> ScreenPoint {
        ScreenPoint::new(self.index_to_x(index), self.value_to_y(value))
    }
}

/// Maps plain values to screen space. Empty input maps to an empty vector.
#[must_use]
pub fn map_values_to_screen(values: &[f64], viewport: Viewport) -> Vec<ScreenPoint> {
    let Some(range) = ValueRange::of(values) else {
        return Vec::new();
    };
    let mapper = CoordinateMapper::new(viewport, range, values.len());

    #[cfg(feature = "parallel-projection")]
    {
        values
            .par_iter()
            .enumerate()
            .map(|(index, &value)| mapper.map(index, value))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| mapper.map(index, value))
            .collect()
    }
}

/// Maps samples to screen space using their values and positions.
#[must_use]
pub fn map_to_screen<T>(samples: &[Sample<T>], viewport: Viewport) -> Vec<ScreenPoint> {
    let values: Vec<f64> = samples.iter().map(|sample| sample.value).collect();
    map_values_to_screen(&values, viewport)
}
