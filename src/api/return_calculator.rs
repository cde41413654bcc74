use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CalculatorDuration, CalculatorMode, GrowthProjection, project};
use crate::error::ChartResult;

use super::ReturnCalculatorConfig;
use super::label_format::{format_currency_inr, format_percent};

/// Display strings for one projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionLabels {
    pub invested: String,
    pub estimated: String,
    pub gain_percent: String,
}

/// Stateful calculator driven by mode tabs, an amount slider and duration chips.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnCalculator {
    config: ReturnCalculatorConfig,
    mode: CalculatorMode,
    duration: CalculatorDuration,
    amount: f64,
}

impl ReturnCalculator {
    pub fn new(config: ReturnCalculatorConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            mode: config.mode,
            duration: config.duration,
            amount: config.slider.clamp_amount(config.default_amount),
            config,
        })
    }

    #[must_use]
    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CalculatorMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn duration(&self) -> CalculatorDuration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: CalculatorDuration) {
        self.duration = duration;
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Sets the amount, clamped into the slider range.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = self.config.slider.clamp_amount(amount);
    }

    /// Moves the slider thumb to `ratio` of the track. Returns whether the
    /// snapped amount changed.
    pub fn drag_slider_to(&mut self, ratio: f64) -> bool {
        let next = self.config.slider.amount_from_ratio(ratio);
        let changed = next != self.amount;
        if changed {
            trace!(amount = next, "slider amount changed");
            self.amount = next;
        }
        changed
    }

    /// Slider thumb position for the current amount, in `[0, 1]`.
    #[must_use]
    pub fn slider_ratio(&self) -> f64 {
        self.config.slider.ratio_from_amount(self.amount)
    }

    #[must_use]
    pub fn projection(&self) -> GrowthProjection {
        project(self.mode, self.amount, self.duration.years())
    }

    #[must_use]
    pub fn labels(&self) -> ProjectionLabels {
        let projection = self.projection();
        ProjectionLabels {
            invested: format_currency_inr(projection.invested),
            estimated: format_currency_inr(projection.estimated),
            gain_percent: format_percent(projection.gain_percent, 2),
        }
    }
}
