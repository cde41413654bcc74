use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed nominal annual return used for projections.
pub const ANNUAL_RETURN: f64 = 0.12;

/// Projected outcome of an investment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub invested: f64,
    pub estimated: f64,
    pub gain_percent: f64,
}

impl GrowthProjection {
    fn new(invested: f64, estimated: f64) -> Self {
        Self {
            invested,
            estimated,
            gain_percent: (estimated - invested) / invested * 100.0,
        }
    }
}

/// Lump-sum compounded annually.
#[must_use]
pub fn one_time(amount: f64, years: f64) -> GrowthProjection {
    GrowthProjection::new(amount, amount * (1.0 + ANNUAL_RETURN).powf(years))
}

/// Monthly contributions compounded monthly, each paid at the start of its
/// period (annuity-due).
#[must_use]
pub fn recurring(monthly_amount: f64, years: f64) -> GrowthProjection {
    let months = years * 12.0;
    let monthly_rate = ANNUAL_RETURN / 12.0;
    let growth = (1.0 + monthly_rate).powf(months);
    let estimated = monthly_amount * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate);
    GrowthProjection::new(monthly_amount * months, estimated)
}

fn validate_plan(amount: f64, years: f64) -> ChartResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ChartError::InvalidData(
            "investment amount must be finite and > 0".to_owned(),
        ));
    }
    if !years.is_finite() || years <= 0.0 {
        return Err(ChartError::InvalidData(
            "investment duration must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub fn try_one_time(amount: f64, years: f64) -> ChartResult<GrowthProjection> {
    validate_plan(amount, years)?;
    Ok(one_time(amount, years))
}

pub fn try_recurring(monthly_amount: f64, years: f64) -> ChartResult<GrowthProjection> {
    validate_plan(monthly_amount, years)?;
    Ok(recurring(monthly_amount, years))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalculatorMode {
    #[default]
    Recurring,
    OneTime,
}

#[must_use]
pub fn project(mode: CalculatorMode, amount: f64, years: f64) -> GrowthProjection {
    match mode {
        CalculatorMode::Recurring => recurring(amount, years),
        CalculatorMode::OneTime => one_time(amount, years),
    }
}

/// Horizon choices offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalculatorDuration {
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl CalculatorDuration {
    pub const ALL: [Self; 6] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::ThreeYears,
        Self::FiveYears,
    ];

    #[must_use]
    pub fn years(self) -> f64 {
        match self {
            Self::OneMonth => 1.0 / 12.0,
            Self::ThreeMonths => 0.25,
            Self::SixMonths => 0.5,
            Self::OneYear => 1.0,
            Self::ThreeYears => 3.0,
            Self::FiveYears => 5.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
            Self::FiveYears => "5Y",
        }
    }
}

/// Amount slider bounds for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for AmountSlider {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 100_000.0,
            step: 500.0,
        }
    }
}

impl AmountSlider {
    pub fn validate(self) -> ChartResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ChartError::InvalidData(
                "slider bounds must be finite with min < max".to_owned(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ChartError::InvalidData(
                "slider step must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Clamps an arbitrary amount into the slider bounds.
    #[must_use]
    pub fn clamp_amount(self, amount: f64) -> f64 {
        if amount.is_nan() {
            return self.min;
        }
        amount.clamp(self.min, self.max)
    }

    /// Amount under a thumb at `ratio` along the track, snapped to `step`.
    #[must_use]
    pub fn amount_from_ratio(self, ratio: f64) -> f64 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let raw = self.min + ratio * (self.max - self.min);
        let stepped = (raw / self.step).round() * self.step;
        stepped.clamp(self.min, self.max)
    }

    /// Thumb position for `amount`, in `[0, 1]`.
    #[must_use]
    pub fn ratio_from_amount(self, amount: f64) -> f64 {
        (self.clamp_amount(amount) - self.min) / (self.max - self.min).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AmountSlider, CalculatorDuration, recurring};

    #[test]
    fn one_month_recurring_is_a_single_contribution_grown_one_period() {
        let projection = recurring(1_000.0, CalculatorDuration::OneMonth.years());
        assert_relative_eq!(projection.invested, 1_000.0, max_relative = 1e-12);
        assert_relative_eq!(projection.estimated, 1_010.0, max_relative = 1e-9);
    }

    #[test]
    fn slider_snaps_to_step_and_stays_in_bounds() {
        let slider = AmountSlider::default();
        assert_eq!(slider.amount_from_ratio(0.0), 100.0);
        assert_eq!(slider.amount_from_ratio(1.0), 100_000.0);
        assert_eq!(slider.amount_from_ratio(0.5), 50_000.0);
        assert_eq!(slider.amount_from_ratio(-3.0), 100.0);
        assert_eq!(slider.amount_from_ratio(0.051), 5_000.0);
    }
}
