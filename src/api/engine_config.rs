use serde::{Deserialize, Serialize};

use crate::core::growth::AmountSlider;
use crate::core::types::DEFAULT_CHART_HEIGHT;
use crate::core::{CalculatorDuration, CalculatorMode, DEFAULT_MAX_POINTS, Viewport};
use crate::error::{ChartError, ChartResult};

/// Tooltip box geometry used to place the selection readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub width: f64,
    pub edge_padding: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: 170.0,
            edge_padding: 8.0,
        }
    }
}

/// Public NAV chart bootstrap configuration.
///
/// Serializable so host applications can persist chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    #[serde(default)]
    pub tooltip: TooltipLayout,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for NavChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(300.0, DEFAULT_CHART_HEIGHT))
    }
}

impl NavChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            max_points: default_max_points(),
            tooltip: TooltipLayout::default(),
            currency_symbol: default_currency_symbol(),
        }
    }

    /// Sets the point budget applied before mapping.
    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Sets the inner padding on every side of the plot.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.viewport.padding = padding;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipLayout) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        if self.max_points == 0 {
            return Err(ChartError::InvalidData("max_points must be > 0".to_owned()));
        }
        if !self.tooltip.width.is_finite()
            || self.tooltip.width <= 0.0
            || !self.tooltip.edge_padding.is_finite()
            || self.tooltip.edge_padding < 0.0
        {
            return Err(ChartError::InvalidData(
                "tooltip width must be > 0 and edge padding >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Bootstrap configuration for the return calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnCalculatorConfig {
    #[serde(default)]
    pub slider: AmountSlider,
    #[serde(default = "default_amount")]
    pub default_amount: f64,
    #[serde(default)]
    pub mode: CalculatorMode,
    #[serde(default)]
    pub duration: CalculatorDuration,
}

impl Default for ReturnCalculatorConfig {
    fn default() -> Self {
        Self {
            slider: AmountSlider::default(),
            default_amount: default_amount(),
            mode: CalculatorMode::default(),
            duration: CalculatorDuration::default(),
        }
    }
}

impl ReturnCalculatorConfig {
    pub fn validate(&self) -> ChartResult<()> {
        self.slider.validate()?;
        if !self.default_amount.is_finite() {
            return Err(ChartError::InvalidData(
                "default amount must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

fn default_currency_symbol() -> String {
    "₹".to_owned()
}

fn default_amount() -> f64 {
    5_000.0
}

#[cfg(test)]
mod tests {
    use super::NavChartConfig;
    use crate::core::types::DEFAULT_CHART_PADDING;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = NavChartConfig::from_json_str(r#"{"viewport":{"width":320,"height":190}}"#)
            .expect("parse");
        assert_eq!(config.viewport.padding, DEFAULT_CHART_PADDING);
        assert_eq!(config.max_points, 140);
        assert_eq!(config.tooltip.width, 170.0);
        assert_eq!(config.currency_symbol, "₹");
    }
}
