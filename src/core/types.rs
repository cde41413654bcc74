use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CHART_HEIGHT: f64 = 190.0;
pub const DEFAULT_CHART_PADDING: f64 = 12.0;

/// Drawable chart area in pixel-equivalent units.
///
/// `padding` is applied on every side; plotted samples never leave the inner
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_CHART_PADDING,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// y-coordinate of the bottom padding edge; fills close against it.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height - self.padding
    }

    /// Clamps a pointer x-coordinate into `[0, width]`.
    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        x.clamp(0.0, self.width.max(0.0))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.padding.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.padding >= 0.0
            && self.inner_width() > 0.0
            && self.inner_height() > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
                padding: self.padding,
            })
        }
    }
}

fn default_padding() -> f64 {
    DEFAULT_CHART_PADDING
}

/// One mapped sample in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
