use tracing::debug;

use crate::core::{DurationPreset, RawNavRecord, Sample, Viewport};
use crate::error::ChartResult;
use crate::extensions::ChartObserver;
use crate::interaction::SelectionState;
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{NavChartConfig, NavFrame, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `NavChart` owns the prepared series, the memoized screen geometry, the
/// pointer selection and the renderer.
pub struct NavChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: NavChartConfig,
    pub(super) style: RenderStyle,
    /// Every valid sample, before duration windowing and reduction.
    pub(super) history: Vec<Sample<RawNavRecord>>,
    /// Windowed and reduced series actually plotted.
    pub(super) series: Vec<Sample<RawNavRecord>>,
    pub(super) series_revision: u64,
    pub(super) excluded_records: usize,
    pub(super) duration: DurationPreset,
    pub(super) duration_days: Option<u32>,
    pub(super) frame: Option<NavFrame>,
    pub(super) selection: SelectionState,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> NavChart<R> {
    /// Creates an empty chart with a validated configuration.
    pub fn new(renderer: R, config: NavChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            max_points = config.max_points,
            "create nav chart"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            history: Vec::new(),
            series: Vec::new(),
            series_revision: 0,
            excluded_records: 0,
            duration: DurationPreset::Max,
            duration_days: None,
            frame: None,
            selection: SelectionState::default(),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &NavChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
