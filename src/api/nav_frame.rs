use tracing::trace;

use crate::core::{
    RenderPath, Sample, ScreenPoint, Viewport, build_fill, build_stroke, map_to_screen,
};

/// Identity of the inputs a [`NavFrame`] was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameKey {
    pub series_revision: u64,
    pub viewport: Viewport,
}

/// Geometry derived from one (series, viewport) pair.
///
/// Rebuilt whenever either input changes; never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct NavFrame {
    pub key: FrameKey,
    pub points: Vec<ScreenPoint>,
    pub stroke: RenderPath,
    pub fill: RenderPath,
}

impl NavFrame {
    pub fn build<T>(key: FrameKey, samples: &[Sample<T>]) -> Self {
        let points = map_to_screen(samples, key.viewport);
        let stroke = build_stroke(&points);
        let fill = build_fill(&stroke, key.viewport.baseline_y());
        trace!(
            revision = key.series_revision,
            points = points.len(),
            stroke_commands = stroke.len(),
            "built nav frame"
        );
        Self {
            key,
            points,
            stroke,
            fill,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
