use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{LinePrimitive, MarkerPrimitive, PathPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends paint `fill`, then `stroke`, then `lines`, then `markers`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub fill: Option<PathPrimitive>,
    pub stroke: Option<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fill: None,
            stroke: None,
            lines: Vec::new(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: PathPrimitive) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: PathPrimitive) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;

        for path in self.fill.iter().chain(self.stroke.iter()) {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.lines.is_empty()
            && self.markers.is_empty()
    }
}
