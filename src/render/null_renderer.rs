use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and server-side usage.
///
/// Frames are still validated so invalid geometry surfaces without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stroke_commands: usize,
    pub last_fill_commands: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_stroke_commands = frame.stroke.as_ref().map_or(0, |path| path.path.len());
        self.last_fill_commands = frame.fill.as_ref().map_or(0, |path| path.path.len());
        self.last_marker_count = frame.markers.len();
        Ok(())
    }
}
