use tracing::trace;

use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::{
    LinePrimitive, MarkerPrimitive, PathPaint, PathPrimitive, RenderFrame, Renderer,
};

use super::NavChart;

impl<R: Renderer> NavChart<R> {
    /// Materializes the current frame: area fill, smoothed stroke, and the
    /// selection guide line and marker.
    ///
    /// An empty series yields an empty frame rather than an error.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        let style = self.style;
        let viewport = self.config.viewport;
        let selection = self.selection_view();
        let frame = self.frame();

        let mut render_frame = RenderFrame::new(viewport);
        if !frame.fill.is_empty() {
            render_frame = render_frame.with_fill(PathPrimitive::new(
                frame.fill.clone(),
                PathPaint::VerticalGradient {
                    top: style.fill_top_color,
                    bottom: style.fill_bottom_color,
                },
            ));
        }
        if frame.stroke.is_drawable() {
            render_frame = render_frame.with_stroke(PathPrimitive::new(
                frame.stroke.clone(),
                PathPaint::Stroke {
                    width: style.stroke_width,
                    color: style.stroke_color,
                },
            ));
        }

        if let Some(view) = selection {
            render_frame = render_frame
                .with_line(LinePrimitive::new(
                    view.point.x,
                    view.guide_top,
                    view.point.x,
                    view.guide_bottom,
                    style.guide_line_width,
                    style.guide_line_color,
                ))
                .with_marker(MarkerPrimitive {
                    center: view.point,
                    radius: style.marker_radius,
                    color: style.marker_color,
                });
        }

        render_frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        trace!(
            has_stroke = frame.stroke.is_some(),
            markers = frame.markers.len(),
            "render nav chart"
        );
        self.renderer.render(&frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }
}
