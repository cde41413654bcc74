use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for (name, size) in [
        ("stroke_width", style.stroke_width),
        ("guide_line_width", style.guide_line_width),
        ("marker_radius", style.marker_radius),
    ] {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }
    for color in [
        style.stroke_color,
        style.fill_top_color,
        style.fill_bottom_color,
        style.guide_line_color,
        style.marker_color,
    ] {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn resized_viewport(
    current: Viewport,
    width: f64,
    height: f64,
) -> ChartResult<Viewport> {
    let next = Viewport {
        width,
        height,
        ..current
    };
    next.validate()?;
    Ok(next)
}
