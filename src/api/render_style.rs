use crate::render::Color;

const CHART_GREEN: Color = Color::rgb(0.373, 0.608, 0.510);

/// Style contract for the NAV chart frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_top_color: Color,
    pub fill_bottom_color: Color,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub marker_color: Color,
    pub marker_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_color: CHART_GREEN,
            stroke_width: 2.5,
            fill_top_color: CHART_GREEN.with_alpha(0x88 as f64 / 255.0),
            fill_bottom_color: CHART_GREEN.with_alpha(0x10 as f64 / 255.0),
            guide_line_color: CHART_GREEN.with_alpha(0xaa as f64 / 255.0),
            guide_line_width: 1.0,
            marker_color: CHART_GREEN,
            marker_radius: 4.0,
        }
    }
}
