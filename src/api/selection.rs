use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Sample, ScreenPoint, Viewport};

use super::label_format::{MISSING_LABEL, format_date_short, format_nav_value};
use super::{NavChartConfig, TooltipLayout};

/// Everything the presentation layer needs to draw the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionView {
    pub index: usize,
    pub point: ScreenPoint,
    pub value: f64,
    pub timestamp: String,
    pub instant: Option<DateTime<Utc>>,
    pub value_label: String,
    pub date_label: String,
    pub tooltip_left: f64,
    pub guide_top: f64,
    pub guide_bottom: f64,
}

/// Left edge of the tooltip, centred on `point_x` but kept inside the chart.
///
/// When the chart is narrower than the tooltip the left padding wins.
#[must_use]
pub fn tooltip_left(point_x: f64, viewport_width: f64, layout: TooltipLayout) -> f64 {
    let lower = layout.edge_padding;
    let upper = viewport_width - layout.width - layout.edge_padding;
    let centred = point_x - layout.width / 2.0;
    lower.max(upper.min(centred))
}

pub(super) fn selection_view<T>(
    index: usize,
    point: ScreenPoint,
    sample: &Sample<T>,
    viewport: Viewport,
    config: &NavChartConfig,
) -> SelectionView {
    SelectionView {
        index,
        point,
        value: sample.value,
        timestamp: sample.timestamp.clone(),
        instant: Some(sample.instant),
        value_label: format_nav_value(sample.value, &config.currency_symbol),
        date_label: date_label(Some(sample.instant)),
        tooltip_left: tooltip_left(point.x, viewport.width, config.tooltip),
        guide_top: viewport.padding,
        guide_bottom: viewport.baseline_y(),
    }
}

#[must_use]
pub fn date_label(instant: Option<DateTime<Utc>>) -> String {
    instant.map_or_else(|| MISSING_LABEL.to_owned(), format_date_short)
}
