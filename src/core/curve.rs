use serde::{Deserialize, Serialize};

use crate::core::types::ScreenPoint;

/// One drawing command in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    QuadTo {
        control: ScreenPoint,
        end: ScreenPoint,
    },
    Close,
}

impl PathCommand {
    /// Pen position after this command; `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<ScreenPoint> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::QuadTo { end, .. } => Some(end),
            Self::Close => None,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point.is_finite(),
            Self::QuadTo { control, end } => control.is_finite() && end.is_finite(),
            Self::Close => true,
        }
    }
}

/// Immutable command sequence. Derived paths are rebuilt, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderPath {
    commands: Vec<PathCommand>,
}

impl RenderPath {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn start_point(&self) -> Option<ScreenPoint> {
        self.commands.first().and_then(|command| command.end_point())
    }

    /// Last pen position, skipping a trailing `Close`.
    #[must_use]
    pub fn end_point(&self) -> Option<ScreenPoint> {
        self.commands
            .iter()
            .rev()
            .find_map(|command| command.end_point())
    }

    /// True when the path draws more than a bare move.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.commands.len() > 1
    }
}

/// Smoothed line through `points`.
///
/// Each interior segment is a quadratic curve controlled by the previous point
/// and ending at the midpoint towards the current one. A final straight segment
/// lands exactly on the last point. Fewer than two points produce a bare move
/// (or nothing for empty input).
#[must_use]
pub fn build_stroke(points: &[ScreenPoint]) -> RenderPath {
    let Some((&first, rest)) = points.split_first() else {
        return RenderPath::empty();
    };

    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(PathCommand::MoveTo(first));
    if rest.is_empty() {
        return RenderPath { commands };
    }

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        commands.push(PathCommand::QuadTo {
            control: prev,
            end: prev.midpoint(curr),
        });
    }
    commands.push(PathCommand::LineTo(points[points.len() - 1]));

    RenderPath { commands }
}

/// Closed area under `stroke` down to `baseline_y`.
///
/// Empty when the stroke has nothing visible to fill under.
#[must_use]
pub fn build_fill(stroke: &RenderPath, baseline_y: f64) -> RenderPath {
    if !stroke.is_drawable() {
        return RenderPath::empty();
    }
    let (Some(first), Some(last)) = (stroke.start_point(), stroke.end_point()) else {
        return RenderPath::empty();
    };

    let mut commands = Vec::with_capacity(stroke.len() + 3);
    commands.extend_from_slice(stroke.commands());
    commands.push(PathCommand::LineTo(ScreenPoint::new(last.x, baseline_y)));
    commands.push(PathCommand::LineTo(ScreenPoint::new(first.x, baseline_y)));
    commands.push(PathCommand::Close);

    RenderPath { commands }
}
