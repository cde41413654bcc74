//! Pointer-driven sample selection.
//!
//! Pointer input arrives as [`PointerEvent`] messages and is folded into a
//! [`SelectionState`] by a pure reducer, so the state machine does not depend on
//! any particular rendering surface.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer message with an x-coordinate local to the chart box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn down(x: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
        }
    }

    #[must_use]
    pub const fn moved(x: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
        }
    }

    #[must_use]
    pub const fn up(x: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
        }
    }

    #[must_use]
    pub const fn cancel() -> Self {
        Self {
            phase: PointerPhase::Cancel,
            x: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Drag-flag transition produced by a reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragChange {
    Started,
    Ended,
}

/// Index of the point whose x is closest to `target_x`.
///
/// Exact ties resolve to the lowest index. Returns `None` for empty input.
#[must_use]
pub fn nearest(points: &[ScreenPoint], target_x: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| OrderedFloat((point.x - target_x).abs()))
        .map(|(index, _)| index)
}

/// Selected sample index plus the drag flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<usize>,
    mode: InteractionMode,
}

impl SelectionState {
    /// Fresh state for a series of `len` samples: latest sample selected.
    #[must_use]
    pub fn for_series(len: usize) -> Self {
        Self {
            selected: len.checked_sub(1),
            mode: InteractionMode::Idle,
        }
    }

    #[must_use]
    pub fn selected(self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    /// Resets the selection after the series identity changed. The drag flag
    /// belongs to the gesture and is kept.
    #[must_use]
    pub fn reset_for_series(self, len: usize) -> Self {
        Self {
            selected: len.checked_sub(1),
            mode: self.mode,
        }
    }

    /// Keeps the index within a series that may have shrunk.
    #[must_use]
    pub fn clamped_to(self, len: usize) -> Self {
        let selected = match (self.selected, len.checked_sub(1)) {
            (_, None) => None,
            (Some(index), Some(last)) => Some(index.min(last)),
            (None, Some(last)) => Some(last),
        };
        Self { selected, ..self }
    }

    /// Folds one pointer event into the state.
    ///
    /// `event.x` is expected to be clamped to the chart width already. Down and
    /// move re-resolve the selection; up and cancel keep it and release the
    /// drag flag.
    #[must_use]
    pub fn apply(self, event: PointerEvent, points: &[ScreenPoint]) -> (Self, Option<DragChange>) {
        match event.phase {
            PointerPhase::Down => {
                let change = (!self.is_dragging()).then_some(DragChange::Started);
                let next = Self {
                    selected: nearest(points, event.x).or(self.selected),
                    mode: InteractionMode::Dragging,
                };
                (next, change)
            }
            PointerPhase::Move => {
                let next = Self {
                    selected: nearest(points, event.x).or(self.selected),
                    ..self
                };
                (next, None)
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                let change = self.is_dragging().then_some(DragChange::Ended);
                let next = Self {
                    mode: InteractionMode::Idle,
                    ..self
                };
                (next, change)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragChange, PointerEvent, SelectionState, nearest};
    use crate::core::ScreenPoint;

    fn points_at(xs: &[f64]) -> Vec<ScreenPoint> {
        xs.iter().map(|&x| ScreenPoint::new(x, 0.0)).collect()
    }

    #[test]
    fn exact_tie_goes_to_lower_index() {
        let points = points_at(&[0.0, 10.0, 20.0]);
        assert_eq!(nearest(&points, 5.0), Some(0));
        assert_eq!(nearest(&points, 15.0), Some(1));
        assert_eq!(nearest(&points, 16.0), Some(2));
        assert_eq!(nearest(&[], 16.0), None);
    }

    #[test]
    fn gesture_sets_and_releases_drag_flag() {
        let points = points_at(&[0.0, 10.0, 20.0]);
        let state = SelectionState::for_series(points.len());
        assert_eq!(state.selected(), Some(2));

        let (state, change) = state.apply(PointerEvent::down(1.0), &points);
        assert_eq!(change, Some(DragChange::Started));
        assert!(state.is_dragging());
        assert_eq!(state.selected(), Some(0));

        let (state, change) = state.apply(PointerEvent::moved(11.0), &points);
        assert_eq!(change, None);
        assert_eq!(state.selected(), Some(1));

        let (state, change) = state.apply(PointerEvent::cancel(), &points);
        assert_eq!(change, Some(DragChange::Ended));
        assert!(!state.is_dragging());
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn release_without_gesture_reports_nothing() {
        let state = SelectionState::for_series(0);
        assert_eq!(state.selected(), None);
        let (state, change) = state.apply(PointerEvent::up(3.0), &[]);
        assert_eq!(change, None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn clamping_follows_a_shrinking_series() {
        let state = SelectionState::for_series(10).clamped_to(4);
        assert_eq!(state.selected(), Some(3));
        assert_eq!(state.clamped_to(0).selected(), None);
    }
}
