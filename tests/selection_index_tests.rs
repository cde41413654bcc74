use nav_chart::core::ScreenPoint;
use nav_chart::interaction::{
    DragChange, InteractionMode, PointerEvent, SelectionState, nearest,
};

fn row(xs: &[f64]) -> Vec<ScreenPoint> {
    xs.iter().map(|&x| ScreenPoint::new(x, 50.0)).collect()
}

#[test]
fn nearest_prefers_lower_index_on_exact_tie() {
    let points = row(&[0.0, 10.0, 20.0]);
    assert_eq!(nearest(&points, 5.0), Some(0));
    assert_eq!(nearest(&points, 5.1), Some(1));
    assert_eq!(nearest(&points, -40.0), Some(0));
    assert_eq!(nearest(&points, 400.0), Some(2));
}

#[test]
fn nearest_ignores_y() {
    let points = vec![ScreenPoint::new(0.0, 1_000.0), ScreenPoint::new(10.0, -1_000.0)];
    assert_eq!(nearest(&points, 9.0), Some(1));
}

#[test]
fn move_without_down_updates_selection_but_not_mode() {
    let points = row(&[0.0, 10.0, 20.0]);
    let (state, change) = SelectionState::for_series(3).apply(PointerEvent::moved(9.0), &points);
    assert_eq!(change, None);
    assert_eq!(state.selected(), Some(1));
    assert_eq!(state.mode(), InteractionMode::Idle);
}

#[test]
fn repeated_down_reports_start_once() {
    let points = row(&[0.0, 10.0]);
    let (state, first) = SelectionState::for_series(2).apply(PointerEvent::down(0.0), &points);
    let (state, second) = state.apply(PointerEvent::down(10.0), &points);
    assert_eq!(first, Some(DragChange::Started));
    assert_eq!(second, None);
    assert_eq!(state.selected(), Some(1));

    let (state, ended) = state.apply(PointerEvent::up(0.0), &points);
    assert_eq!(ended, Some(DragChange::Ended));
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn series_reset_selects_latest_and_keeps_gesture() {
    let points = row(&[0.0, 10.0, 20.0]);
    let (state, _) = SelectionState::for_series(3).apply(PointerEvent::down(0.0), &points);
    let reset = state.reset_for_series(5);
    assert_eq!(reset.selected(), Some(4));
    assert!(reset.is_dragging());
    assert_eq!(state.reset_for_series(0).selected(), None);
}
