use nav_chart::core::ScreenPoint;
use nav_chart::interaction::{PointerEvent, SelectionState, nearest};
use proptest::prelude::*;

fn brute_force_nearest(points: &[ScreenPoint], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let distance = (point.x - target).abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

proptest! {
    #[test]
    fn nearest_matches_linear_scan(
        xs in prop::collection::vec(-500.0f64..500.0, 0..200),
        target in -600.0f64..600.0,
    ) {
        let points: Vec<ScreenPoint> = xs.iter().map(|&x| ScreenPoint::new(x, 0.0)).collect();
        prop_assert_eq!(nearest(&points, target), brute_force_nearest(&points, target));
    }

    #[test]
    fn selection_stays_in_bounds(
        len in 1usize..100,
        xs in prop::collection::vec(0.0f64..300.0, 1..20),
    ) {
        let points: Vec<ScreenPoint> = (0..len)
            .map(|index| ScreenPoint::new(index as f64 * 3.0, 0.0))
            .collect();
        let mut state = SelectionState::for_series(len);
        for (step, x) in xs.into_iter().enumerate() {
            let event = if step == 0 { PointerEvent::down(x) } else { PointerEvent::moved(x) };
            state = state.apply(event, &points).0;
            prop_assert!(state.selected().is_some_and(|index| index < len));
        }
        let (released, _) = state.apply(PointerEvent::cancel(), &points);
        prop_assert!(!released.is_dragging());
        prop_assert_eq!(released.selected(), state.selected());
    }
}
