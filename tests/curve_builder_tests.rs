use nav_chart::core::{
    PathCommand, ScreenPoint, Viewport, build_fill, build_stroke, map_values_to_screen,
};

#[test]
fn interior_curves_end_on_midpoints() {
    let points = map_values_to_screen(&[100.0, 110.0, 90.0], Viewport::new(300.0, 190.0));
    let stroke = build_stroke(&points);

    match stroke.commands()[2] {
        PathCommand::QuadTo { control, end } => {
            assert_eq!(control, points[1]);
            assert_eq!(end, ScreenPoint::new(219.0, 95.0));
        }
        other => panic!("expected quadratic segment, got {other:?}"),
    }
    assert_eq!(
        stroke.commands().last().copied(),
        Some(PathCommand::LineTo(points[2]))
    );
}

#[test]
fn fill_runs_along_baseline_from_last_to_first_x() {
    let viewport = Viewport::new(300.0, 190.0);
    let points = map_values_to_screen(&[1.0, 2.0, 3.0, 2.5], viewport);
    let stroke = build_stroke(&points);
    let fill = build_fill(&stroke, viewport.baseline_y());
    let tail = &fill.commands()[fill.len() - 3..];

    assert_eq!(tail[0], PathCommand::LineTo(ScreenPoint::new(288.0, 178.0)));
    assert_eq!(tail[1], PathCommand::LineTo(ScreenPoint::new(12.0, 178.0)));
    assert_eq!(tail[2], PathCommand::Close);
}

#[test]
fn empty_input_yields_empty_paths() {
    let stroke = build_stroke(&[]);
    assert!(stroke.is_empty());
    assert!(stroke.end_point().is_none());
    assert!(build_fill(&stroke, 100.0).is_empty());
}
