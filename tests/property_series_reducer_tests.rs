use nav_chart::core::reduce::{reduce, reduced_indices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reduce_is_identity_within_budget(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..200),
        extra in 0usize..50
    ) {
        let max_points = values.len() + extra;
        prop_assert_eq!(reduce(&values, max_points), values);
    }

    #[test]
    fn reduce_keeps_first_and_last_and_respects_budget(
        len in 2usize..5_000,
        max_points in 1usize..300
    ) {
        prop_assume!(len > max_points);
        let items: Vec<usize> = (0..len).collect();
        let reduced = reduce(&items, max_points);

        prop_assert_eq!(reduced.first().copied(), Some(0));
        prop_assert_eq!(reduced.last().copied(), Some(len - 1));
        // Stride sampling plus the forced tail.
        prop_assert!(reduced.len() <= max_points + 1);
        prop_assert!(reduced.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reduced_indices_follow_stride(len in 2usize..2_000, max_points in 1usize..150) {
        prop_assume!(len > max_points);
        let step = len.div_ceil(max_points);
        let indices = reduced_indices(len, max_points);
        for index in &indices[..indices.len() - 1] {
            prop_assert_eq!(index % step, 0);
        }
    }
}
