/// Default point budget for one rendered series.
pub const DEFAULT_MAX_POINTS: usize = 140;

/// Stride used to thin `len` items down to at most `max_points` (plus the tail).
///
/// A zero budget is treated as one.
#[must_use]
pub fn reduction_step(len: usize, max_points: usize) -> usize {
    len.div_ceil(max_points.max(1)).max(1)
}

/// Indices kept by [`reduce`], in ascending order.
#[must_use]
pub fn reduced_indices(len: usize, max_points: usize) -> Vec<usize> {
    if len <= max_points {
        return (0..len).collect();
    }

    let step = reduction_step(len, max_points);
    let last = len - 1;
    let mut indices: Vec<usize> = (0..len).step_by(step).collect();
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// Decimates a series by fixed stride, always keeping the final item.
///
/// Series already within budget are returned unchanged.
#[must_use]
pub fn reduce<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if points.len() <= max_points {
        return points.to_vec();
    }

    reduced_indices(points.len(), max_points)
        .into_iter()
        .map(|index| points[index].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{reduce, reduced_indices, reduction_step};

    #[test]
    fn stride_rounds_up() {
        assert_eq!(reduction_step(300, 140), 3);
        assert_eq!(reduction_step(280, 140), 2);
        assert_eq!(reduction_step(10, 0), 10);
    }

    #[test]
    fn tail_is_appended_when_off_stride() {
        assert_eq!(reduced_indices(10, 4), vec![0, 3, 6, 9]);
        assert_eq!(reduced_indices(11, 4), vec![0, 3, 6, 9, 10]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let empty: Vec<u8> = Vec::new();
        assert!(reduce(&empty, 0).is_empty());
        assert!(reduce(&empty, 140).is_empty());
    }
}
