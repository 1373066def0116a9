//! Helpers over plain coordinate slices.

use crate::math::{equals_2d, Point3};

/// Returns `true` if the first and last points are 2D-equal.
///
/// Empty sequences are not closed.
#[must_use]
pub fn is_closed(points: &[Point3]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => points.len() > 1 && equals_2d(first, last),
        _ => false,
    }
}

/// Returns `true` if any two consecutive points are 2D-equal.
#[must_use]
pub fn has_repeated_points(points: &[Point3]) -> bool {
    points.windows(2).any(|w| equals_2d(&w[0], &w[1]))
}

/// Returns a copy of `points` with runs of consecutive 2D-equal points
/// collapsed to their first occurrence.
#[must_use]
pub fn remove_repeated_points(points: &[Point3]) -> Vec<Point3> {
    let mut out = points.to_vec();
    out.dedup_by(|a, b| equals_2d(a, b));
    out
}

/// Returns a copy of `points` in reverse order.
#[must_use]
pub fn reversed(points: &[Point3]) -> Vec<Point3> {
    points.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point3> {
        coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect()
    }

    #[test]
    fn closed_detection() {
        assert!(is_closed(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])));
        assert!(!is_closed(&pts(&[(0.0, 0.0), (1.0, 0.0)])));
        assert!(!is_closed(&pts(&[(0.0, 0.0)])));
        assert!(!is_closed(&[]));
    }

    #[test]
    fn repeated_detection() {
        assert!(!has_repeated_points(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])));
        assert!(has_repeated_points(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)])));
        assert!(!has_repeated_points(&[]));
    }

    #[test]
    fn remove_repeated_collapses_runs() {
        let input = pts(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 0.0),
        ]);
        let out = remove_repeated_points(&input);
        assert_eq!(out, pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn remove_repeated_keeps_first_z() {
        let input = vec![Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 2.0)];
        let out = remove_repeated_points(&input);
        assert_eq!(out, vec![Point3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn remove_repeated_keeps_ring_closure() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(remove_repeated_points(&input), input);
    }

    #[test]
    fn reversed_order() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(reversed(&input), pts(&[(2.0, 0.0), (1.0, 0.0), (0.0, 0.0)]));
    }
}
