use super::Point3;

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring may be
/// given with or without a repeated closing point; the closing edge of an
/// already-closed ring contributes nothing.
///
/// Ordinates are taken relative to the first vertex, which keeps the products
/// small for rings far from the origin.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let (ox, oy) = (points[0].x, points[0].y);
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let (xi, yi) = (points[i].x - ox, points[i].y - oy);
        let (xj, yj) = (points[j].x - ox, points[j].y - oy);
        sum += xi * yj - xj * yi;
    }
    sum * 0.5
}

/// Returns `true` if the ring is oriented counter-clockwise.
///
/// Rings with zero area (collapsed or fewer than three points) are not
/// counter-clockwise.
#[must_use]
pub fn is_ccw(ring: &[Point3]) -> bool {
    signed_area_2d(ring) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point3> {
        coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect()
    }

    #[test]
    fn signed_area_ccw_square() {
        let ring = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        assert_relative_eq!(signed_area_2d(&ring), 100.0);
        assert!(is_ccw(&ring));
    }

    #[test]
    fn signed_area_cw_square() {
        let ring = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        assert_relative_eq!(signed_area_2d(&ring), -100.0);
        assert!(!is_ccw(&ring));
    }

    #[test]
    fn signed_area_open_ring() {
        let ring = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert_relative_eq!(signed_area_2d(&ring), 6.0);
    }

    #[test]
    fn signed_area_far_from_origin() {
        let ring = pts(&[
            (1.0e9, 1.0e9),
            (1.0e9 + 1.0, 1.0e9),
            (1.0e9 + 1.0, 1.0e9 + 1.0),
            (1.0e9, 1.0e9 + 1.0),
            (1.0e9, 1.0e9),
        ]);
        assert_relative_eq!(signed_area_2d(&ring), 1.0);
    }

    #[test]
    fn repeated_points_do_not_change_area() {
        let ring = pts(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        assert_relative_eq!(signed_area_2d(&ring), 100.0);
    }

    #[test]
    fn degenerate_is_not_ccw() {
        assert!(!is_ccw(&[]));
        assert!(!is_ccw(&pts(&[(0.0, 0.0), (1.0, 1.0)])));
        // Collapsed ring: out and back along the same line.
        assert!(!is_ccw(&pts(&[(0.0, 0.0), (5.0, 0.0), (0.0, 0.0)])));
    }
}
