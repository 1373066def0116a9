pub mod polygon_2d;

/// Coordinate type. Relate computations only look at `x` and `y`; `z` is
/// carried through untouched.
pub type Point3 = nalgebra::Point3<f64>;

/// Returns `true` if `a` and `b` have identical `x` and `y` ordinates.
///
/// This is an exact comparison. Topology decisions must not be made with a
/// tolerance.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn equals_2d(a: &Point3, b: &Point3) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_2d_ignores_z() {
        let a = Point3::new(1.0, 2.0, 0.0);
        let b = Point3::new(1.0, 2.0, 7.5);
        assert!(equals_2d(&a, &b));
    }

    #[test]
    fn equals_2d_is_exact() {
        let a = Point3::new(1.0, 2.0, 0.0);
        let b = Point3::new(1.0, 2.0 + 1e-12, 0.0);
        assert!(!equals_2d(&a, &b));
    }
}
