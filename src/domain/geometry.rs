//! Geometry primitives, independent of tree structure.
//!
//! All functions operate on IEEE-754 `f64`: degenerate inputs produce NaN
//! instead of panicking.

use crate::domain::entities::Point3;

/// Euclidean distance between two positions.
pub fn euclidean_distance(a: &Point3, b: &Point3) -> f64 {
    norm(&(*a - *b))
}

/// Vector pointing from `to` back to `from`, i.e. `from - to`.
pub fn vector_between(from: &Point3, to: &Point3) -> Point3 {
    *from - *to
}

pub fn dot(a: &Point3, b: &Point3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn norm(v: &Point3) -> f64 {
    dot(v, v).sqrt()
}

/// Angle in radians between two vectors, within `[0, π]`.
///
/// NaN if either vector has zero magnitude. The cosine is clamped to `[-1, 1]`
/// so rounding on (anti)parallel vectors does not leave the domain of `acos`.
pub fn angle_between(v1: &Point3, v2: &Point3) -> f64 {
    let cosine = dot(v1, v2) / (norm(v1) * norm(v2));
    cosine.clamp(-1.0, 1.0).acos()
}

/// Mean of the non-NaN values; NaN when there are none.
pub fn nan_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn given_same_point_when_measuring_distance_then_is_exactly_zero() {
        let p = Point3::new(3.7, -2.1, 9.0);
        assert_eq!(euclidean_distance(&p, &p), 0.0);
    }

    #[test]
    fn given_pythagorean_offset_when_measuring_distance_then_returns_hypotenuse() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert_eq!(euclidean_distance(&a, &b), 13.0);
    }

    #[rstest]
    #[case(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), FRAC_PI_2)]
    #[case(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0), 0.0)]
    #[case(Point3::new(1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0), PI)]
    #[case(Point3::new(1.0, 1.0, 0.0), Point3::new(1.0, 0.0, 0.0), PI / 4.0)]
    fn given_vectors_when_measuring_angle_then_matches_expected(
        #[case] v1: Point3,
        #[case] v2: Point3,
        #[case] expected: f64,
    ) {
        let angle = angle_between(&v1, &v2);
        assert!((angle - expected).abs() < 1e-12, "got {angle}, expected {expected}");
    }

    #[test]
    fn given_zero_vector_when_measuring_angle_then_is_nan() {
        let zero = Point3::default();
        assert!(angle_between(&zero, &Point3::new(1.0, 0.0, 0.0)).is_nan());
        assert!(angle_between(&Point3::new(0.0, 2.0, 0.0), &zero).is_nan());
    }

    #[test]
    fn given_root_and_child_when_building_vector_then_points_from_child_to_root() {
        let v = vector_between(&Point3::new(1.0, 1.0, 1.0), &Point3::new(0.0, 3.0, 1.0));
        assert_eq!(v, Point3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn given_values_with_nan_when_averaging_then_nan_is_ignored() {
        assert_eq!(nan_mean(&[1.0, f64::NAN, 3.0]), 2.0);
    }

    #[test]
    fn given_only_nan_when_averaging_then_is_nan() {
        assert!(nan_mean(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_mean(&[]).is_nan());
    }
}
