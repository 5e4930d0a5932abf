use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};

use super::{Point3, UnitVector3, Vector3, TOLERANCE};

/// Normalizes a vector to unit length.
///
/// # Errors
///
/// Returns an error if the vector is zero-length (its direction is
/// undefined).
pub fn normalize(v: Vector3) -> Result<UnitVector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Unit::new_unchecked(v / len))
}

/// Rotates every point by `angle` radians about `axis` (right-hand rule).
///
/// Returns a new array of equal length and order; the input is untouched.
/// The transform is a proper rotation, so vector norms are preserved to
/// floating-point tolerance.
#[must_use]
pub fn rotate<const N: usize>(
    points: &[Point3; N],
    angle: f64,
    axis: &UnitVector3,
) -> [Point3; N] {
    let rotation = Rotation3::from_axis_angle(axis, angle);
    points.map(|p| rotation * p)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn normalize_scales_to_unit_length() {
        let u = normalize(Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(u.norm(), 1.0, max_relative = 1e-12);
        assert!((u.into_inner() - Vector3::new(0.6, 0.0, 0.8)).norm() < TOLERANCE);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        let r = normalize(Vector3::zeros());
        assert!(r.is_err());
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let points = [Point3::new(1.0, 0.0, 0.0)];
        let rotated = rotate(&points, FRAC_PI_2, &Vector3::z_axis());
        // +x maps to +y under a right-handed quarter turn about +z
        assert!((rotated[0] - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn rotate_preserves_norms() {
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-0.5, 0.25, 4.0),
            Point3::new(0.0, 0.0, -2.0),
        ];
        let axis = normalize(Vector3::new(1.0, -2.0, 0.5)).unwrap();
        for angle in [0.0, 0.3, FRAC_PI_2, PI, 2.7 * PI, -1.1] {
            let rotated = rotate(&points, angle, &axis);
            for (p, q) in points.iter().zip(&rotated) {
                assert_relative_eq!(p.coords.norm(), q.coords.norm(), max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn rotate_zero_angle_is_identity() {
        let points = [Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 0.5)];
        let rotated = rotate(&points, 0.0, &Vector3::x_axis());
        for (p, q) in points.iter().zip(&rotated) {
            assert!((p - q).norm() < TOLERANCE);
        }
    }

    #[test]
    fn rotate_does_not_mutate_input() {
        let points = [Point3::new(1.0, 0.0, 0.0)];
        let _ = rotate(&points, 1.0, &Vector3::y_axis());
        assert!((points[0] - Point3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }
}
