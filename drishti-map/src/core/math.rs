//! Angle utilities shared by every heading and facing comparison.
//!
//! All angles are in radians, counter-clockwise positive. Normalized angles
//! live in the half-open range (-π, π], so a target facing straight back
//! along -X is reported as `+π`.

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Normalize angle to (-π, π].
///
/// # Example
/// ```
/// use drishti_map::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
/// assert!((normalize_angle(-PI) - PI).abs() < 1e-6);
/// assert!((normalize_angle(0.25) - 0.25).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a > PI {
        a -= TWO_PI;
    } else if a <= -PI {
        a += TWO_PI;
    }
    a
}

/// Signed shortest rotation from `from` to `to`, in (-π, π].
///
/// Positive means counter-clockwise. This is the only place wraparound is
/// handled; gating code compares `angle_diff(..).abs()` against a threshold.
///
/// # Example
/// ```
/// use drishti_map::core::math::angle_diff;
/// use std::f32::consts::PI;
///
/// // Crossing the ±π seam is a small step, not a full turn
/// let diff = angle_diff(0.9 * PI, -0.9 * PI);
/// assert!((diff - 0.2 * PI).abs() < 1e-5);
/// ```
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Check whether two angles are within `epsilon` of each other, across the seam.
#[inline]
pub fn angles_approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    angle_diff(a, b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_range() {
        for i in -40..=40 {
            let a = normalize_angle(i as f32 * 0.37);
            assert!(a > -PI - 1e-6 && a <= PI + 1e-6, "{} out of range", a);
        }
    }

    #[test]
    fn test_normalize_minus_pi_maps_to_pi() {
        assert_relative_eq!(normalize_angle(-PI), PI, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(PI), PI, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_diff_sign() {
        assert_relative_eq!(angle_diff(0.0, FRAC_PI_2), FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(angle_diff(FRAC_PI_2, 0.0), -FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_diff_wraparound() {
        // 179° and -179° are two degrees apart
        let a = 179f32.to_radians();
        let b = -179f32.to_radians();
        assert_relative_eq!(angle_diff(a, b), 2f32.to_radians(), epsilon = 1e-5);
        assert_relative_eq!(angle_diff(b, a), -2f32.to_radians(), epsilon = 1e-5);
    }

    #[test]
    fn test_angles_approx_equal() {
        assert!(angles_approx_equal(PI - 0.01, -PI + 0.01, 0.03));
        assert!(!angles_approx_equal(0.0, 0.5, 0.1));
    }
}
