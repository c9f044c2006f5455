//! Helpers shared by the opponent colour models.

/// Converts rectangular `[J, a, b]` to cylindrical `[J, C, h]`.
///
/// Hue is in degrees, wrapped to [0, 360).
///
/// ```rust
/// use colour_models::common::jab_to_jch;
///
/// let jch = jab_to_jch([50.0, 0.0, 10.0]);
/// assert_eq!(jch[1], 10.0);
/// assert!((jch[2] - 90.0).abs() < 1e-12);
/// ```
pub fn jab_to_jch(jab: [f64; 3]) -> [f64; 3] {
    let [j, a, b] = jab;
    [j, a.hypot(b), hue_degrees(a, b)]
}

/// Converts cylindrical `[J, C, h]` to rectangular `[J, a, b]`.
pub fn jch_to_jab(jch: [f64; 3]) -> [f64; 3] {
    let [j, c, h] = jch;
    let (sin, cos) = h.to_radians().sin_cos();
    [j, c * cos, c * sin]
}

/// Hue angle of `(a, b)` in degrees, wrapped to [0, 360).
pub(crate) fn hue_degrees(a: f64, b: f64) -> f64 {
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative angles
    if h >= 360.0 { 0.0 } else { h }
}

/// Sum of the three components.
#[inline]
pub(crate) fn sum3(v: [f64; 3]) -> f64 {
    v[0] + v[1] + v[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_jab_to_jch() {
        let jch = jab_to_jch([41.52787529, 52.63858304, 26.92317922]);
        assert_abs_diff_eq!(jch[1], 59.12425901, epsilon = 1e-6);
        assert_abs_diff_eq!(jch[2], 27.08848784, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_hue_wraps() {
        let jch = jab_to_jch([1.0, 0.0, -1.0]);
        assert_abs_diff_eq!(jch[2], 270.0, epsilon = 1e-12);
    }

    #[test]
    fn test_jch_to_jab() {
        let jab = jch_to_jab([41.52787529, 59.12425901, 27.08848784]);
        assert_abs_diff_eq!(jab[1], 52.63858304, epsilon = 1e-6);
        assert_abs_diff_eq!(jab[2], 26.92317922, epsilon = 1e-6);
    }
}
