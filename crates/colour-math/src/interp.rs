//! Interpolation and range helpers.
//!
//! ```rust
//! use colour_math::{lerp, linear_conversion};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(linear_conversion(0.5, (0.0, 1.0), (0.0, 100.0)), 50.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Returns 0 when `a` and `b` coincide.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-15 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Linearly maps `a` from the `old` range to the `new` range.
#[inline]
pub fn linear_conversion(a: f64, old: (f64, f64), new: (f64, f64)) -> f64 {
    lerp(new.0, new.1, inverse_lerp(old.0, old.1, a))
}

/// Alias of [`lerp`] with the colour-science argument name.
#[inline]
pub fn linstep(a: f64, b: f64, t: f64) -> f64 {
    lerp(a, b, t)
}

/// Sign-preserving power: `sign(a) * |a|^p`.
///
/// ```rust
/// use colour_math::spow;
///
/// assert!((spow(-8.0, 1.0 / 3.0) + 2.0).abs() < 1e-12);
/// assert_eq!(spow(0.0, 0.5), 0.0);
/// ```
#[inline]
pub fn spow(a: f64, p: f64) -> f64 {
    if a == 0.0 {
        return 0.0;
    }
    a.signum() * a.abs().powf(p)
}

/// [`spow`] applied per component.
#[inline]
pub fn spow3(a: [f64; 3], p: f64) -> [f64; 3] {
    a.map(|x| spow(x, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
    }

    #[test]
    fn test_linear_conversion() {
        assert_eq!(linear_conversion(50.0, (0.0, 100.0), (0.0, 1.0)), 0.5);
        assert_eq!(linear_conversion(0.25, (0.0, 1.0), (-1.0, 1.0)), -0.5);
    }

    #[test]
    fn test_spow() {
        assert_eq!(spow(2.0, 2.0), 4.0);
        assert_eq!(spow(-2.0, 2.0), -4.0);
        assert_eq!(spow3([-1.0, 0.0, 4.0], 0.5), [-1.0, 0.0, 2.0]);
    }
}
