//! CIE L*a*b* colourspace and its cylindrical LCHab form.

use crate::cie_xyy::xy_to_xyz;
use crate::common::{jab_to_jch, jch_to_jab};

/// CIE ε constant: `(6/29)^3`.
pub const CIE_E: f64 = 216.0 / 24389.0;

/// CIE κ constant.
pub const CIE_K: f64 = 24389.0 / 27.0;

/// CIE 1976 intermediate function `f(Y/Yn)`.
pub fn intermediate_lightness(ratio: f64) -> f64 {
    if ratio > CIE_E {
        ratio.cbrt()
    } else {
        (CIE_K * ratio + 16.0) / 116.0
    }
}

/// Inverse of [`intermediate_lightness`].
pub fn intermediate_lightness_inverse(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > CIE_E {
        f3
    } else {
        (116.0 * f - 16.0) / CIE_K
    }
}

/// CIE 1976 lightness `L*` of a relative luminance `Y / Yn`.
pub fn lightness(ratio: f64) -> f64 {
    116.0 * intermediate_lightness(ratio) - 16.0
}

/// Converts CIE XYZ to CIE L*a*b*.
///
/// XYZ is relative to `Y = 1` for the reference `illuminant`.
///
/// ```rust
/// use colour_models::cie_lab::xyz_to_lab;
/// use colour_models::illuminants::D65;
///
/// let lab = xyz_to_lab([0.20654008, 0.12197225, 0.05136952], D65);
/// assert!((lab[0] - 41.52787529).abs() < 1e-6);
/// ```
pub fn xyz_to_lab(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let white = xy_to_xyz(illuminant);
    let [fx, fy, fz] = [0, 1, 2].map(|i| intermediate_lightness(xyz[i] / white[i]));
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts CIE L*a*b* to CIE XYZ.
pub fn lab_to_xyz(lab: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let white = xy_to_xyz(illuminant);
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let f = [a / 500.0 + fy, fy, fy - b / 200.0];
    [0, 1, 2].map(|i| intermediate_lightness_inverse(f[i]) * white[i])
}

/// Converts CIE L*a*b* to CIE LCHab.
pub fn lab_to_lchab(lab: [f64; 3]) -> [f64; 3] {
    jab_to_jch(lab)
}

/// Converts CIE LCHab to CIE L*a*b*.
pub fn lchab_to_lab(lchab: [f64; 3]) -> [f64; 3] {
    jch_to_jab(lchab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::{D50, D65};
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];

    #[test]
    fn test_xyz_to_lab() {
        let lab = xyz_to_lab(XYZ, D65);
        assert_abs_diff_eq!(lab[0], 41.52787529, epsilon = 1e-6);
        assert_abs_diff_eq!(lab[1], 52.63858304, epsilon = 1e-6);
        assert_abs_diff_eq!(lab[2], 26.92317922, epsilon = 1e-6);

        let lab = xyz_to_lab(XYZ, D50);
        assert_abs_diff_eq!(lab[1], 51.19354174, epsilon = 1e-6);
        assert_abs_diff_eq!(lab[2], 19.91843098, epsilon = 1e-6);
    }

    #[test]
    fn test_lab_to_xyz() {
        let xyz = lab_to_xyz([41.52787529, 52.63858304, 26.92317922], D65);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-7);
        }
    }

    #[test]
    fn test_dark_values_use_linear_segment() {
        let xyz = [0.001, 0.001, 0.001];
        let back = lab_to_xyz(xyz_to_lab(xyz, D65), D65);
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], xyz[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lchab() {
        let lch = lab_to_lchab([41.52787529, 52.63858304, 26.92317922]);
        assert_abs_diff_eq!(lch[1], 59.12425901, epsilon = 1e-6);
        let lab = lchab_to_lab(lch);
        assert_abs_diff_eq!(lab[1], 52.63858304, epsilon = 1e-9);
    }
}
