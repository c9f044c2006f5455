//! Hunter L,a,b colour scale.
//!
//! Takes CIE XYZ scaled to [0, 100].

use crate::illuminants::HunterLabReference;

/// Hunter Lab reference white and coefficients for CIE Illuminant D65.
pub const HUNTER_LAB_D65: HunterLabReference = HunterLabReference {
    xyz_n: [95.02, 100.0, 108.82],
    k_ab: [172.30, 67.20],
};

/// Computes the `K_a` and `K_b` chromaticity coefficients of a reference white.
pub fn xyz_to_k_ab_hunter_lab_1966(xyz_n: [f64; 3]) -> [f64; 2] {
    [
        175.0 * (xyz_n[0] / 98.043).sqrt(),
        70.0 * (xyz_n[2] / 118.115).sqrt(),
    ]
}

/// Converts CIE XYZ to Hunter Lab.
///
/// When `k_ab` is `None` the coefficients derive from `xyz_n`.
pub fn xyz_to_hunter_lab(xyz: [f64; 3], xyz_n: [f64; 3], k_ab: Option<[f64; 2]>) -> [f64; 3] {
    let [k_a, k_b] = k_ab.unwrap_or_else(|| xyz_to_k_ab_hunter_lab_1966(xyz_n));
    let [x_r, y_r, z_r] = [0, 1, 2].map(|i| xyz[i] / xyz_n[i]);

    let y_r_sqrt = y_r.sqrt();
    if y_r_sqrt == 0.0 {
        return [0.0; 3];
    }

    [
        100.0 * y_r_sqrt,
        k_a * ((x_r - y_r) / y_r_sqrt),
        k_b * ((y_r - z_r) / y_r_sqrt),
    ]
}

/// Converts Hunter Lab to CIE XYZ.
pub fn hunter_lab_to_xyz(lab: [f64; 3], xyz_n: [f64; 3], k_ab: Option<[f64; 2]>) -> [f64; 3] {
    let [k_a, k_b] = k_ab.unwrap_or_else(|| xyz_to_k_ab_hunter_lab_1966(xyz_n));
    let [l, a, b] = lab;

    let l_100 = l / 100.0;
    let l_100_2 = l_100 * l_100;

    [
        (a / k_a * l_100 + l_100_2) * xyz_n[0],
        l_100_2 * xyz_n[1],
        -(b / k_b * l_100 - l_100_2) * xyz_n[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::hunter_lab_illuminant;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [20.654008, 12.197225, 5.136952];
    const LAB: [f64; 3] = [34.92452577, 47.06189858, 14.38615107];

    #[test]
    fn test_k_ab() {
        let k_ab = xyz_to_k_ab_hunter_lab_1966(HUNTER_LAB_D65.xyz_n);
        assert_abs_diff_eq!(k_ab[0], 172.28095317, epsilon = 1e-6);
        assert_abs_diff_eq!(k_ab[1], 67.18926243, epsilon = 1e-6);
    }

    #[test]
    fn test_xyz_to_hunter_lab() {
        let d65 = HUNTER_LAB_D65;
        let lab = xyz_to_hunter_lab(XYZ, d65.xyz_n, Some(d65.k_ab));
        for i in 0..3 {
            assert_abs_diff_eq!(lab[i], LAB[i], epsilon = 1e-6);
        }
        assert_eq!(hunter_lab_illuminant("d65").unwrap(), d65);
    }

    #[test]
    fn test_hunter_lab_to_xyz() {
        let d65 = HUNTER_LAB_D65;
        let xyz = hunter_lab_to_xyz(LAB, d65.xyz_n, Some(d65.k_ab));
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_derived_coefficients_round_trip() {
        let xyz_n = HUNTER_LAB_D65.xyz_n;
        let lab = xyz_to_hunter_lab(XYZ, xyz_n, None);
        let xyz = hunter_lab_to_xyz(lab, xyz_n, None);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-9);
        }
    }
}
