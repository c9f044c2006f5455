//! Hunter Rd,a,b colour scale.
//!
//! Takes CIE XYZ scaled to [0, 100].

use crate::hunter_lab::xyz_to_k_ab_hunter_lab_1966;

fn chromaticity_factor(y: f64) -> f64 {
    0.51 * ((21.0 + 0.2 * y) / (1.0 + 0.2 * y))
}

/// Converts CIE XYZ to Hunter Rdab.
///
/// When `k_ab` is `None` the coefficients derive from `xyz_n`.
pub fn xyz_to_hunter_rdab(xyz: [f64; 3], xyz_n: [f64; 3], k_ab: Option<[f64; 2]>) -> [f64; 3] {
    let [k_a, k_b] = k_ab.unwrap_or_else(|| xyz_to_k_ab_hunter_lab_1966(xyz_n));
    let [x_r, y_r, z_r] = [0, 1, 2].map(|i| xyz[i] / xyz_n[i]);
    let f = chromaticity_factor(xyz[1]);

    [xyz[1], k_a * f * (x_r - y_r), k_b * f * (y_r - z_r)]
}

/// Converts Hunter Rdab to CIE XYZ.
pub fn hunter_rdab_to_xyz(rdab: [f64; 3], xyz_n: [f64; 3], k_ab: Option<[f64; 2]>) -> [f64; 3] {
    let [k_a, k_b] = k_ab.unwrap_or_else(|| xyz_to_k_ab_hunter_lab_1966(xyz_n));
    let [r_d, a, b] = rdab;
    let f = chromaticity_factor(r_d);
    let y_r = r_d / xyz_n[1];

    [
        (a / (k_a * f) + y_r) * xyz_n[0],
        r_d,
        -(b / (k_b * f) - y_r) * xyz_n[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunter_lab::HUNTER_LAB_D65;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [20.654008, 12.197225, 5.136952];
    const RDAB: [f64; 3] = [12.197225, 57.125378739675504, 17.46241340644343];

    #[test]
    fn test_xyz_to_hunter_rdab() {
        let d65 = HUNTER_LAB_D65;
        let rdab = xyz_to_hunter_rdab(XYZ, d65.xyz_n, Some(d65.k_ab));
        for i in 0..3 {
            assert_abs_diff_eq!(rdab[i], RDAB[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_derived_coefficients() {
        let d65 = HUNTER_LAB_D65;
        let derived = xyz_to_hunter_rdab(XYZ, d65.xyz_n, None);
        let k_ab = xyz_to_k_ab_hunter_lab_1966(d65.xyz_n);
        assert_eq!(derived, xyz_to_hunter_rdab(XYZ, d65.xyz_n, Some(k_ab)));
        assert_abs_diff_eq!(derived[1], RDAB[1], epsilon = 0.01);
    }

    #[test]
    fn test_round_trip() {
        let d65 = HUNTER_LAB_D65;
        let xyz = hunter_rdab_to_xyz(RDAB, d65.xyz_n, Some(d65.k_ab));
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-6);
        }
    }
}
