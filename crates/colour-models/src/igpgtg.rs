//! IgPgTg colourspace (Hellwig and Fairchild, 2020).
//!
//! Input is CIE XYZ (D65) in [0, 1].

use colour_math::{spow, Mat3};

/// CIE XYZ to LMS.
pub const IGPGTG_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [2.968, 2.741, -0.649],
    [1.237, 5.969, -0.173],
    [-0.318, 0.387, 2.311],
]);

/// Non-linear LMS to IgPgTg.
pub const IGPGTG_LMS_P_TO_IGPGTG: Mat3 = Mat3::from_rows([
    [0.117, 1.464, 0.130],
    [8.285, -8.361, 21.400],
    [-1.208, 2.412, -36.530],
]);

const LMS_SCALE: [f64; 3] = [18.36, 21.46, 19435.0];
const EXPONENT: f64 = 0.427;

/// Converts CIE XYZ (D65) to IgPgTg.
pub fn xyz_to_igpgtg(xyz: [f64; 3]) -> [f64; 3] {
    let lms = IGPGTG_XYZ_TO_LMS * xyz;
    let lms_p = [0, 1, 2].map(|i| spow(lms[i] / LMS_SCALE[i], EXPONENT));
    IGPGTG_LMS_P_TO_IGPGTG * lms_p
}

/// Converts IgPgTg to CIE XYZ (D65).
pub fn igpgtg_to_xyz(igpgtg: [f64; 3]) -> [f64; 3] {
    let (Some(m2_inv), Some(m1_inv)) = (
        IGPGTG_LMS_P_TO_IGPGTG.inverse(),
        IGPGTG_XYZ_TO_LMS.inverse(),
    ) else {
        return [f64::NAN; 3];
    };

    let lms_p = m2_inv * igpgtg;
    let lms = [0, 1, 2].map(|i| spow(lms_p[i], 1.0 / EXPONENT) * LMS_SCALE[i]);
    m1_inv * lms
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];
    const IGPGTG: [f64; 3] = [0.42421258433245673, 0.1863249087444396, 0.10689223350653099];

    #[test]
    fn test_xyz_to_igpgtg() {
        let igpgtg = xyz_to_igpgtg(XYZ);
        for i in 0..3 {
            assert_abs_diff_eq!(igpgtg[i], IGPGTG[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_round_trip() {
        let xyz = igpgtg_to_xyz(IGPGTG);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_black() {
        assert_eq!(xyz_to_igpgtg([0.0; 3]), [0.0; 3]);
    }
}
