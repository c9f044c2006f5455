//! JzAzBz colourspace (Safdar et al., 2017).
//!
//! Input is CIE XYZ (D65) on an absolute scale where 1.0 is 1 cd/m².

use colour_math::{spow, Mat3};

const B: f64 = 1.15;
const G: f64 = 0.66;
const C_1: f64 = 3424.0 / 4096.0;
const C_2: f64 = 2413.0 / 128.0;
const C_3: f64 = 2392.0 / 128.0;
const N: f64 = 2610.0 / 16384.0;
/// ST 2084 `m2` exponent scaled by 1.7.
const P: f64 = 1.7 * 2523.0 / 32.0;
const D: f64 = -0.56;
const D_0: f64 = 1.6295499532821566e-11;
/// Peak luminance of the perceptual quantizer.
const L_P: f64 = 10000.0;

/// Adjusted CIE XYZ to LMS.
pub const JZAZBZ_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);

/// Non-linear LMS to `Izazbz`.
pub const JZAZBZ_LMS_P_TO_IZAZBZ: Mat3 = Mat3::from_rows([
    [0.5, 0.5, 0.0],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);

fn pq_encode(x: f64) -> f64 {
    let y_p = spow(x / L_P, N);
    spow((C_1 + C_2 * y_p) / (1.0 + C_3 * y_p), P)
}

fn pq_decode(x: f64) -> f64 {
    let v_p = spow(x, 1.0 / P);
    let n = (v_p - C_1).max(0.0);
    L_P * spow(n / (C_2 - C_3 * v_p), 1.0 / N)
}

/// Converts absolute CIE XYZ (D65) to JzAzBz.
pub fn xyz_to_jzazbz(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let x_p = B * x - (B - 1.0) * z;
    let y_p = G * y - (G - 1.0) * x;

    let lms_p = (JZAZBZ_XYZ_TO_LMS * [x_p, y_p, z]).map(pq_encode);
    let [i_z, a_z, b_z] = JZAZBZ_LMS_P_TO_IZAZBZ * lms_p;

    let j_z = ((1.0 + D) * i_z) / (1.0 + D * i_z) - D_0;
    [j_z, a_z, b_z]
}

/// Converts JzAzBz to absolute CIE XYZ (D65).
pub fn jzazbz_to_xyz(jzazbz: [f64; 3]) -> [f64; 3] {
    let (Some(m2_inv), Some(m1_inv)) = (
        JZAZBZ_LMS_P_TO_IZAZBZ.inverse(),
        JZAZBZ_XYZ_TO_LMS.inverse(),
    ) else {
        return [f64::NAN; 3];
    };

    let [j_z, a_z, b_z] = jzazbz;
    let i_z = (j_z + D_0) / (1.0 + D - D * (j_z + D_0));

    let lms = (m2_inv * [i_z, a_z, b_z]).map(pq_decode);
    let [x_p, y_p, z_p] = m1_inv * lms;

    let x = (x_p + (B - 1.0) * z_p) / B;
    let y = (y_p + (G - 1.0) * x) / G;
    [x, y, z_p]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];
    const JZAZBZ: [f64; 3] = [0.00535048, 0.00924302, 0.00526007];

    #[test]
    fn test_xyz_to_jzazbz() {
        let jab = xyz_to_jzazbz(XYZ);
        for i in 0..3 {
            assert_abs_diff_eq!(jab[i], JZAZBZ[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_out_of_gamut_stays_finite() {
        let jab = xyz_to_jzazbz([0.0, 0.0, 0.1]);
        assert!(jab.iter().all(|v| v.is_finite()), "{jab:?}");
        let jab = xyz_to_jzazbz([-0.05, 0.1, 0.2]);
        assert!(jab.iter().all(|v| v.is_finite()), "{jab:?}");

        let xyz = jzazbz_to_xyz([0.0, 0.01, -0.01]);
        assert!(xyz.iter().all(|v| v.is_finite()), "{xyz:?}");
        let xyz = jzazbz_to_xyz([-0.01, 0.0, 0.0]);
        assert!(xyz.iter().all(|v| v.is_finite()), "{xyz:?}");
    }

    #[test]
    fn test_round_trip() {
        let xyz = jzazbz_to_xyz(xyz_to_jzazbz(XYZ));
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-8);
        }
    }
}
