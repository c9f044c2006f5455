//! IPT colourspace (Ebner and Fairchild, 1998).

use crate::common::hue_degrees;
use colour_math::{spow3, Mat3};

/// CIE XYZ (D65) to LMS cone responses.
pub const IPT_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0, 0.0, 0.9184],
]);

/// Non-linear LMS to IPT.
pub const IPT_LMS_P_TO_IPT: Mat3 = Mat3::from_rows([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

/// Cone response compression exponent.
const IPT_EXPONENT: f64 = 0.43;

/// Converts CIE XYZ (D65) to IPT.
pub fn xyz_to_ipt(xyz: [f64; 3]) -> [f64; 3] {
    let lms = IPT_XYZ_TO_LMS * xyz;
    IPT_LMS_P_TO_IPT * spow3(lms, IPT_EXPONENT)
}

/// Converts IPT to CIE XYZ (D65).
///
/// Returns NaN components if either matrix is singular.
pub fn ipt_to_xyz(ipt: [f64; 3]) -> [f64; 3] {
    let (Some(m2_inv), Some(m1_inv)) = (IPT_LMS_P_TO_IPT.inverse(), IPT_XYZ_TO_LMS.inverse())
    else {
        return [f64::NAN; 3];
    };
    let lms_p = m2_inv * ipt;
    m1_inv * spow3(lms_p, 1.0 / IPT_EXPONENT)
}

/// Hue angle of IPT in degrees, wrapped to [0, 360).
pub fn ipt_hue_angle(ipt: [f64; 3]) -> f64 {
    hue_degrees(ipt[1], ipt[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];
    const IPT: [f64; 3] = [0.38426191, 0.38487306, 0.18886838];

    #[test]
    fn test_xyz_to_ipt() {
        let ipt = xyz_to_ipt(XYZ);
        for i in 0..3 {
            assert_abs_diff_eq!(ipt[i], IPT[i], epsilon = 1e-7);
        }
    }

    #[test]
    fn test_ipt_to_xyz() {
        let xyz = ipt_to_xyz(IPT);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-7);
        }
    }

    #[test]
    fn test_hue_angle() {
        assert_abs_diff_eq!(ipt_hue_angle(IPT), 26.13852661, epsilon = 1e-6);
    }
}
