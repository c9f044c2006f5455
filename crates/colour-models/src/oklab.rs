//! Oklab colourspace (Ottosson, 2020).

use colour_math::{spow3, Mat3};

/// CIE XYZ (D65) to LMS.
pub const OKLAB_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Non-linear LMS to Oklab.
pub const OKLAB_LMS_P_TO_LAB: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Converts CIE XYZ (D65) to Oklab.
pub fn xyz_to_oklab(xyz: [f64; 3]) -> [f64; 3] {
    let lms = OKLAB_XYZ_TO_LMS * xyz;
    OKLAB_LMS_P_TO_LAB * spow3(lms, 1.0 / 3.0)
}

/// Converts Oklab to CIE XYZ (D65).
pub fn oklab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let (Some(m2_inv), Some(m1_inv)) = (OKLAB_LMS_P_TO_LAB.inverse(), OKLAB_XYZ_TO_LMS.inverse())
    else {
        return [f64::NAN; 3];
    };
    m1_inv * spow3(m2_inv * lab, 3.0)
}
