//! Optical Society of America Uniform Colour Scales (MacAdam, 1974).
//!
//! Takes CIE XYZ (CIE 1964 10 degree observer) scaled to [0, 100]. Only the
//! forward direction is provided; the inverse has no closed form.

use colour_math::{spow, Mat3};

/// CIE XYZ to the OSA-UCS cone-like RGB.
pub const OSA_UCS_XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [0.799, 0.4194, -0.1648],
    [-0.4493, 1.3265, 0.0927],
    [-0.1149, 0.3394, 0.717],
]);

/// Converts CIE XYZ to OSA-UCS `Ljg`.
///
/// Black maps to NaN, as the chroma scale divides by the lightness term.
pub fn xyz_to_osa_ucs(xyz: [f64; 3]) -> [f64; 3] {
    let [x_t, y_t, z_t] = xyz;
    let sum = x_t + y_t + z_t;
    let (x, y) = (x_t / sum, y_t / sum);

    let y_0 = y_t
        * (4.4934 * x * x + 4.3034 * y * y - 4.276 * x * y - 1.3744 * x - 2.5643 * y + 1.8103);

    let y_e = spow(y_0, 1.0 / 3.0) - 2.0 / 3.0;
    let lambda = 5.9 * (y_e + 0.042 * spow(y_0 - 30.0, 1.0 / 3.0));

    let [r, g, b] = (OSA_UCS_XYZ_TO_RGB * xyz).map(|v| spow(v, 1.0 / 3.0));

    let c = lambda / (5.9 * y_e);
    let l = (lambda - 14.4) / std::f64::consts::SQRT_2;
    let j = c * (1.7 * r + 8.0 * g - 9.7 * b);
    let g = c * (-13.7 * r + 17.7 * g - 4.0 * b);

    [l, j, g]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [20.654008, 12.197225, 5.136952];
    const LJG: [f64; 3] = [-3.0049978998410634, 2.9971369732441917, -9.667842314681636];

    #[test]
    fn test_xyz_to_osa_ucs() {
        let ljg = xyz_to_osa_ucs(XYZ);
        for i in 0..3 {
            assert_abs_diff_eq!(ljg[i], LJG[i], epsilon = 1e-7);
        }
    }

    #[test]
    fn test_scale_dependence() {
        let ljg = xyz_to_osa_ucs(XYZ.map(|v| v / 100.0));
        assert!(ljg[0] < LJG[0]);
    }
}
