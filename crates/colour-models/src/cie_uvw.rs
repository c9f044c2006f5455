//! CIE 1964 U*V*W* colourspace.
//!
//! Takes CIE XYZ scaled to [0, 100].

use crate::cie_ucs::{ucs_uv_to_xy, xy_to_ucs_uv};
use crate::cie_xyy::{xyy_to_xyz, xyz_to_xyy};

/// Converts CIE XYZ in [0, 100] to CIE 1964 U*V*W*.
pub fn xyz_to_uvw(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let [x, y, big_y] = xyz_to_xyy(xyz, illuminant);
    let [u, v] = xy_to_ucs_uv([x, y]);
    let [u_0, v_0] = xy_to_ucs_uv(illuminant);

    let w = 25.0 * big_y.cbrt() - 17.0;
    [13.0 * w * (u - u_0), 13.0 * w * (v - v_0), w]
}

/// Converts CIE 1964 U*V*W* to CIE XYZ in [0, 100].
pub fn uvw_to_xyz(uvw: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let [u_big, v_big, w] = uvw;
    let [u_0, v_0] = xy_to_ucs_uv(illuminant);

    let big_y = ((w + 17.0) / 25.0).powi(3);
    let u = u_big / (13.0 * w) + u_0;
    let v = v_big / (13.0 * w) + v_0;
    let [x, y] = ucs_uv_to_xy([u, v]);

    xyy_to_xyz([x, y, big_y])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::D65;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [20.654008, 12.197225, 5.136952];
    const UVW: [f64; 3] = [94.55035725, 11.55536523, 40.54757405];

    #[test]
    fn test_xyz_to_uvw() {
        let uvw = xyz_to_uvw(XYZ, D65);
        for i in 0..3 {
            assert_abs_diff_eq!(uvw[i], UVW[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_uvw_to_xyz() {
        let xyz = uvw_to_xyz(UVW, D65);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-6);
        }
    }
}
