//! CIE L*u*v* colourspace, its uniform chromaticity scale and LCHuv.

use crate::cie_lab::{lightness, CIE_E, CIE_K};
use crate::cie_xyy::{xy_to_xyz, xyy_to_xyz};
use crate::common::{jab_to_jch, jch_to_jab};

/// CIE 1976 UCS `u'v'` of CIE XYZ; zero for black.
fn xyz_to_uv_prime(xyz: [f64; 3]) -> [f64; 2] {
    let d = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if d == 0.0 {
        return [0.0, 0.0];
    }
    [4.0 * xyz[0] / d, 9.0 * xyz[1] / d]
}

/// Converts CIE XYZ to CIE L*u*v*.
pub fn xyz_to_luv(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let white = xy_to_xyz(illuminant);
    let l = lightness(xyz[1] / white[1]);
    let [u, v] = xyz_to_uv_prime(xyz);
    let [u_n, v_n] = xyz_to_uv_prime(white);
    [l, 13.0 * l * (u - u_n), 13.0 * l * (v - v_n)]
}

/// Converts CIE L*u*v* to CIE XYZ.
pub fn luv_to_xyz(luv: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0; 3];
    }
    let white = xy_to_xyz(illuminant);
    let [u_n, v_n] = xyz_to_uv_prime(white);

    let y = white[1]
        * if l > CIE_K * CIE_E {
            ((l + 16.0) / 116.0).powi(3)
        } else {
            l / CIE_K
        };

    let a = (52.0 * l / (u + 13.0 * l * u_n) - 1.0) / 3.0;
    let b = -5.0 * y;
    let c = -1.0 / 3.0;
    let d = y * (39.0 * l / (v + 13.0 * l * v_n) - 5.0);

    let x = (d - b) / (a - c);
    let z = x * a + b;
    [x, y, z]
}

/// Returns the `u'v'` chromaticity coordinates of CIE L*u*v*.
pub fn luv_to_uv(luv: [f64; 3], illuminant: [f64; 2]) -> [f64; 2] {
    xyz_to_uv_prime(luv_to_xyz(luv, illuminant))
}

/// Builds CIE L*u*v* from `u'v'` chromaticity coordinates and luminance `y`.
pub fn uv_to_luv(uv: [f64; 2], illuminant: [f64; 2], y: f64) -> [f64; 3] {
    let [x_c, y_c] = luv_uv_to_xy(uv);
    xyz_to_luv(xyy_to_xyz([x_c, y_c, y]), illuminant)
}

/// Converts CIE 1976 UCS `u'v'` to CIE xy.
pub fn luv_uv_to_xy(uv: [f64; 2]) -> [f64; 2] {
    let [u, v] = uv;
    let d = 6.0 * u - 16.0 * v + 12.0;
    [9.0 * u / d, 4.0 * v / d]
}

/// Converts CIE xy to CIE 1976 UCS `u'v'`.
pub fn xy_to_luv_uv(xy: [f64; 2]) -> [f64; 2] {
    let [x, y] = xy;
    let d = -2.0 * x + 12.0 * y + 3.0;
    [4.0 * x / d, 9.0 * y / d]
}

/// Converts CIE L*u*v* to CIE LCHuv.
pub fn luv_to_lchuv(luv: [f64; 3]) -> [f64; 3] {
    jab_to_jch(luv)
}

/// Converts CIE LCHuv to CIE L*u*v*.
pub fn lchuv_to_luv(lchuv: [f64; 3]) -> [f64; 3] {
    jch_to_jab(lchuv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::D65;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];
    const LUV: [f64; 3] = [41.52787529, 96.83626054, 17.75210149];

    #[test]
    fn test_xyz_to_luv() {
        let luv = xyz_to_luv(XYZ, D65);
        for i in 0..3 {
            assert_abs_diff_eq!(luv[i], LUV[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_luv_to_xyz() {
        let xyz = luv_to_xyz(LUV, D65);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], XYZ[i], epsilon = 1e-7);
        }
        assert_eq!(luv_to_xyz([0.0, 0.0, 0.0], D65), [0.0; 3]);
    }

    #[test]
    fn test_uv() {
        let uv = luv_to_uv(LUV, D65);
        assert_abs_diff_eq!(uv[0], 0.37720213, epsilon = 1e-7);
        assert_abs_diff_eq!(uv[1], 0.50120264, epsilon = 1e-7);

        let luv = uv_to_luv(uv, D65, XYZ[1]);
        assert_abs_diff_eq!(luv[1], LUV[1], epsilon = 1e-5);
    }

    #[test]
    fn test_chromaticity_conversions() {
        let xy = luv_uv_to_xy(xy_to_luv_uv([0.54369557, 0.32107944]));
        assert_abs_diff_eq!(xy[0], 0.54369557, epsilon = 1e-12);
        assert_abs_diff_eq!(xy[1], 0.32107944, epsilon = 1e-12);
    }

    #[test]
    fn test_lchuv() {
        let lch = luv_to_lchuv(LUV);
        assert_abs_diff_eq!(lch[1], 98.44997950, epsilon = 1e-6);
        assert_abs_diff_eq!(lch[2], 10.38816348, epsilon = 1e-6);
    }
}
