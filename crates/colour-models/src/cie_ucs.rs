//! CIE 1960 UCS colourspace.

use crate::common::sum3;

/// Converts CIE XYZ to CIE 1960 UCS `UVW`.
pub fn xyz_to_ucs(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    [2.0 / 3.0 * x, y, 0.5 * (-x + 3.0 * y + z)]
}

/// Converts CIE 1960 UCS `UVW` to CIE XYZ.
pub fn ucs_to_xyz(ucs: [f64; 3]) -> [f64; 3] {
    let [u, v, w] = ucs;
    [1.5 * u, v, 1.5 * u - 3.0 * v + 2.0 * w]
}

/// Returns the `uv` chromaticity coordinates of CIE 1960 UCS.
pub fn ucs_to_uv(ucs: [f64; 3]) -> [f64; 2] {
    let sum = sum3(ucs);
    if sum == 0.0 {
        return [0.0, 0.0];
    }
    [ucs[0] / sum, ucs[1] / sum]
}

/// Builds CIE 1960 UCS from `uv` chromaticity coordinates and `V`.
pub fn uv_to_ucs(uv: [f64; 2], v_big: f64) -> [f64; 3] {
    let [u, v] = uv;
    [v_big * u / v, v_big, -v_big * (u + v - 1.0) / v]
}

/// Converts CIE 1960 UCS `uv` to CIE xy.
pub fn ucs_uv_to_xy(uv: [f64; 2]) -> [f64; 2] {
    let [u, v] = uv;
    let d = 2.0 * u - 8.0 * v + 4.0;
    [3.0 * u / d, 2.0 * v / d]
}

/// Converts CIE xy to CIE 1960 UCS `uv`.
pub fn xy_to_ucs_uv(xy: [f64; 2]) -> [f64; 2] {
    let [x, y] = xy;
    let d = -2.0 * x + 12.0 * y + 3.0;
    [4.0 * x / d, 6.0 * y / d]
}
