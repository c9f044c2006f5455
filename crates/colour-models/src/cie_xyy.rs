//! CIE xyY colourspace and chromaticity coordinates.

use crate::common::sum3;

/// Converts CIE XYZ to CIE xyY.
///
/// Black (`X + Y + Z == 0`) takes the chromaticity of `illuminant`.
pub fn xyz_to_xyy(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let sum = sum3(xyz);
    if sum == 0.0 {
        return [illuminant[0], illuminant[1], xyz[1]];
    }
    [xyz[0] / sum, xyz[1] / sum, xyz[1]]
}

/// Converts CIE xyY to CIE XYZ.
///
/// Returns zeros when `y == 0`.
pub fn xyy_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    let [x, y, big_y] = xyy;
    if y == 0.0 {
        return [0.0; 3];
    }
    [x * big_y / y, big_y, (1.0 - x - y) * big_y / y]
}

/// Extends chromaticity coordinates to xyY with `Y = 1`.
pub fn xy_to_xyy(xy: [f64; 2]) -> [f64; 3] {
    [xy[0], xy[1], 1.0]
}

/// Drops the luminance of a CIE xyY triplet.
pub fn xyy_to_xy(xyy: [f64; 3]) -> [f64; 2] {
    [xyy[0], xyy[1]]
}

/// Converts chromaticity coordinates to CIE XYZ with `Y = 1`.
///
/// ```rust
/// use colour_models::cie_xyy::xy_to_xyz;
/// use colour_models::illuminants::D65;
///
/// let white = xy_to_xyz(D65);
/// assert_eq!(white[1], 1.0);
/// assert!((white[0] - 0.95045593).abs() < 1e-8);
/// ```
pub fn xy_to_xyz(xy: [f64; 2]) -> [f64; 3] {
    xyy_to_xyz(xy_to_xyy(xy))
}

/// Returns the chromaticity coordinates of CIE XYZ.
pub fn xyz_to_xy(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 2] {
    xyy_to_xy(xyz_to_xyy(xyz, illuminant))
}
