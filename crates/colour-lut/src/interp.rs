//! Interpolation and extrapolation methods for LUT evaluation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::LutError;

/// Interpolation method for 3D LUT evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Nearest neighbor (no interpolation).
    Nearest,

    /// Trilinear interpolation.
    #[default]
    Linear,

    /// Tetrahedral interpolation.
    Tetrahedral,
}

impl FromStr for Interpolation {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "linear" | "trilinear" => Ok(Self::Linear),
            "tetrahedral" => Ok(Self::Tetrahedral),
            other => Err(LutError::UnsupportedLut(format!(
                "unknown interpolation method: {other}"
            ))),
        }
    }
}

/// Behaviour of 1D and 3x1D LUTs outside their domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Hold the first / last table value.
    Constant,

    /// Continue the slope of the first / last table segment.
    #[default]
    Linear,
}

/// Samples a table whose entries sit uniformly over `domain`.
///
/// `table` must hold at least two entries.
pub(crate) fn interpolate_uniform(
    table: &[f64],
    domain: [f64; 2],
    x: f64,
    extrapolation: Extrapolation,
) -> f64 {
    let last = table.len() - 1;
    let t = (x - domain[0]) / (domain[1] - domain[0]) * last as f64;

    if t < 0.0 {
        return match extrapolation {
            Extrapolation::Constant => table[0],
            Extrapolation::Linear => table[0] + (table[1] - table[0]) * t,
        };
    }
    if t > last as f64 {
        return match extrapolation {
            Extrapolation::Constant => table[last],
            Extrapolation::Linear => {
                table[last] + (table[last] - table[last - 1]) * (t - last as f64)
            }
        };
    }

    let i = (t.floor() as usize).min(last - 1);
    colour_math::lerp(table[i], table[i + 1], t - i as f64)
}

/// Linear interpolation of `x` over strictly increasing sample positions.
///
/// Values outside `[xs[0], xs[last]]` are clamped.
pub(crate) fn interpolate_sorted(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    let i = xs.partition_point(|&v| v <= x).clamp(1, last) - 1;
    let t = colour_math::inverse_lerp(xs[i], xs[i + 1], x);
    colour_math::lerp(ys[i], ys[i + 1], t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TABLE: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    #[test]
    fn test_inside_domain() {
        let x = interpolate_uniform(&TABLE, [0.0, 1.0], 0.6, Extrapolation::Linear);
        assert_abs_diff_eq!(x, 0.6, epsilon = 1e-12);
        let x = interpolate_uniform(&TABLE, [0.0, 2.0], 1.0, Extrapolation::Linear);
        assert_abs_diff_eq!(x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation() {
        let x = interpolate_uniform(&TABLE, [0.0, 1.0], 1.5, Extrapolation::Linear);
        assert_abs_diff_eq!(x, 1.5, epsilon = 1e-12);
        let x = interpolate_uniform(&TABLE, [0.0, 1.0], -0.5, Extrapolation::Linear);
        assert_abs_diff_eq!(x, -0.5, epsilon = 1e-12);

        assert_eq!(interpolate_uniform(&TABLE, [0.0, 1.0], 1.5, Extrapolation::Constant), 1.0);
        assert_eq!(interpolate_uniform(&TABLE, [0.0, 1.0], -0.5, Extrapolation::Constant), 0.0);
    }

    #[test]
    fn test_sorted() {
        let xs = [0.0, 0.1, 0.5, 1.0];
        let ys = [0.0, 1.0, 2.0, 3.0];
        assert_abs_diff_eq!(interpolate_sorted(&xs, &ys, 0.3), 1.5, epsilon = 1e-12);
        assert_eq!(interpolate_sorted(&xs, &ys, 0.5), 2.0);
        assert_eq!(interpolate_sorted(&xs, &ys, 2.0), 3.0);
    }

    #[test]
    fn test_parse_interpolation() {
        assert_eq!("Trilinear".parse::<Interpolation>().unwrap(), Interpolation::Linear);
        assert_eq!("tetrahedral".parse::<Interpolation>().unwrap(), Interpolation::Tetrahedral);
        assert!("cubic".parse::<Interpolation>().is_err());
    }
}
