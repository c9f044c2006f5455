//! 3x1D lookup table: one curve per RGB channel.

use serde::Serialize;
use std::fmt;

use crate::common::{
    channel_domain, default_name, format_domain_3, validate_domain_3, write_summary,
    DEFAULT_DOMAIN_3,
};
use crate::interp::{interpolate_sorted, interpolate_uniform};
use crate::{Extrapolation, Lut1D, LutError, LutResult};

/// A 3x1D lookup table.
///
/// Each row of `table` holds the red, green and blue outputs for one sample
/// position. Every channel has its own domain.
#[derive(Debug, Clone, Serialize)]
pub struct Lut2D {
    table: Vec<[f64; 3]>,
    domain: [[f64; 3]; 2],
    /// LUT name.
    pub name: String,
    /// Free-form comments, one entry per line.
    pub comments: Vec<String>,
    /// Behaviour outside the domain.
    pub extrapolation: Extrapolation,
}

impl Lut2D {
    /// Returns `size` rows spread uniformly over each channel's domain.
    pub fn linear_table(size: usize, domain: [[f64; 3]; 2]) -> Vec<[f64; 3]> {
        let channels: [Vec<f64>; 3] =
            std::array::from_fn(|c| Lut1D::linear_table(size, channel_domain(domain, c)));
        (0..size)
            .map(|i| [channels[0][i], channels[1][i], channels[2][i]])
            .collect()
    }

    /// Creates a LUT from per-channel curves sampled uniformly over `domain`.
    pub fn new(table: Vec<[f64; 3]>, domain: [[f64; 3]; 2]) -> LutResult<Self> {
        if table.len() < 2 {
            return Err(LutError::InvalidSize(format!(
                "3x1D table needs at least 2 rows, got {}",
                table.len()
            )));
        }
        validate_domain_3(domain)?;
        Ok(Self {
            name: default_name(table.len()),
            table,
            domain,
            comments: Vec::new(),
            extrapolation: Extrapolation::default(),
        })
    }

    /// Tiles a 1D curve over the three channels, keeping its metadata.
    pub fn from_curve(curve: &Lut1D) -> Self {
        let [min, max] = curve.domain();
        Self {
            table: curve.table().iter().map(|&v| [v; 3]).collect(),
            domain: [[min; 3], [max; 3]],
            name: curve.name.clone(),
            comments: curve.comments.clone(),
            extrapolation: curve.extrapolation,
        }
    }

    /// Creates an identity LUT over [0, 1] on every channel.
    pub fn identity(size: usize) -> LutResult<Self> {
        Self::new(Self::linear_table(size, DEFAULT_DOMAIN_3), DEFAULT_DOMAIN_3)
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Sets the extrapolation method.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Table rows.
    #[inline]
    pub fn table(&self) -> &[[f64; 3]] {
        &self.table
    }

    /// Input domain: row 0 holds the minimum, row 1 the maximum.
    #[inline]
    pub fn domain(&self) -> [[f64; 3]; 2] {
        self.domain
    }

    /// Always 2.
    #[inline]
    pub fn dimensions(&self) -> usize {
        2
    }

    /// Number of table rows.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Whether every channel's domain is [0, 1].
    pub fn is_domain_default(&self) -> bool {
        self.domain == DEFAULT_DOMAIN_3
    }

    /// Input positions of the table rows.
    pub fn samples(&self) -> Vec<[f64; 3]> {
        Self::linear_table(self.size(), self.domain)
    }

    /// Table column of one channel.
    pub fn channel(&self, channel: usize) -> Vec<f64> {
        self.table.iter().map(|row| row[channel]).collect()
    }

    /// Applies the LUT to an RGB triplet.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let channels: [Vec<f64>; 3] = std::array::from_fn(|c| self.channel(c));
        self.apply_with(&channels, rgb)
    }

    /// Applies the LUT to every triplet of a slice.
    pub fn apply_slice(&self, values: &[[f64; 3]]) -> Vec<[f64; 3]> {
        let channels: [Vec<f64>; 3] = std::array::from_fn(|c| self.channel(c));
        values.iter().map(|&rgb| self.apply_with(&channels, rgb)).collect()
    }

    fn apply_with(&self, channels: &[Vec<f64>; 3], rgb: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|c| {
            interpolate_uniform(
                &channels[c],
                channel_domain(self.domain, c),
                rgb[c],
                self.extrapolation,
            )
        })
    }

    /// Raises every table entry to `exponent`.
    pub fn powf(mut self, exponent: f64) -> Self {
        self.map_values(|_, v| v.powf(exponent));
        self
    }

    /// Maps every table entry in place, passing its channel index.
    pub(crate) fn map_values(&mut self, f: impl Fn(usize, f64) -> f64) {
        for row in &mut self.table {
            for (c, v) in row.iter_mut().enumerate() {
                *v = f(c, *v);
            }
        }
    }

    /// Combines two LUTs entry by entry.
    ///
    /// Both tables must hold the same number of rows.
    pub fn combine(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> LutResult<Self> {
        if self.size() != other.size() {
            return Err(LutError::InvalidSize(format!(
                "cannot combine 3x1D tables of sizes {} and {}",
                self.size(),
                other.size()
            )));
        }
        let mut lut = self.clone();
        for (a, b) in lut.table.iter_mut().zip(&other.table) {
            for c in 0..3 {
                a[c] = f(a[c], b[c]);
            }
        }
        Ok(lut)
    }

    /// Inverts a LUT whose every channel is strictly increasing.
    pub fn invert(&self) -> LutResult<Self> {
        let size = self.size();
        let channels: [Vec<f64>; 3] = std::array::from_fn(|c| self.channel(c));
        if !channels.iter().all(|ch| ch.windows(2).all(|w| w[0] < w[1])) {
            return Err(LutError::UnsupportedLut(
                "only strictly increasing 3x1D tables can be inverted".into(),
            ));
        }

        let domain = [
            std::array::from_fn(|c| channels[c][0]),
            std::array::from_fn(|c| channels[c][size - 1]),
        ];
        let inverted: [Vec<f64>; 3] = std::array::from_fn(|c| {
            let samples = Lut1D::linear_table(size, channel_domain(self.domain, c));
            Lut1D::linear_table(size, channel_domain(domain, c))
                .into_iter()
                .map(|x| interpolate_sorted(&channels[c], &samples, x))
                .collect()
        });
        let table = (0..size)
            .map(|i| [inverted[0][i], inverted[1][i], inverted[2][i]])
            .collect();

        Ok(Self::new(table, domain)?
            .with_name(format!("{} - Inverse", self.name))
            .with_comments(self.comments.clone())
            .with_extrapolation(self.extrapolation))
    }
}

impl PartialEq for Lut2D {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.domain == other.domain
    }
}

impl fmt::Display for Lut2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(
            f,
            "LUT2D",
            &self.name,
            self.dimensions(),
            &format_domain_3(self.domain),
            &format!("({}, 3)", self.size()),
            &self.comments,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_table() {
        let table = Lut2D::linear_table(3, [[0.0, -1.0, 0.0], [1.0, 1.0, 4.0]]);
        assert_eq!(table, vec![[0.0, -1.0, 0.0], [0.5, 0.0, 2.0], [1.0, 1.0, 4.0]]);
    }

    #[test]
    fn test_apply_per_channel() {
        let lut = Lut2D::identity(32).unwrap().powf(2.0);
        let out = lut.apply([0.0, 0.5, 1.0]);
        assert_abs_diff_eq!(out[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 0.25, epsilon = 1e-3);
        assert_abs_diff_eq!(out[2], 1.0, epsilon = 1e-12);
        assert_eq!(lut.apply_slice(&[[0.0, 0.5, 1.0]]), vec![out]);
    }

    #[test]
    fn test_domain_per_channel() {
        let domain = [[-0.1, -0.2, -0.4], [1.5, 1.0, 0.5]];
        let lut = Lut2D::new(Lut2D::linear_table(16, domain), domain).unwrap();
        let out = lut.apply([1.2, -0.1, 0.3]);
        for (a, b) in out.iter().zip([1.2, -0.1, 0.3]) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_domain() {
        let domain = [[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
        assert!(matches!(
            Lut2D::new(Lut2D::linear_table(4, DEFAULT_DOMAIN_3), domain),
            Err(LutError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_invert() {
        let lut = Lut2D::identity(1024).unwrap().powf(2.0);
        let inverse = lut.invert().unwrap();
        let out = inverse.apply([0.25, 0.04, 0.81]);
        assert_abs_diff_eq!(out[0], 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(out[1], 0.2, epsilon = 1e-3);
        assert_abs_diff_eq!(out[2], 0.9, epsilon = 1e-4);
    }

    #[test]
    fn test_display() {
        let lut = Lut2D::identity(32).unwrap().with_name("Nemo");
        let expected = "LUT2D - Nemo\n\
                        ------------\n\
                        \n\
                        Dimensions : 2\n\
                        Domain     : [[0 0 0]\n              [1 1 1]]\n\
                        Size       : (32, 3)";
        assert_eq!(lut.to_string(), expected);
    }
}
