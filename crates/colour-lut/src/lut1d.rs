//! 1-dimensional lookup table.
//!
//! A 1D LUT applies a single transfer function to scalar values.
//! Common uses include:
//! - Transfer functions (log to linear, gamma)
//! - Contrast curves
//! - Shapers ahead of a 3D LUT

use serde::Serialize;
use std::fmt;

use colour_utils::array::linspace;

use crate::common::{default_name, format_domain_1, validate_domain_1, write_summary};
use crate::interp::{interpolate_sorted, interpolate_uniform};
use crate::{Extrapolation, LutError, LutResult};

/// A 1-dimensional lookup table.
///
/// Table entries are placed uniformly over `domain`. Values in between are
/// interpolated linearly, values outside are extrapolated according to
/// [`Extrapolation`].
///
/// # Example
///
/// ```rust
/// use colour_lut::Lut1D;
///
/// let lut = Lut1D::identity(16)?.powf(2.0);
/// assert!((lut.apply(0.5) - 0.2511).abs() < 1e-3);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Lut1D {
    table: Vec<f64>,
    domain: [f64; 2],
    /// LUT name.
    pub name: String,
    /// Free-form comments, one entry per line.
    pub comments: Vec<String>,
    /// Behaviour outside the domain.
    pub extrapolation: Extrapolation,
}

impl Lut1D {
    /// Returns `size` samples spread uniformly over `domain`.
    pub fn linear_table(size: usize, domain: [f64; 2]) -> Vec<f64> {
        linspace(domain[0], domain[1], size)
    }

    /// Creates a LUT from a table sampled uniformly over `domain`.
    ///
    /// Fails if the table holds fewer than two entries or the domain is not
    /// strictly increasing.
    pub fn new(table: Vec<f64>, domain: [f64; 2]) -> LutResult<Self> {
        if table.len() < 2 {
            return Err(LutError::InvalidSize(format!(
                "1D table needs at least 2 entries, got {}",
                table.len()
            )));
        }
        validate_domain_1(domain)?;
        Ok(Self {
            name: default_name(table.len()),
            table,
            domain,
            comments: Vec::new(),
            extrapolation: Extrapolation::default(),
        })
    }

    /// Creates an identity LUT over [0, 1].
    pub fn identity(size: usize) -> LutResult<Self> {
        Self::new(Self::linear_table(size, [0.0, 1.0]), [0.0, 1.0])
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

    /// Table entries.
    #[inline]
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// Input domain as `[min, max]`.
    #[inline]
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Always 1.
    #[inline]
    pub fn dimensions(&self) -> usize {
        1
    }

    /// Number of table entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Whether the domain is [0, 1].
    pub fn is_domain_default(&self) -> bool {
        self.domain == [0.0, 1.0]
    }

    /// Input positions of the table entries.
    pub fn samples(&self) -> Vec<f64> {
        Self::linear_table(self.size(), self.domain)
    }

    /// Applies the LUT to a single value.
    pub fn apply(&self, value: f64) -> f64 {
        interpolate_uniform(&self.table, self.domain, value, self.extrapolation)
    }

    /// Applies the LUT to every value of a slice.
    pub fn apply_slice(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }

    /// Raises every table entry to `exponent`.
    pub fn powf(mut self, exponent: f64) -> Self {
        self.map_values(|_, v| v.powf(exponent));
        self
    }

    /// Maps every table entry in place; the channel index is always 0.
    pub(crate) fn map_values(&mut self, f: impl Fn(usize, f64) -> f64) {
        for v in &mut self.table {
            *v = f(0, *v);
        }
    }

    /// Combines two LUTs entry by entry.
    ///
    /// Both tables must hold the same number of entries. The result keeps
    /// the domain and metadata of `self`.
    pub fn combine(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> LutResult<Self> {
        if self.size() != other.size() {
            return Err(LutError::InvalidSize(format!(
                "cannot combine 1D tables of sizes {} and {}",
                self.size(),
                other.size()
            )));
        }
        let mut lut = self.clone();
        for (a, &b) in lut.table.iter_mut().zip(&other.table) {
            *a = f(*a, b);
        }
        Ok(lut)
    }

    /// Inverts a monotonically increasing LUT.
    ///
    /// The inverse has the same size and its domain is the output range of
    /// `self`.
    pub fn invert(&self) -> LutResult<Self> {
        if !self.table.windows(2).all(|w| w[0] < w[1]) {
            return Err(LutError::UnsupportedLut(
                "only strictly increasing 1D tables can be inverted".into(),
            ));
        }
        let size = self.size();
        let domain = [self.table[0], self.table[size - 1]];
        let samples = self.samples();
        let table = Self::linear_table(size, domain)
            .into_iter()
            .map(|x| interpolate_sorted(&self.table, &samples, x))
            .collect();

        Ok(Self::new(table, domain)?
            .with_name(format!("{} - Inverse", self.name))
            .with_comments(self.comments.clone())
            .with_extrapolation(self.extrapolation))
    }
}

impl PartialEq for Lut1D {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.domain == other.domain
    }
}

impl fmt::Display for Lut1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(
            f,
            "LUT1D",
            &self.name,
            self.dimensions(),
            &format_domain_1(self.domain),
            &format!("({},)", self.size()),
            &self.comments,
        )
    }
}
