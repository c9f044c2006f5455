//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of colour values.
//! Common uses include:
//! - Colour grading / look development
//! - Display calibration
//! - Gamut mapping

use serde::Serialize;
use std::fmt;

use crate::common::{
    channel_domain, default_name, format_domain_3, validate_domain_3, write_summary,
    DEFAULT_DOMAIN_3,
};
use crate::{Interpolation, Lut1D, Lut2D, LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// Stores a cube of RGB values indexed by input RGB.
///
/// # Structure
///
/// - `size^3` entries, each holding RGB output values
/// - Stored red slowest, blue fastest: `table[(r * size + g) * size + b]`
/// - Inputs are normalised to the domain and clamped to the cube
///
/// # Example
///
/// ```rust
/// use colour_lut::{Interpolation, Lut3D};
///
/// let lut = Lut3D::identity(33)?.with_interpolation(Interpolation::Tetrahedral);
/// let out = lut.apply([0.5, 0.3, 0.2]);
/// assert!((out[1] - 0.3).abs() < 1e-9);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Lut3D {
    table: Vec<[f64; 3]>,
    size: usize,
    domain: [[f64; 3]; 2],
    /// LUT name.
    pub name: String,
    /// Free-form comments, one entry per line.
    pub comments: Vec<String>,
    /// Interpolation method.
    pub interpolation: Interpolation,
}

impl Lut3D {
    /// Returns the identity cube sampled over `domain`, red slowest.
    pub fn linear_table(size: usize, domain: [[f64; 3]; 2]) -> Vec<[f64; 3]> {
        let axes: [Vec<f64>; 3] =
            std::array::from_fn(|c| Lut1D::linear_table(size, channel_domain(domain, c)));
        let mut table = Vec::with_capacity(size * size * size);
        for &r in &axes[0] {
            for &g in &axes[1] {
                for &b in &axes[2] {
                    table.push([r, g, b]);
                }
            }
        }
        table
    }

    /// Creates a LUT from a cube of `size^3` entries in red-slowest order.
    pub fn new(table: Vec<[f64; 3]>, domain: [[f64; 3]; 2]) -> LutResult<Self> {
        let size = (table.len() as f64).cbrt().round() as usize;
        if size < 2 || size * size * size != table.len() {
            return Err(LutError::InvalidSize(format!(
                "3D table needs size^3 entries with size >= 2, got {}",
                table.len()
            )));
        }
        validate_domain_3(domain)?;
        Ok(Self {
            name: default_name(size),
            table,
            size,
            domain,
            comments: Vec::new(),
            interpolation: Interpolation::default(),
        })
    }

    /// Creates an identity cube over [0, 1].
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

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interp: Interpolation) -> Self {
        self.interpolation = interp;
        self
    }

    /// Cube entries, red slowest.
    #[inline]
    pub fn table(&self) -> &[[f64; 3]] {
        &self.table
    }

    /// Input domain: row 0 holds the minimum, row 1 the maximum.
    #[inline]
    pub fn domain(&self) -> [[f64; 3]; 2] {
        self.domain
    }

    /// Always 3.
    #[inline]
    pub fn dimensions(&self) -> usize {
        3
    }

    /// Cube edge length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether every channel's domain is [0, 1].
    pub fn is_domain_default(&self) -> bool {
        self.domain == DEFAULT_DOMAIN_3
    }

    /// Sample positions along each axis.
    pub fn samples(&self) -> Vec<[f64; 3]> {
        Lut2D::linear_table(self.size, self.domain)
    }

    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (r * self.size + g) * self.size + b
    }

    /// Entry at grid position (r, g, b).
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f64; 3] {
        self.table[self.index(r, g, b)]
    }

    /// Applies the LUT to an RGB triplet.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        match self.interpolation {
            Interpolation::Nearest => self.apply_nearest(rgb),
            Interpolation::Linear => self.apply_trilinear(rgb),
            Interpolation::Tetrahedral => self.apply_tetrahedral(rgb),
        }
    }

    /// Applies the LUT to every triplet of a slice.
    pub fn apply_slice(&self, values: &[[f64; 3]]) -> Vec<[f64; 3]> {
        values.iter().map(|&rgb| self.apply(rgb)).collect()
    }

    fn apply_nearest(&self, rgb: [f64; 3]) -> [f64; 3] {
        let n = (self.size - 1) as f64;
        let [ri, gi, bi] = self.normalize(rgb).map(|v| ((v * n).round() as usize).min(self.size - 1));
        self.get(ri, gi, bi)
    }

    /// Lower cell corner and fractional position inside the cell.
    fn cell(&self, rgb: [f64; 3]) -> ([usize; 3], [f64; 3]) {
        let n = (self.size - 1) as f64;
        let scaled = self.normalize(rgb).map(|v| v * n);
        let corner = scaled.map(|v| (v.floor() as usize).min(self.size - 2));
        let frac = std::array::from_fn(|i| scaled[i] - corner[i] as f64);
        (corner, frac)
    }

    fn apply_trilinear(&self, rgb: [f64; 3]) -> [f64; 3] {
        let ([ri, gi, bi], [rf, gf, bf]) = self.cell(rgb);

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        std::array::from_fn(|i| {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            c0 * (1.0 - bf) + c1 * bf
        })
    }

    fn apply_tetrahedral(&self, rgb: [f64; 3]) -> [f64; 3] {
        let ([ri, gi, bi], [rf, gf, bf]) = self.cell(rgb);

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        std::array::from_fn(|i| {
            if rf > gf {
                if gf > bf {
                    // rf > gf > bf
                    c000[i] + rf * (c100[i] - c000[i]) + gf * (c110[i] - c100[i]) + bf * (c111[i] - c110[i])
                } else if rf > bf {
                    // rf > bf >= gf
                    c000[i] + rf * (c100[i] - c000[i]) + bf * (c101[i] - c100[i]) + gf * (c111[i] - c101[i])
                } else {
                    // bf >= rf > gf
                    c000[i] + bf * (c001[i] - c000[i]) + rf * (c101[i] - c001[i]) + gf * (c111[i] - c101[i])
                }
            } else if gf > bf {
                if rf > bf {
                    // gf >= rf > bf
                    c000[i] + gf * (c010[i] - c000[i]) + rf * (c110[i] - c010[i]) + bf * (c111[i] - c110[i])
                } else {
                    // gf > bf >= rf
                    c000[i] + gf * (c010[i] - c000[i]) + bf * (c011[i] - c010[i]) + rf * (c111[i] - c011[i])
                }
            } else {
                // bf >= gf >= rf
                c000[i] + bf * (c001[i] - c000[i]) + gf * (c011[i] - c001[i]) + rf * (c111[i] - c011[i])
            }
        })
    }

    /// Normalizes input RGB to [0, 1] based on domain.
    fn normalize(&self, rgb: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|c| {
            let [min, max] = channel_domain(self.domain, c);
            ((rgb[c] - min) / (max - min)).clamp(0.0, 1.0)
        })
    }

    /// Raises every table entry to `exponent`.
    pub fn powf(mut self, exponent: f64) -> Self {
        self.map_values(|_, v| v.powf(exponent));
        self
    }

    /// Maps every table entry in place, passing its channel index.
    pub(crate) fn map_values(&mut self, f: impl Fn(usize, f64) -> f64) {
        for entry in &mut self.table {
            for (c, v) in entry.iter_mut().enumerate() {
                *v = f(c, *v);
            }
        }
    }

    /// Combines two cubes entry by entry.
    ///
    /// Both cubes must have the same size.
    pub fn combine(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> LutResult<Self> {
        if self.size != other.size {
            return Err(LutError::InvalidSize(format!(
                "cannot combine 3D tables of sizes {} and {}",
                self.size, other.size
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
}

impl PartialEq for Lut3D {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.domain == other.domain
    }
}

impl fmt::Display for Lut3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        write_summary(
            f,
            "LUT3D",
            &self.name,
            self.dimensions(),
            &format_domain_3(self.domain),
            &format!("({size}, {size}, {size}, 3)"),
            &self.comments,
        )
    }
}
