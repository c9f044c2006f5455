//! Conversion between LUT dimensionalities.

use tracing::debug;

use crate::cube::{MAX_1D_SIZE, MAX_3D_SIZE};
use crate::{Extrapolation, Lut, Lut1D, Lut2D, Lut3D, LutError, LutResult};

/// Options for [`lut_to_lut`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Allow conversions that lose information.
    pub force_conversion: bool,
    /// Sample count of the converted LUT; 33 for 3D targets and 1024
    /// otherwise when `None`.
    pub size: Option<usize>,
    /// Channel weights used when collapsing RGB to a single curve.
    pub channel_weights: [f64; 3],
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            force_conversion: false,
            size: None,
            channel_weights: [1.0 / 3.0; 3],
        }
    }
}

impl ConversionOptions {
    /// Allows lossy conversions.
    pub fn forced() -> Self {
        Self {
            force_conversion: true,
            ..Self::default()
        }
    }

    /// Sets the sample count.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the channel weights.
    pub fn with_channel_weights(mut self, weights: [f64; 3]) -> Self {
        self.channel_weights = weights;
        self
    }
}

fn dimensions_label(dimensions: usize) -> &'static str {
    match dimensions {
        1 => "1D",
        2 => "3x1D",
        _ => "3D",
    }
}

fn weighted(values: [f64; 3], weights: [f64; 3]) -> f64 {
    values[0] * weights[0] + values[1] * weights[1] + values[2] * weights[2]
}

/// Converts a LUT to another dimensionality.
///
/// Same-dimension conversions return a copy and 1D to 3x1D tiles the curve
/// over the three channels. Every other path resamples the LUT and fails
/// with [`LutError::UnsupportedLut`] unless `force_conversion` is set.
///
/// # Example
///
/// ```rust
/// use colour_lut::{lut_to_lut, ConversionOptions, Lut, Lut1D};
///
/// let lut = Lut::from(Lut1D::identity(16)?.with_name("Curve"));
/// let cube = lut_to_lut(&lut, 3, &ConversionOptions::forced().with_size(9))?;
/// assert_eq!(cube.name(), "Curve - Converted 1D to 3D");
/// assert_eq!(cube.size(), 9);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
pub fn lut_to_lut(lut: &Lut, dimensions: usize, options: &ConversionOptions) -> LutResult<Lut> {
    if !(1..=3).contains(&dimensions) {
        return Err(LutError::UnsupportedLut(format!(
            "cannot convert to {dimensions} dimensions"
        )));
    }

    let from = lut.dimensions();
    if from == dimensions {
        return Ok(lut.clone());
    }

    if !(from == 1 && dimensions == 2) && !options.force_conversion {
        return Err(LutError::UnsupportedLut(format!(
            "{} to {} conversion is destructive, set force_conversion to proceed",
            dimensions_label(from),
            dimensions_label(dimensions)
        )));
    }

    let (default_size, max_size) = if dimensions == 3 {
        (33, MAX_3D_SIZE)
    } else {
        (1024, MAX_1D_SIZE)
    };
    let size = options.size.unwrap_or(default_size);
    if !(2..=max_size).contains(&size) {
        return Err(LutError::InvalidSize(format!(
            "{} size must be within [2, {max_size}], got {size}",
            dimensions_label(dimensions)
        )));
    }
    let weights = options.channel_weights;
    let name = format!(
        "{} - Converted {} to {}",
        lut.name(),
        dimensions_label(from),
        dimensions_label(dimensions)
    );
    debug!(from, to = dimensions, size, "lut_to_lut");

    let mut converted: Lut = match lut {
        Lut::Lut1D(lut1d) => {
            let [min, max] = lut1d.domain();
            let domain = [[min; 3], [max; 3]];
            if dimensions == 2 {
                Lut2D::from_curve(lut1d).into()
            } else {
                let table = Lut3D::linear_table(size, domain)
                    .into_iter()
                    .map(|rgb| rgb.map(|v| lut1d.apply(v)))
                    .collect();
                Lut3D::new(table, domain)?
                    .with_comments(lut1d.comments.clone())
                    .into()
            }
        }
        Lut::Lut2D(lut2d) => {
            let domain = lut2d.domain();
            if dimensions == 1 {
                let table = lut2d.table().iter().map(|&row| weighted(row, weights)).collect();
                let domain = [weighted(domain[0], weights), weighted(domain[1], weights)];
                Lut1D::new(table, domain)?
                    .with_extrapolation(lut2d.extrapolation)
                    .with_comments(lut2d.comments.clone())
                    .into()
            } else {
                let table = lut2d.apply_slice(&Lut3D::linear_table(size, domain));
                Lut3D::new(table, domain)?
                    .with_comments(lut2d.comments.clone())
                    .into()
            }
        }
        // The cube clamps its input, so the curves hold their end values.
        Lut::Lut3D(lut3d) => {
            let domain = lut3d.domain();
            let samples = lut3d.apply_slice(&Lut2D::linear_table(size, domain));
            if dimensions == 1 {
                let table = samples.into_iter().map(|rgb| weighted(rgb, weights)).collect();
                let domain = [weighted(domain[0], weights), weighted(domain[1], weights)];
                Lut1D::new(table, domain)?
                    .with_extrapolation(Extrapolation::Constant)
                    .with_comments(lut3d.comments.clone())
                    .into()
            } else {
                Lut2D::new(samples, domain)?
                    .with_extrapolation(Extrapolation::Constant)
                    .with_comments(lut3d.comments.clone())
                    .into()
            }
        }
    };
    converted.set_name(name);
    Ok(converted)
}
