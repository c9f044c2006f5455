//! # colour-lut
//!
//! Look-Up Table (LUT) types, conversions and file formats.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - a single curve
//! - [`Lut2D`] - one curve per RGB channel (3x1D)
//! - [`Lut3D`] - 3-dimensional lookup table (full RGB cube)
//! - [`Lut`] - any of the above, as returned by the readers
//! - [`LutSequence`] - LUTs applied one after another
//!
//! # Supported Formats
//!
//! - `.cube` - Iridas / Resolve ([`cube`] module)
//! - `.spi1d` / `.spi3d` - Sony Pictures Imageworks ([`spi`] module)
//!
//! [`read_lut`] and [`write_lut`] pick the format from the file extension or
//! from a case-insensitive method name.
//!
//! # Usage
//!
//! ```rust
//! use colour_lut::{lut_to_lut, ConversionOptions, Interpolation, Lut, Lut1D, Lut3D};
//!
//! // A 1D curve
//! let curve = Lut1D::identity(1024)?.powf(2.2);
//! let output = curve.apply(0.5);
//!
//! // A 3D cube
//! let cube = Lut3D::identity(33)?.with_interpolation(Interpolation::Tetrahedral);
//! let rgb = cube.apply([0.5, 0.3, 0.2]);
//!
//! // Bake the curve into a cube
//! let baked = lut_to_lut(&Lut::from(curve), 3, &ConversionOptions::forced())?;
//! # Ok::<(), colour_lut::LutError>(())
//! ```
//!
//! # Interpolation
//!
//! - 1D and 3x1D LUTs: linear interpolation, linear or constant extrapolation
//! - 3D LUTs: trilinear, tetrahedral or nearest, inputs clamped to the domain
//!
//! # Dependencies
//!
//! - [`colour-utils`] - Case-insensitive registries, `linspace`
//! - [`colour-math`] - `lerp`
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Read/write events
//!
//! # Used By
//!
//! - `colour-cli` - `colour lut info|convert|apply`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod common;
mod convert;
mod error;
mod interp;
mod lut;
mod lut1d;
mod lut2d;
mod lut3d;
mod ops;
mod sequence;
pub mod cube;
pub mod format;
pub mod spi;

pub use common::path_to_title;
pub use convert::{lut_to_lut, ConversionOptions};
pub use error::{LutError, LutResult};
pub use format::{
    extension_to_lut_format, lut_read_methods, lut_write_methods, read_lut, write_lut, LutFormat,
    DEFAULT_DECIMALS,
};
pub use interp::{Extrapolation, Interpolation};
pub use lut::Lut;
pub use lut1d::Lut1D;
pub use lut2d::Lut2D;
pub use lut3d::Lut3D;
pub use sequence::LutSequence;
