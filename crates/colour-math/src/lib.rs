//! # colour-math
//!
//! Math primitives for the colour crates.
//!
//! - [`Mat3`] - 3x3 `f64` matrices for linear colour transforms
//! - Interpolation helpers ([`lerp`], [`inverse_lerp`], [`linear_conversion`], [`linstep`])
//! - [`spow`] - sign-preserving power
//!
//! # Design
//!
//! Matrices are **row-major** and multiply **column vectors**; triplets are
//! plain `[f64; 3]` arrays:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use colour_math::Mat3;
//!
//! let xyz_to_lms = Mat3::from_rows([
//!     [0.4002, 0.7075, -0.0807],
//!     [-0.2280, 1.1500, 0.0612],
//!     [0.0, 0.0, 0.9184],
//! ]);
//!
//! let lms = xyz_to_lms * [0.95047, 1.0, 1.08883];
//! let xyz = xyz_to_lms.inverse().unwrap() * lms;
//! assert!((xyz[1] - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DMat3` inversion
//!
//! # Used By
//!
//! - `colour-models` - Colour model matrices
//! - `colour-lut` - Domain remapping and interpolation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod interp;

pub use mat3::*;
pub use interp::*;
