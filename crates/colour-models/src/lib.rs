//! # colour-models
//!
//! Colour model conversion formulas.
//!
//! - **CIE** - xyY, L*a*b* / LCHab, L*u*v* / LCHuv, 1960 UCS, 1964 U*V*W*
//! - **Opponent spaces** - Hunter Lab, Hunter Rdab, DIN99, IPT, IgPgTg, Oklab, JzAzBz
//! - **Forward only** - OSA-UCS
//! - **Appearance correlates** - CAM02 and CAM16 LCD, SCD, UCS from `JMh`
//! - **Dispatch** - [`convert::convert`] between any two [`Model`]s through CIE XYZ
//!
//! # Scales
//!
//! | Model | Input scale |
//! |-------|-------------|
//! | CIE XYZ | [0, 1] |
//! | CIE UVW, Hunter Lab, Hunter Rdab, OSA-UCS | XYZ in [0, 100] |
//! | JzAzBz | absolute XYZ, 1.0 = 1 cd/m² |
//! | L* | [0, 100] |
//!
//! # Quick Start
//!
//! ```rust
//! use colour_models::{cie_lab, illuminants, oklab};
//!
//! let xyz = [0.20654008, 0.12197225, 0.05136952];
//!
//! let lab = cie_lab::xyz_to_lab(xyz, illuminants::D65);
//! let lch = cie_lab::lab_to_lchab(lab);
//! let ok = oklab::xyz_to_oklab(xyz);
//! ```
//!
//! # Dependencies
//!
//! - [`colour-math`] - `Mat3`, `spow`
//! - [`colour-utils`] - Case-insensitive name lookups
//!
//! # Used By
//!
//! - `colour-cli` - `colour convert`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod common;
pub mod illuminants;
pub mod cie_xyy;
pub mod cie_lab;
pub mod cie_luv;
pub mod cie_ucs;
pub mod cie_uvw;
pub mod hunter_lab;
pub mod hunter_rdab;
pub mod din99;
pub mod ipt;
pub mod igpgtg;
pub mod oklab;
pub mod jzazbz;
pub mod osa_ucs;
pub mod cam_ucs;
pub mod convert;

pub use error::{ModelError, ModelResult};
pub use convert::{convert, ConvertOptions, Model, COLOURSPACE_MODELS};
