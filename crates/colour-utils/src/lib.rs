//! # colour-utils
//!
//! Generic helpers shared by the colour crates.
//!
//! # Data Structures
//!
//! - [`CaseInsensitiveMapping`] - string-keyed map ignoring key case
//! - [`LazyCaseInsensitiveMapping`] - same, with values computed on first access
//! - [`Lookup`] - map with reverse (value to key) lookup
//! - [`Structure`] - named-field record backed by JSON values
//!
//! # Array Helpers
//!
//! The [`array`] module holds the small set of vector helpers the colour
//! models and LUTs need: [`array::linspace`], [`array::tstack`],
//! [`array::tsplit`], [`array::interval`], [`array::is_uniform`], ...
//!
//! # Usage
//!
//! ```rust
//! use colour_utils::CaseInsensitiveMapping;
//!
//! let mut methods = CaseInsensitiveMapping::new();
//! methods.insert("McCamy", 1);
//! methods.insert("Hernandez", 2);
//!
//! assert_eq!(methods.get("mccamy"), Some(&1));
//! assert!(methods.contains_key("HERNANDEZ"));
//! ```
//!
//! # Dependencies
//!
//! - [`serde`] / [`serde_json`] - [`Structure`] storage
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `colour-models` - Illuminant and model name lookups
//! - `colour-lut` - Format dispatch tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod mapping;
mod lookup;
mod structure;
pub mod array;

pub use error::{ArrayError, ArrayResult};
pub use mapping::{CaseInsensitiveMapping, Iter, LazyCaseInsensitiveMapping};
pub use lookup::Lookup;
pub use structure::Structure;
