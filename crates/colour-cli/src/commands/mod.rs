//! CLI command implementations

pub mod convert;
pub mod lut;

use anyhow::{Context, Result};
use colour_lut::Lut;
use std::path::Path;

/// Load LUT from path
pub fn load_lut(path: &Path, method: Option<&str>) -> Result<Lut> {
    colour_lut::read_lut(path, method)
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save LUT to path
pub fn save_lut(path: &Path, lut: &Lut, decimals: usize) -> Result<()> {
    colour_lut::write_lut(lut, path, decimals, None)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Format an RGB or model triplet for display
pub fn format_triplet(values: [f64; 3]) -> String {
    format!("{} {} {}", values[0], values[1], values[2])
}
