//! LUT commands: info, convert and apply

use crate::{LutApplyArgs, LutConvertArgs, LutInfoArgs};
use anyhow::{Context, Result};
use colour_lut::{lut_to_lut, ConversionOptions, Interpolation, Lut};
use colour_utils::Structure;
use std::path::Path;
use tracing::debug;

pub fn info(args: LutInfoArgs, verbose: u8) -> Result<()> {
    let mut summaries = Vec::with_capacity(args.paths.len());
    for (i, path) in args.paths.iter().enumerate() {
        let lut = super::load_lut(path, args.method.as_deref())?;

        if args.json {
            summaries.push(summary(path, &lut)?);
            continue;
        }

        if i > 0 {
            println!();
        }
        if verbose > 0 || args.paths.len() > 1 {
            println!("{}", path.display());
        }
        println!("{lut}");
    }

    if args.json {
        let json = match summaries.as_slice() {
            [single] => single.to_json_pretty()?,
            _ => serde_json::to_string_pretty(&summaries)?,
        };
        println!("{json}");
    }
    Ok(())
}

pub fn convert(args: LutConvertArgs, verbose: u8) -> Result<()> {
    let mut lut = super::load_lut(&args.input, args.method.as_deref())?;

    if let Some(dimensions) = args.dimensions {
        let mut options = ConversionOptions {
            force_conversion: args.force,
            ..ConversionOptions::default()
        };
        if let Some(size) = args.size {
            options = options.with_size(size);
        }
        lut = lut_to_lut(&lut, usize::from(dimensions), &options)
            .with_context(|| format!("Failed to convert: {}", args.input.display()))?;
    }

    super::save_lut(&args.output, &lut, args.decimals)?;

    if verbose > 0 {
        println!(
            "{} -> {} ({}, size {})",
            args.input.display(),
            args.output.display(),
            lut.kind(),
            lut.size()
        );
    }
    Ok(())
}

pub fn apply(args: LutApplyArgs) -> Result<()> {
    let mut lut = super::load_lut(&args.lut, args.method.as_deref())?;

    if let Some(name) = &args.interpolation {
        let interpolation: Interpolation = name.parse()?;
        lut = lut.with_interpolation(interpolation);
    }

    let rgb = [args.r, args.g, args.b];
    let out = lut.apply(rgb);
    debug!(lut = lut.name(), ?rgb, ?out, "apply");
    println!("{}", super::format_triplet(out));
    Ok(())
}

/// Per-channel domain rows: minimum first, then maximum.
fn domain(lut: &Lut) -> Vec<Vec<f64>> {
    match lut {
        Lut::Lut1D(lut) => lut.domain().iter().map(|v| vec![*v]).collect(),
        Lut::Lut2D(lut) => lut.domain().iter().map(|row| row.to_vec()).collect(),
        Lut::Lut3D(lut) => lut.domain().iter().map(|row| row.to_vec()).collect(),
    }
}

fn summary(path: &Path, lut: &Lut) -> Result<Structure> {
    let mut s = Structure::new();
    s.set("path", path.display().to_string())?;
    s.set("name", lut.name())?;
    s.set("kind", lut.kind())?;
    s.set("dimensions", lut.dimensions())?;
    s.set("size", lut.size())?;
    s.set("domain", domain(lut))?;
    s.set("comments", lut.comments())?;
    Ok(s)
}
