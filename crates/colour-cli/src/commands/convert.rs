//! Colour model conversion command

use crate::ConvertArgs;
use anyhow::{Context, Result};
use colour_models::{convert, ConvertOptions, Model};
use tracing::debug;

pub fn run(args: ConvertArgs) -> Result<()> {
    let from: Model = args
        .from
        .parse()
        .with_context(|| format!("Invalid source model, expected one of: {}", model_list()))?;
    let to: Model = args
        .to
        .parse()
        .with_context(|| format!("Invalid target model, expected one of: {}", model_list()))?;

    let options = match &args.illuminant {
        Some(name) => ConvertOptions::default().with_illuminant(name)?,
        None => ConvertOptions::default(),
    };

    let value = [args.a, args.b, args.c];
    let out = convert(value, from, to, &options);
    debug!(%from, %to, labels = ?to.axis_labels(), ?out, "convert");
    println!("{}", super::format_triplet(out));
    Ok(())
}

fn model_list() -> String {
    colour_models::COLOURSPACE_MODELS.join(", ")
}
