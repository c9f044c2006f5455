//! colour - LUT files and colour model conversions from the command line

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colour")]
#[command(author, version, about = "Colour science command line tool")]
#[command(long_about = "
Inspect, convert and apply LUT files, and convert values between colour models.

Examples:
  colour lut info grade.cube                     # Show LUT summary
  colour lut info grade.cube curve.spi1d --json  # JSON summaries
  colour lut convert grade.cube grade.spi3d      # Change file format
  colour lut convert curve.spi1d curve.cube -d 3 --size 17 --force
  colour lut apply grade.cube 0.18 0.18 0.18 --interpolation tetrahedral
  colour convert 0.2065 0.1220 0.0514 --from 'CIE XYZ' --to 'CIE Lab'
  colour -vv lut info grade.cube                 # Trace logging
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect, convert or apply LUT files
    Lut(LutArgs),

    /// Convert a value between colour models
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct LutArgs {
    #[command(subcommand)]
    command: LutCommand,
}

#[derive(Subcommand)]
enum LutCommand {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(LutInfoArgs),

    /// Convert a LUT to another format or dimensionality
    Convert(LutConvertArgs),

    /// Apply a LUT to an RGB triplet
    Apply(LutApplyArgs),
}

#[derive(Args)]
struct LutInfoArgs {
    /// LUT file(s)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Reading method, e.g. "Iridas Cube" (default: from extension)
    #[arg(short, long)]
    method: Option<String>,
}

#[derive(Args)]
struct LutConvertArgs {
    /// Input LUT
    input: PathBuf,

    /// Output LUT, format taken from its extension
    output: PathBuf,

    /// Fractional digits written per value
    #[arg(long, default_value_t = colour_lut::DEFAULT_DECIMALS)]
    decimals: usize,

    /// Target dimensionality: 1 (1D), 2 (3x1D) or 3 (3D)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    dimensions: Option<u8>,

    /// Sample count of the converted LUT
    #[arg(short, long)]
    size: Option<usize>,

    /// Allow lossy conversions
    #[arg(short, long)]
    force: bool,

    /// Reading method for the input (default: from extension)
    #[arg(short, long)]
    method: Option<String>,
}

#[derive(Args)]
struct LutApplyArgs {
    /// LUT file
    lut: PathBuf,

    /// Red
    #[arg(allow_negative_numbers = true)]
    r: f64,

    /// Green
    #[arg(allow_negative_numbers = true)]
    g: f64,

    /// Blue
    #[arg(allow_negative_numbers = true)]
    b: f64,

    /// 3D interpolation: nearest, trilinear or tetrahedral
    #[arg(short, long)]
    interpolation: Option<String>,

    /// Reading method (default: from extension)
    #[arg(short, long)]
    method: Option<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// First component
    #[arg(allow_negative_numbers = true)]
    a: f64,

    /// Second component
    #[arg(allow_negative_numbers = true)]
    b: f64,

    /// Third component
    #[arg(allow_negative_numbers = true)]
    c: f64,

    /// Source model, e.g. "CIE XYZ"
    #[arg(long)]
    from: String,

    /// Target model, e.g. "CIE Lab"
    #[arg(long)]
    to: String,

    /// Reference illuminant, e.g. D50 (default: D65)
    #[arg(short, long)]
    illuminant: Option<String>,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        2.. => LevelFilter::TRACE,
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lut(args) => match args.command {
            LutCommand::Info(args) => commands::lut::info(args, cli.verbose),
            LutCommand::Convert(args) => commands::lut::convert(args, cli.verbose),
            LutCommand::Apply(args) => commands::lut::apply(args),
        },
        Commands::Convert(args) => commands::convert::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lut_convert() {
        let cli = Cli::try_parse_from([
            "colour", "-vv", "lut", "convert", "in.spi1d", "out.cube", "-d", "3", "--force",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Lut(LutArgs {
            command: LutCommand::Convert(args),
        }) = cli.command
        else {
            panic!("expected lut convert");
        };
        assert_eq!(args.dimensions, Some(3));
        assert_eq!(args.decimals, 7);
        assert!(args.force);
        assert_eq!(args.size, None);
    }

    #[test]
    fn test_parse_rejects_bad_dimensions() {
        assert!(Cli::try_parse_from(["colour", "lut", "convert", "a.cube", "b.cube", "-d", "4"]).is_err());
    }

    #[test]
    fn test_parse_negative_components() {
        let cli = Cli::try_parse_from([
            "colour", "convert", "50", "-20", "10.5", "--from", "CIE Lab", "--to", "CIE XYZ",
        ])
        .unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!([args.a, args.b, args.c], [50.0, -20.0, 10.5]);
        assert_eq!(args.illuminant, None);
    }
}
