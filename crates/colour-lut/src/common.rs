//! Helpers shared by the LUT types and formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{LutError, LutResult};

/// Default 3-channel domain.
pub(crate) const DEFAULT_DOMAIN_3: [[f64; 3]; 2] = [[0.0; 3], [1.0; 3]];

/// Name given to LUTs created without one.
pub(crate) fn default_name(size: usize) -> String {
    format!("Unity {size}")
}

/// LUT title derived from a file path: stem with `_`, `-` and `.` as spaces.
pub fn path_to_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-', '.'], " "))
        .unwrap_or_default()
}

/// Parses one token, reporting `line` on failure.
pub(crate) fn parse_token<T: FromStr>(token: &str, line: usize) -> LutResult<T> {
    token
        .parse()
        .map_err(|_| LutError::parse(line, format!("invalid number {token:?}")))
}

/// Parses exactly `N` numbers from `tokens`.
pub(crate) fn parse_array<const N: usize>(tokens: &[&str], line: usize) -> LutResult<[f64; N]> {
    if tokens.len() != N {
        return Err(LutError::parse(
            line,
            format!("expected {N} values, found {}", tokens.len()),
        ));
    }
    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_token(token, line)?;
    }
    Ok(values)
}

pub(crate) fn validate_domain_1(domain: [f64; 2]) -> LutResult<()> {
    if !(domain[0] < domain[1]) || !domain.iter().all(|v| v.is_finite()) {
        return Err(LutError::InvalidDomain(format!(
            "minimum {} must be below maximum {}",
            domain[0], domain[1]
        )));
    }
    Ok(())
}

pub(crate) fn validate_domain_3(domain: [[f64; 3]; 2]) -> LutResult<()> {
    for c in 0..3 {
        validate_domain_1([domain[0][c], domain[1][c]])?;
    }
    Ok(())
}

/// Splits a 3-channel domain into per-channel ranges.
pub(crate) fn channel_domain(domain: [[f64; 3]; 2], channel: usize) -> [f64; 2] {
    [domain[0][channel], domain[1][channel]]
}

/// Formats values with `decimals` fractional digits, space separated.
pub(crate) fn format_row(values: &[f64], decimals: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn format_domain_1(domain: [f64; 2]) -> String {
    format!("[{}]", join(&domain))
}

pub(crate) fn format_domain_3(domain: [[f64; 3]; 2]) -> String {
    format!("[[{}]\n              [{}]]", join(&domain[0]), join(&domain[1]))
}

/// Writes the summary block used by every LUT `Display` impl.
pub(crate) fn write_summary(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    name: &str,
    dimensions: usize,
    domain: &str,
    size: &str,
    comments: &[String],
) -> fmt::Result {
    let title = format!("{kind} - {name}");
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))?;
    writeln!(f)?;
    writeln!(f, "Dimensions : {dimensions}")?;
    writeln!(f, "Domain     : {domain}")?;
    write!(f, "Size       : {size}")?;
    for (i, comment) in comments.iter().enumerate() {
        write!(f, "\nComment {:02} : {comment}", i + 1)?;
    }
    Ok(())
}
