//! Sony Pictures Imageworks LUT formats (SPI1D, SPI3D).
//!
//! These formats come from the Sony Pictures Imageworks OpenColorIO
//! pipeline. Both are simple, human-readable text formats.
//!
//! # SPI1D Format
//!
//! ```text
//! Version 1
//! From 0.0 1.0
//! Length 1024
//! Components 3
//! {
//!     0.000000 0.000000 0.000000
//!     0.001000 0.001000 0.001000
//!     ...
//! }
//! ```
//!
//! `Components 1` loads as [`Lut1D`], `Components 3` as [`Lut2D`].
//!
//! # SPI3D Format
//!
//! ```text
//! SPILUT 1.0
//! 3 3
//! 32 32 32
//! 0 0 0 0.000000 0.000000 0.000000
//! 0 0 1 0.000000 0.000000 0.033333
//! ...
//! ```
//!
//! Each row holds the red, green and blue grid indices followed by the
//! output triplet. The domain is always [0, 1].
//!
//! # References
//!
//! - [OpenColorIO LUT formats](https://opencolorio.readthedocs.io/en/latest/guides/authoring/luts.html)

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::cube::{check_size, MAX_1D_SIZE, MAX_3D_SIZE};
use crate::common::{format_row, parse_array, parse_token, path_to_title, DEFAULT_DOMAIN_3};
use crate::{Lut, Lut1D, Lut2D, Lut3D, LutError, LutResult};

/// Reads an SPI1D file from disk.
///
/// # Example
///
/// ```rust,no_run
/// use colour_lut::spi::read_spi1d;
///
/// let lut = read_spi1d("oetf_reverse.spi1d")?;
/// let output = lut.apply([0.5, 0.5, 0.5]);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
pub fn read_spi1d<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lut = parse_spi1d(BufReader::new(file), &path_to_title(path))?;
    debug!(path = %path.display(), dimensions = lut.dimensions(), size = lut.size(), "read .spi1d");
    Ok(lut)
}

/// Parses SPI1D from a reader.
pub fn parse_spi1d<R: BufRead>(reader: R, title: &str) -> LutResult<Lut> {
    let mut domain = [0.0, 1.0];
    let mut length: Option<usize> = None;
    let mut components = 1usize;
    let mut comments = Vec::new();
    let mut in_data = false;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            comments.push(comment.trim().to_string());
            continue;
        }

        // Data section
        if line == "{" {
            in_data = true;
            continue;
        }
        if line == "}" {
            in_data = false;
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if in_data {
            if parts.len() != components {
                return Err(LutError::parse(
                    line_no,
                    format!("expected {components} values, found {}", parts.len()),
                ));
            }
            let row = parts
                .iter()
                .map(|token| parse_token(token, line_no))
                .collect::<LutResult<Vec<f64>>>()?;
            rows.push(row);
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "version" => {
                let [version] = parse_array(&parts[1..], line_no)?;
                if version != 1.0 {
                    return Err(LutError::parse(line_no, format!("unsupported version {version}")));
                }
            }
            "from" => domain = parse_array(&parts[1..], line_no)?,
            "length" => {
                let n = parse_token(parts.get(1).copied().unwrap_or_default(), line_no)?;
                length = Some(check_size(n, MAX_1D_SIZE, line_no)?);
            }
            "components" => {
                components = parse_token(parts.get(1).copied().unwrap_or_default(), line_no)?;
                if components != 1 && components != 3 {
                    return Err(LutError::parse(
                        line_no,
                        format!("components must be 1 or 3, got {components}"),
                    ));
                }
            }
            keyword => {
                warn!(line = line_no, keyword, "ignoring unknown .spi1d keyword");
            }
        }
    }

    let Some(length) = length else {
        return Err(LutError::parse(last_line, "missing Length"));
    };
    if rows.len() != length {
        return Err(LutError::InvalidSize(format!(
            "Length {length} does not match {} rows",
            rows.len()
        )));
    }

    let lut: Lut = if components == 1 {
        let table = rows.into_iter().map(|row| row[0]).collect();
        Lut1D::new(table, domain)?
            .with_name(title)
            .with_comments(comments)
            .into()
    } else {
        let table = rows.into_iter().map(|row| [row[0], row[1], row[2]]).collect();
        Lut2D::new(table, [[domain[0]; 3], [domain[1]; 3]])?
            .with_name(title)
            .with_comments(comments)
            .into()
    };
    Ok(lut)
}

/// Writes an SPI1D file to disk.
pub fn write_spi1d<P: AsRef<Path>>(path: P, lut: &Lut, decimals: usize) -> LutResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_spi1d_to(BufWriter::new(file), lut, decimals)?;
    debug!(path = %path.display(), dimensions = lut.dimensions(), size = lut.size(), "wrote .spi1d");
    Ok(())
}

/// Writes SPI1D to any writer.
///
/// 3x1D LUTs must share one domain across channels; 3D LUTs are rejected.
pub fn write_spi1d_to<W: Write>(mut writer: W, lut: &Lut, decimals: usize) -> LutResult<()> {
    let (domain, components, rows): ([f64; 2], usize, Vec<Vec<f64>>) = match lut {
        Lut::Lut1D(lut) => (
            lut.domain(),
            1,
            lut.table().iter().map(|&v| vec![v]).collect(),
        ),
        Lut::Lut2D(lut) => {
            let [min, max] = lut.domain();
            if min.iter().any(|&v| v != min[0]) || max.iter().any(|&v| v != max[0]) {
                return Err(LutError::UnsupportedLut(
                    "SPI1D needs the same domain on every channel".into(),
                ));
            }
            (
                [min[0], max[0]],
                3,
                lut.table().iter().map(|row| row.to_vec()).collect(),
            )
        }
        Lut::Lut3D(_) => {
            return Err(LutError::UnsupportedLut("SPI1D cannot hold a 3D LUT".into()));
        }
    };

    // Header
    writeln!(writer, "Version 1")?;
    writeln!(writer, "From {}", format_row(&domain, decimals))?;
    writeln!(writer, "Length {}", rows.len())?;
    writeln!(writer, "Components {components}")?;
    writeln!(writer, "{{")?;

    for row in &rows {
        writeln!(writer, "    {}", format_row(row, decimals))?;
    }

    writeln!(writer, "}}")?;
    for comment in lut.comments() {
        writeln!(writer, "# {comment}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads an SPI3D file from disk.
///
/// # Example
///
/// ```rust,no_run
/// use colour_lut::spi::read_spi3d;
///
/// let lut = read_spi3d("colour_correct.spi3d")?;
/// let output = lut.apply([0.5, 0.3, 0.2]);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
pub fn read_spi3d<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lut = parse_spi3d(BufReader::new(file), &path_to_title(path))?;
    debug!(path = %path.display(), size = lut.size(), "read .spi3d");
    Ok(lut)
}

/// Parses SPI3D from a reader.
pub fn parse_spi3d<R: BufRead>(reader: R, title: &str) -> LutResult<Lut> {
    let mut comments = Vec::new();
    let mut header_lines = 0;
    let mut size = 0usize;
    let mut table: Vec<[f64; 3]> = Vec::new();
    let mut filled: Vec<bool> = Vec::new();
    let mut row_count = 0usize;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            comments.push(comment.trim().to_string());
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match header_lines {
            0 => {
                if !parts[0].eq_ignore_ascii_case("SPILUT") {
                    return Err(LutError::parse(line_no, "expected SPILUT header"));
                }
                header_lines += 1;
            }
            1 => {
                let dims: [usize; 2] = parse_indices(&parts, line_no)?;
                if dims != [3, 3] {
                    return Err(LutError::parse(line_no, "expected \"3 3\" dimensions"));
                }
                header_lines += 1;
            }
            2 => {
                let [r, g, b]: [usize; 3] = parse_indices(&parts, line_no)?;
                if r != g || g != b {
                    return Err(LutError::parse(
                        line_no,
                        format!("non-uniform cube sizes {r} {g} {b} are not supported"),
                    ));
                }
                size = check_size(r, MAX_3D_SIZE, line_no)?;
                table = vec![[0.0; 3]; size * size * size];
                filled = vec![false; table.len()];
                header_lines += 1;
            }
            _ => {
                if parts.len() != 6 {
                    return Err(LutError::parse(
                        line_no,
                        format!("expected 6 values, found {}", parts.len()),
                    ));
                }
                let [i, j, k]: [usize; 3] = parse_indices(&parts[..3], line_no)?;
                if i >= size || j >= size || k >= size {
                    return Err(LutError::parse(
                        line_no,
                        format!("index {i} {j} {k} outside a cube of size {size}"),
                    ));
                }
                let cell = (i * size + j) * size + k;
                if filled[cell] {
                    return Err(LutError::parse(line_no, format!("duplicate index {i} {j} {k}")));
                }
                table[cell] = parse_array(&parts[3..], line_no)?;
                filled[cell] = true;
                row_count += 1;
            }
        }
    }

    if header_lines < 3 {
        return Err(LutError::parse(last_line, "incomplete SPI3D header"));
    }
    if row_count != table.len() {
        return Err(LutError::InvalidSize(format!(
            "cube of size {size} expects {} rows, found {row_count}",
            table.len()
        )));
    }

    Ok(Lut3D::new(table, DEFAULT_DOMAIN_3)?
        .with_name(title)
        .with_comments(comments)
        .into())
}

fn parse_indices<const N: usize>(tokens: &[&str], line: usize) -> LutResult<[usize; N]> {
    if tokens.len() != N {
        return Err(LutError::parse(
            line,
            format!("expected {N} integers, found {}", tokens.len()),
        ));
    }
    let mut values = [0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_token(token, line)?;
    }
    Ok(values)
}

/// Writes an SPI3D file to disk.
pub fn write_spi3d<P: AsRef<Path>>(path: P, lut: &Lut, decimals: usize) -> LutResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_spi3d_to(BufWriter::new(file), lut, decimals)?;
    debug!(path = %path.display(), size = lut.size(), "wrote .spi3d");
    Ok(())
}

/// Writes SPI3D to any writer.
///
/// Only 3D LUTs over the default domain can be stored.
pub fn write_spi3d_to<W: Write>(mut writer: W, lut: &Lut, decimals: usize) -> LutResult<()> {
    let Lut::Lut3D(cube) = lut else {
        return Err(LutError::UnsupportedLut(format!(
            "SPI3D cannot hold a {}",
            lut.kind()
        )));
    };
    if !cube.is_domain_default() {
        return Err(LutError::UnsupportedLut(
            "SPI3D only supports the [0, 1] domain".into(),
        ));
    }

    let size = cube.size();

    // Header
    writeln!(writer, "SPILUT 1.0")?;
    writeln!(writer, "3 3")?;
    writeln!(writer, "{size} {size} {size}")?;
    for comment in &cube.comments {
        writeln!(writer, "# {comment}")?;
    }

    for r in 0..size {
        for g in 0..size {
            for b in 0..size {
                let rgb = cube.get(r, g, b);
                writeln!(writer, "{r} {g} {b} {}", format_row(&rgb, decimals))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Cursor;

    #[test]
    fn test_parse_spi1d_mono() {
        let data = r#"
Version 1
From -0.125 1.125
Length 4
Components 1
{
    0.0
    0.333333
    0.666666
    1.0
}
# Generated by a test
"#;
        let lut = parse_spi1d(Cursor::new(data), "Mono").unwrap();
        let lut1d = lut.as_lut1d().expect("1D");
        assert_eq!(lut1d.size(), 4);
        assert_eq!(lut1d.domain(), [-0.125, 1.125]);
        assert_eq!(lut1d.name, "Mono");
        assert_eq!(lut1d.comments, ["Generated by a test"]);
        assert_abs_diff_eq!(lut1d.apply(0.5), 0.4999995, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_spi1d_rgb() {
        let data = r#"
Version 1
From 0.0 1.0
Length 3
Components 3
{
    0.0 0.0 0.0
    0.5 0.25 0.125
    1.0 1.0 1.0
}
"#;
        let lut = parse_spi1d(Cursor::new(data), "Rgb").unwrap();
        let lut2d = lut.as_lut2d().expect("3x1D");
        assert_eq!(lut2d.size(), 3);
        assert_eq!(lut2d.table()[1], [0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_spi1d_validation() {
        let wrong_version = "Version 2\nFrom 0 1\nLength 2\nComponents 1\n{\n0\n1\n}\n";
        assert!(parse_spi1d(Cursor::new(wrong_version), "x").is_err());

        let wrong_length = "Version 1\nFrom 0 1\nLength 3\nComponents 1\n{\n0\n1\n}\n";
        assert!(matches!(
            parse_spi1d(Cursor::new(wrong_length), "x"),
            Err(LutError::InvalidSize(_))
        ));

        let wrong_components = "Version 1\nFrom 0 1\nLength 2\nComponents 2\n{\n0 0\n1 1\n}\n";
        assert!(matches!(
            parse_spi1d(Cursor::new(wrong_components), "x"),
            Err(LutError::Parse { line: 4, .. })
        ));

        let short_row = "Version 1\nFrom 0 1\nLength 2\nComponents 3\n{\n0 0 0\n1 1\n}\n";
        assert!(matches!(
            parse_spi1d(Cursor::new(short_row), "x"),
            Err(LutError::Parse { line: 7, .. })
        ));
    }

    #[test]
    fn test_spi1d_length_out_of_range() {
        for length in ["0", "1", "65537", "18446744073709551615"] {
            let data = format!("Version 1\nFrom 0 1\nLength {length}\nComponents 1\n{{\n0\n}}\n");
            assert!(matches!(
                parse_spi1d(Cursor::new(data), "x"),
                Err(LutError::Parse { line: 3, .. })
            ));
        }
    }

    #[test]
    fn test_write_spi1d() {
        let lut = Lut::from(
            Lut1D::new(vec![0.0, 0.5, 1.0], [-0.1, 1.5])
                .unwrap()
                .with_comments(vec!["A comment".into()]),
        );
        let mut buf = Vec::new();
        write_spi1d_to(&mut buf, &lut, 2).unwrap();
        let expected = "Version 1\n\
                        From -0.10 1.50\n\
                        Length 3\n\
                        Components 1\n\
                        {\n    0.00\n    0.50\n    1.00\n\
                        }\n\
                        # A comment\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_write_spi1d_rejects() {
        let domain = [[0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
        let lut = Lut::from(Lut2D::new(Lut2D::linear_table(4, domain), domain).unwrap());
        assert!(matches!(
            write_spi1d_to(Vec::new(), &lut, 7),
            Err(LutError::UnsupportedLut(_))
        ));
        let lut = Lut::from(Lut3D::identity(2).unwrap());
        assert!(write_spi1d_to(Vec::new(), &lut, 7).is_err());
    }

    #[test]
    fn test_parse_spi3d() {
        let data = r#"
SPILUT 1.0
3 3
2 2 2
0 0 0 0.0 0.0 0.0
1 0 0 1.0 0.0 0.0
0 1 0 0.0 1.0 0.0
1 1 0 1.0 1.0 0.0
0 0 1 0.0 0.0 1.0
1 0 1 1.0 0.0 1.0
0 1 1 0.0 1.0 1.0
1 1 1 1.0 1.0 1.0
"#;
        let lut = parse_spi3d(Cursor::new(data), "Cube").unwrap();
        assert_eq!(lut, Lut::from(Lut3D::identity(2).unwrap()));
        assert_eq!(lut.name(), "Cube");
    }

    #[test]
    fn test_spi3d_validation() {
        let non_uniform = "SPILUT 1.0\n3 3\n2 2 3\n";
        assert!(matches!(
            parse_spi3d(Cursor::new(non_uniform), "x"),
            Err(LutError::Parse { line: 3, .. })
        ));

        let out_of_range = "SPILUT 1.0\n3 3\n2 2 2\n0 0 2 0 0 0\n";
        assert!(matches!(
            parse_spi3d(Cursor::new(out_of_range), "x"),
            Err(LutError::Parse { line: 4, .. })
        ));

        let missing_rows = "SPILUT 1.0\n3 3\n2 2 2\n0 0 0 0 0 0\n";
        assert!(matches!(
            parse_spi3d(Cursor::new(missing_rows), "x"),
            Err(LutError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_spi3d_size_out_of_range() {
        for sizes in ["4294967296 4294967296 4294967296", "257 257 257", "1 1 1", "0 0 0"] {
            let data = format!("SPILUT 1.0\n3 3\n{sizes}\n");
            assert!(matches!(
                parse_spi3d(Cursor::new(data), "x"),
                Err(LutError::Parse { line: 3, .. })
            ));
        }
    }

    #[test]
    fn test_spi3d_duplicate_index() {
        // Eight rows, but 0 0 0 twice and 1 1 1 missing.
        let data = "SPILUT 1.0\n3 3\n2 2 2\n\
                    0 0 0 0.0 0.0 0.0\n\
                    1 0 0 1.0 0.0 0.0\n\
                    0 1 0 0.0 1.0 0.0\n\
                    1 1 0 1.0 1.0 0.0\n\
                    0 0 1 0.0 0.0 1.0\n\
                    1 0 1 1.0 0.0 1.0\n\
                    0 1 1 0.0 1.0 1.0\n\
                    0 0 0 0.5 0.5 0.5\n";
        assert!(matches!(
            parse_spi3d(Cursor::new(data), "x"),
            Err(LutError::Parse { line: 11, .. })
        ));
    }

    #[test]
    fn test_write_spi3d() {
        let lut = Lut::from(Lut3D::identity(2).unwrap().with_comments(vec!["Identity".into()]));
        let mut buf = Vec::new();
        write_spi3d_to(&mut buf, &lut, 1).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[..4], ["SPILUT 1.0", "3 3", "2 2 2", "# Identity"]);
        assert_eq!(lines[5], "0 0 1 0.0 0.0 1.0");
        assert_eq!(lines[11], "1 1 1 1.0 1.0 1.0");
    }

    #[test]
    fn test_write_spi3d_rejects() {
        let domain = [[-0.1; 3], [1.0; 3]];
        let lut = Lut::from(Lut3D::new(Lut3D::linear_table(2, domain), domain).unwrap());
        assert!(matches!(
            write_spi3d_to(Vec::new(), &lut, 7),
            Err(LutError::UnsupportedLut(_))
        ));
        let lut = Lut::from(Lut1D::identity(4).unwrap());
        assert!(write_spi3d_to(Vec::new(), &lut, 7).is_err());
    }
}
