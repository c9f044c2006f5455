//! Iridas / Resolve .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! `LUT_1D_SIZE` files load as [`Lut2D`], `LUT_3D_SIZE` files as [`Lut3D`].
//! 3D rows run red fastest, blue slowest. The Resolve
//! `LUT_1D_INPUT_RANGE` / `LUT_3D_INPUT_RANGE` keywords set the same domain
//! on every channel.
//!
//! # Example
//!
//! ```rust,no_run
//! use colour_lut::cube;
//!
//! let lut = cube::read_cube("grade.cube")?;
//! let rgb = lut.apply([0.5, 0.3, 0.2]);
//! # Ok::<(), colour_lut::LutError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{format_row, parse_array, parse_token, path_to_title, DEFAULT_DOMAIN_3};
use crate::{Lut, Lut2D, Lut3D, LutError, LutResult};

/// Largest 3x1D table a .cube file may hold.
pub const MAX_1D_SIZE: usize = 65536;
/// Largest cube edge a .cube file may hold.
pub const MAX_3D_SIZE: usize = 256;

#[derive(Clone, Copy)]
enum CubeSize {
    OneD(usize),
    ThreeD(usize),
}

/// Reads a .cube file.
///
/// The title defaults to the file stem when the file has no `TITLE`.
pub fn read_cube<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lut = parse_cube(BufReader::new(file), &path_to_title(path))?;
    debug!(path = %path.display(), dimensions = lut.dimensions(), size = lut.size(), "read .cube");
    Ok(lut)
}

/// Parses .cube content from a reader.
pub fn parse_cube<R: BufRead>(reader: R, title: &str) -> LutResult<Lut> {
    let mut title = title.to_string();
    let mut comments = Vec::new();
    let mut size: Option<CubeSize> = None;
    let mut domain = DEFAULT_DOMAIN_3;
    let mut rows: Vec<[f64; 3]> = Vec::new();
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

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "TITLE" => {
                title = line["TITLE".len()..].trim().trim_matches('"').to_string();
            }
            keyword @ ("LUT_1D_SIZE" | "LUT_3D_SIZE") => {
                if size.is_some() {
                    return Err(LutError::parse(line_no, "more than one size keyword"));
                }
                let [n] = parse_sizes(&tokens[1..], line_no)?;
                size = Some(if keyword == "LUT_1D_SIZE" {
                    CubeSize::OneD(check_size(n, MAX_1D_SIZE, line_no)?)
                } else {
                    CubeSize::ThreeD(check_size(n, MAX_3D_SIZE, line_no)?)
                });
            }
            "DOMAIN_MIN" => domain[0] = parse_array(&tokens[1..], line_no)?,
            "DOMAIN_MAX" => domain[1] = parse_array(&tokens[1..], line_no)?,
            "LUT_1D_INPUT_RANGE" | "LUT_3D_INPUT_RANGE" => {
                let [min, max] = parse_array(&tokens[1..], line_no)?;
                domain = [[min; 3], [max; 3]];
            }
            first if first.parse::<f64>().is_ok() => {
                rows.push(parse_array(&tokens, line_no)?);
            }
            keyword => {
                warn!(line = line_no, keyword, "ignoring unknown .cube keyword");
            }
        }
    }

    let Some(size) = size else {
        return Err(LutError::parse(last_line, "missing LUT_1D_SIZE or LUT_3D_SIZE"));
    };

    let lut: Lut = match size {
        CubeSize::OneD(n) => {
            if rows.len() != n {
                return Err(LutError::InvalidSize(format!(
                    "LUT_1D_SIZE {n} expects {n} rows, found {}",
                    rows.len()
                )));
            }
            Lut2D::new(rows, domain)?
                .with_name(title)
                .with_comments(comments)
                .into()
        }
        CubeSize::ThreeD(n) => {
            let expected = n * n * n;
            if rows.len() != expected {
                return Err(LutError::InvalidSize(format!(
                    "LUT_3D_SIZE {n} expects {expected} rows, found {}",
                    rows.len()
                )));
            }
            // File rows run red fastest; memory runs blue fastest.
            let mut table = vec![[0.0; 3]; expected];
            for b in 0..n {
                for g in 0..n {
                    for r in 0..n {
                        table[(r * n + g) * n + b] = rows[(b * n + g) * n + r];
                    }
                }
            }
            Lut3D::new(table, domain)?
                .with_name(title)
                .with_comments(comments)
                .into()
        }
    };
    Ok(lut)
}

/// Rejects a declared size outside `2..=max`.
pub(crate) fn check_size(n: usize, max: usize, line: usize) -> LutResult<usize> {
    if !(2..=max).contains(&n) {
        return Err(LutError::parse(line, format!("size {n} outside 2..={max}")));
    }
    Ok(n)
}

pub(crate) fn parse_sizes<const N: usize>(tokens: &[&str], line: usize) -> LutResult<[usize; N]> {
    if tokens.len() != N {
        return Err(LutError::parse(line, format!("expected {N} sizes, found {}", tokens.len())));
    }
    let mut sizes = [0; N];
    for (size, token) in sizes.iter_mut().zip(tokens) {
        *size = parse_token(token, line)?;
    }
    Ok(sizes)
}

/// Writes a LUT as .cube to `writer`.
///
/// [`Lut1D`](crate::Lut1D) tables are written as 3x1D tables with the curve
/// on every channel.
pub fn write_cube_to<W: Write>(mut writer: W, lut: &Lut, decimals: usize) -> LutResult<()> {
    let tiled;
    let lut = match lut {
        Lut::Lut1D(curve) => {
            tiled = Lut::from(Lut2D::from_curve(curve));
            &tiled
        }
        other => other,
    };

    let (keyword, size, max, domain, rows) = match lut {
        Lut::Lut2D(lut) => ("LUT_1D_SIZE", lut.size(), MAX_1D_SIZE, lut.domain(), lut.table().to_vec()),
        Lut::Lut3D(lut) => {
            let n = lut.size();
            let mut rows = Vec::with_capacity(n * n * n);
            for b in 0..n {
                for g in 0..n {
                    for r in 0..n {
                        rows.push(lut.get(r, g, b));
                    }
                }
            }
            ("LUT_3D_SIZE", n, MAX_3D_SIZE, lut.domain(), rows)
        }
        Lut::Lut1D(_) => {
            return Err(LutError::UnsupportedLut("1D table was not tiled".into()));
        }
    };

    if !(2..=max).contains(&size) {
        return Err(LutError::InvalidSize(format!(
            "{keyword} must be within [2, {max}], got {size}"
        )));
    }

    for comment in lut.comments() {
        writeln!(writer, "# {comment}")?;
    }
    writeln!(writer, "TITLE \"{}\"", lut.name())?;
    writeln!(writer, "{keyword} {size}")?;
    if !lut.is_domain_default() {
        writeln!(writer, "DOMAIN_MIN {}", format_row(&domain[0], decimals))?;
        writeln!(writer, "DOMAIN_MAX {}", format_row(&domain[1], decimals))?;
    }
    for row in &rows {
        writeln!(writer, "{}", format_row(row, decimals))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a LUT to a .cube file.
pub fn write_cube<P: AsRef<Path>>(path: P, lut: &Lut, decimals: usize) -> LutResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_cube_to(BufWriter::new(file), lut, decimals)?;
    debug!(path = %path.display(), dimensions = lut.dimensions(), size = lut.size(), "wrote .cube");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lut1D;
    use std::io::Cursor;

    #[test]
    fn parse_3d_cube() {
        let cube = r#"
# Test LUT
TITLE "Test Grade"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let lut = parse_cube(Cursor::new(cube), "fallback").expect("parse failed");
        assert_eq!(lut.name(), "Test Grade");
        assert_eq!(lut.comments(), ["Test LUT"]);
        assert_eq!(lut, Lut::from(Lut3D::identity(2).unwrap()));
    }

    #[test]
    fn parse_1d_cube() {
        let cube = r#"
LUT_1D_SIZE 3
DOMAIN_MIN -0.1 -0.1 -0.1
DOMAIN_MAX 1.5 1.5 1.5
0.0 0.0 0.0
0.5 0.25 0.125
1.0 1.0 1.0
"#;
        let lut = parse_cube(Cursor::new(cube), "Gamma").expect("parse failed");
        let lut2d = lut.as_lut2d().expect("3x1D");
        assert_eq!(lut.name(), "Gamma");
        assert_eq!(lut2d.size(), 3);
        assert_eq!(lut2d.domain(), [[-0.1; 3], [1.5; 3]]);
        assert_eq!(lut2d.table()[1], [0.5, 0.25, 0.125]);
    }

    #[test]
    fn parse_input_range() {
        let cube = "LUT_1D_SIZE 2\nLUT_1D_INPUT_RANGE 0 4\n0 0 0\n1 1 1\n";
        let lut = parse_cube(Cursor::new(cube), "x").unwrap();
        assert_eq!(lut.as_lut2d().unwrap().domain(), [[0.0; 3], [4.0; 3]]);
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        let cube = "LUT_1D_SIZE 2\nLUT_IN_VIDEO_RANGE\n0 0 0\n1 1 1\n";
        assert!(parse_cube(Cursor::new(cube), "x").is_ok());
    }

    #[test]
    fn errors_carry_line_numbers() {
        let cube = "LUT_1D_SIZE 2\n0 0 0\n1 x 1\n";
        match parse_cube(Cursor::new(cube), "x") {
            Err(LutError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {other:?}"),
        }

        let cube = "LUT_1D_SIZE 2\n0 0\n1 1 1\n";
        assert!(matches!(
            parse_cube(Cursor::new(cube), "x"),
            Err(LutError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn row_count_mismatch() {
        let cube = "LUT_3D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(matches!(parse_cube(Cursor::new(cube), "x"), Err(LutError::InvalidSize(_))));
        assert!(parse_cube(Cursor::new("0 0 0\n"), "x").is_err());
        assert!(parse_cube(Cursor::new("LUT_1D_SIZE 2\nLUT_3D_SIZE 2\n"), "x").is_err());
    }

    #[test]
    fn size_keyword_out_of_range() {
        for cube in [
            "LUT_3D_SIZE 4294967296\n0 0 0\n",
            "LUT_3D_SIZE 257\n0 0 0\n",
            "LUT_3D_SIZE 1\n0 0 0\n",
            "# header\nLUT_1D_SIZE 65537\n0 0 0\n",
            "LUT_1D_SIZE 0\n",
        ] {
            assert!(
                matches!(parse_cube(Cursor::new(cube), "x"), Err(LutError::Parse { .. })),
                "{cube:?}"
            );
        }
        assert!(matches!(
            parse_cube(Cursor::new("# header\nLUT_1D_SIZE 65537\n"), "x"),
            Err(LutError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn write_1d_as_3x1d() {
        let lut = Lut::from(
            Lut1D::new(vec![0.0, 0.5, 1.0], [-0.1, 1.5])
                .unwrap()
                .with_name("Ramp")
                .with_comments(vec!["A comment".into()]),
        );
        let mut buffer = Vec::new();
        write_cube_to(&mut buffer, &lut, 3).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let expected = "# A comment\n\
                        TITLE \"Ramp\"\n\
                        LUT_1D_SIZE 3\n\
                        DOMAIN_MIN -0.100 -0.100 -0.100\n\
                        DOMAIN_MAX 1.500 1.500 1.500\n\
                        0.000 0.000 0.000\n\
                        0.500 0.500 0.500\n\
                        1.000 1.000 1.000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn write_3d_red_fastest() {
        let lut = Lut::from(Lut3D::identity(2).unwrap());
        let mut buffer = Vec::new();
        write_cube_to(&mut buffer, &lut, 1).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TITLE \"Unity 2\"");
        assert_eq!(lines[1], "LUT_3D_SIZE 2");
        assert_eq!(lines[2], "0.0 0.0 0.0");
        assert_eq!(lines[3], "1.0 0.0 0.0");
        assert_eq!(lines[4], "0.0 1.0 0.0");
        assert_eq!(lines.len(), 10);
    }
}
