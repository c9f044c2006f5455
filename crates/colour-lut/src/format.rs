//! LUT format registry and dispatch.
//!
//! Formats are looked up by method name or file extension, both
//! case-insensitively.
//!
//! | Method | Extension | Holds |
//! |--------|-----------|-------|
//! | Iridas Cube | `.cube` | 3x1D, 3D (1D written as 3x1D) |
//! | Sony SPI1D | `.spi1d` | 1D, 3x1D |
//! | Sony SPI3D | `.spi3d` | 3D |

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use colour_utils::CaseInsensitiveMapping;
use tracing::debug;

use crate::{cube, spi, Lut, LutError, LutResult};

/// Fractional digits written by [`write_lut`] unless told otherwise.
pub const DEFAULT_DECIMALS: usize = 7;

/// Reads a LUT file.
pub type ReadMethod = fn(&Path) -> LutResult<Lut>;

/// Writes a LUT file with the given number of fractional digits.
pub type WriteMethod = fn(&Path, &Lut, usize) -> LutResult<()>;

/// Supported LUT file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LutFormat {
    /// Iridas / Resolve `.cube`.
    IridasCube,
    /// Sony `.spi1d`.
    SonySpi1d,
    /// Sony `.spi3d`.
    SonySpi3d,
}

impl LutFormat {
    /// Every format.
    pub const ALL: [LutFormat; 3] = [Self::IridasCube, Self::SonySpi1d, Self::SonySpi3d];

    /// Method name.
    pub fn name(self) -> &'static str {
        match self {
            Self::IridasCube => "Iridas Cube",
            Self::SonySpi1d => "Sony SPI1D",
            Self::SonySpi3d => "Sony SPI3D",
        }
    }

    /// File extension, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Self::IridasCube => ".cube",
            Self::SonySpi1d => ".spi1d",
            Self::SonySpi3d => ".spi3d",
        }
    }

    /// Format registered for the extension of `path`.
    pub fn from_path(path: &Path) -> LutResult<Self> {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        extension_to_lut_format()
            .get(&extension)
            .copied()
            .ok_or_else(|| {
                LutError::UnsupportedFormat(format!(
                    "no LUT format for extension {extension:?} of {}",
                    path.display()
                ))
            })
    }

    fn read_method(self) -> ReadMethod {
        match self {
            Self::IridasCube => |path| cube::read_cube(path),
            Self::SonySpi1d => |path| spi::read_spi1d(path),
            Self::SonySpi3d => |path| spi::read_spi3d(path),
        }
    }

    fn write_method(self) -> WriteMethod {
        match self {
            Self::IridasCube => |path, lut, decimals| cube::write_cube(path, lut, decimals),
            Self::SonySpi1d => |path, lut, decimals| spi::write_spi1d(path, lut, decimals),
            Self::SonySpi3d => |path, lut, decimals| spi::write_spi3d(path, lut, decimals),
        }
    }
}

impl fmt::Display for LutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LutFormat {
    type Err = LutError;

    fn from_str(s: &str) -> LutResult<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LutError::UnsupportedFormat(format!("unknown LUT method {s:?}")))
    }
}

/// Extension (with leading dot) to format.
pub fn extension_to_lut_format() -> &'static CaseInsensitiveMapping<LutFormat> {
    static EXTENSIONS: OnceLock<CaseInsensitiveMapping<LutFormat>> = OnceLock::new();
    EXTENSIONS.get_or_init(|| LutFormat::ALL.iter().map(|f| (f.extension(), *f)).collect())
}

/// Method name to reader.
pub fn lut_read_methods() -> &'static CaseInsensitiveMapping<ReadMethod> {
    static READERS: OnceLock<CaseInsensitiveMapping<ReadMethod>> = OnceLock::new();
    READERS.get_or_init(|| {
        LutFormat::ALL
            .iter()
            .map(|f| (f.name(), f.read_method()))
            .collect()
    })
}

/// Method name to writer.
pub fn lut_write_methods() -> &'static CaseInsensitiveMapping<WriteMethod> {
    static WRITERS: OnceLock<CaseInsensitiveMapping<WriteMethod>> = OnceLock::new();
    WRITERS.get_or_init(|| {
        LutFormat::ALL
            .iter()
            .map(|f| (f.name(), f.write_method()))
            .collect()
    })
}

fn method_name(path: &Path, method: Option<&str>) -> LutResult<String> {
    match method {
        Some(method) => Ok(method.to_string()),
        None => LutFormat::from_path(path).map(|f| f.name().to_string()),
    }
}

/// Reads a LUT file.
///
/// The format comes from `method` when given, otherwise from the file
/// extension.
///
/// # Example
///
/// ```rust,no_run
/// use colour_lut::read_lut;
///
/// let lut = read_lut("ACES_Proxy_10_to_ACES.cube", None)?;
/// let spi = read_lut("grade.lut", Some("sony spi3d"))?;
/// # Ok::<(), colour_lut::LutError>(())
/// ```
pub fn read_lut<P: AsRef<Path>>(path: P, method: Option<&str>) -> LutResult<Lut> {
    let path = path.as_ref();
    let method = method_name(path, method)?;
    let reader = lut_read_methods()
        .get(&method)
        .ok_or_else(|| LutError::UnsupportedFormat(format!("unknown LUT method {method:?}")))?;
    debug!(path = %path.display(), method = %method, "read_lut");
    reader(path)
}

/// Writes a LUT file.
///
/// The format comes from `method` when given, otherwise from the file
/// extension. Fails with [`LutError::UnsupportedLut`] when the format cannot
/// hold `lut`.
pub fn write_lut<P: AsRef<Path>>(
    lut: &Lut,
    path: P,
    decimals: usize,
    method: Option<&str>,
) -> LutResult<()> {
    let path = path.as_ref();
    let method = method_name(path, method)?;
    let writer = lut_write_methods()
        .get(&method)
        .ok_or_else(|| LutError::UnsupportedFormat(format!("unknown LUT method {method:?}")))?;
    debug!(path = %path.display(), method = %method, decimals, "write_lut");
    writer(path, lut, decimals)
}
