//! Dimension-agnostic LUT handle returned by the format readers.

use serde::Serialize;
use std::fmt;

use crate::{Interpolation, Lut1D, Lut2D, Lut3D};

/// Any of the three LUT types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Lut {
    /// 1D LUT.
    Lut1D(Lut1D),
    /// 3x1D LUT.
    Lut2D(Lut2D),
    /// 3D LUT.
    Lut3D(Lut3D),
}

impl Lut {
    /// 1, 2 or 3.
    pub fn dimensions(&self) -> usize {
        match self {
            Lut::Lut1D(lut) => lut.dimensions(),
            Lut::Lut2D(lut) => lut.dimensions(),
            Lut::Lut3D(lut) => lut.dimensions(),
        }
    }

    /// Type label used in summaries: `LUT1D`, `LUT2D` or `LUT3D`.
    pub fn kind(&self) -> &'static str {
        match self {
            Lut::Lut1D(_) => "LUT1D",
            Lut::Lut2D(_) => "LUT2D",
            Lut::Lut3D(_) => "LUT3D",
        }
    }

    /// LUT name.
    pub fn name(&self) -> &str {
        match self {
            Lut::Lut1D(lut) => &lut.name,
            Lut::Lut2D(lut) => &lut.name,
            Lut::Lut3D(lut) => &lut.name,
        }
    }

    /// Renames the LUT.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Lut::Lut1D(lut) => lut.name = name,
            Lut::Lut2D(lut) => lut.name = name,
            Lut::Lut3D(lut) => lut.name = name,
        }
    }

    /// LUT comments.
    pub fn comments(&self) -> &[String] {
        match self {
            Lut::Lut1D(lut) => &lut.comments,
            Lut::Lut2D(lut) => &lut.comments,
            Lut::Lut3D(lut) => &lut.comments,
        }
    }

    /// Table length, or cube edge length for 3D LUTs.
    pub fn size(&self) -> usize {
        match self {
            Lut::Lut1D(lut) => lut.size(),
            Lut::Lut2D(lut) => lut.size(),
            Lut::Lut3D(lut) => lut.size(),
        }
    }

    /// Whether the domain is [0, 1] on every channel.
    pub fn is_domain_default(&self) -> bool {
        match self {
            Lut::Lut1D(lut) => lut.is_domain_default(),
            Lut::Lut2D(lut) => lut.is_domain_default(),
            Lut::Lut3D(lut) => lut.is_domain_default(),
        }
    }

    /// Sets the interpolation method of a 3D LUT; other LUTs are unchanged.
    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        match self {
            Lut::Lut3D(lut) => Lut::Lut3D(lut.with_interpolation(interpolation)),
            other => other,
        }
    }

    /// Applies the LUT to an RGB triplet.
    ///
    /// A 1D LUT applies its curve to each channel.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            Lut::Lut1D(lut) => rgb.map(|v| lut.apply(v)),
            Lut::Lut2D(lut) => lut.apply(rgb),
            Lut::Lut3D(lut) => lut.apply(rgb),
        }
    }

    /// The inner 1D LUT, if any.
    pub fn as_lut1d(&self) -> Option<&Lut1D> {
        match self {
            Lut::Lut1D(lut) => Some(lut),
            _ => None,
        }
    }

    /// The inner 3x1D LUT, if any.
    pub fn as_lut2d(&self) -> Option<&Lut2D> {
        match self {
            Lut::Lut2D(lut) => Some(lut),
            _ => None,
        }
    }

    /// The inner 3D LUT, if any.
    pub fn as_lut3d(&self) -> Option<&Lut3D> {
        match self {
            Lut::Lut3D(lut) => Some(lut),
            _ => None,
        }
    }
}

impl From<Lut1D> for Lut {
    fn from(lut: Lut1D) -> Self {
        Lut::Lut1D(lut)
    }
}

impl From<Lut2D> for Lut {
    fn from(lut: Lut2D) -> Self {
        Lut::Lut2D(lut)
    }
}

impl From<Lut3D> for Lut {
    fn from(lut: Lut3D) -> Self {
        Lut::Lut3D(lut)
    }
}

impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lut::Lut1D(lut) => lut.fmt(f),
            Lut::Lut2D(lut) => lut.fmt(f),
            Lut::Lut3D(lut) => lut.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let lut: Lut = Lut1D::identity(8).unwrap().powf(2.0).into();
        assert_eq!(lut.dimensions(), 1);
        assert_eq!(lut.kind(), "LUT1D");
        assert_eq!(lut.apply([0.0, 1.0, 0.0]), [0.0, 1.0, 0.0]);
        assert!(lut.as_lut3d().is_none());

        let mut lut: Lut = Lut3D::identity(4).unwrap().into();
        lut.set_name("Cube");
        assert_eq!(lut.name(), "Cube");
        assert_eq!(lut.size(), 4);
        assert!(lut.to_string().starts_with("LUT3D - Cube\n"));
    }

    #[test]
    fn test_with_interpolation() {
        let lut = Lut::from(Lut3D::identity(4).unwrap()).with_interpolation(Interpolation::Nearest);
        assert_eq!(lut.as_lut3d().map(|l| l.interpolation), Some(Interpolation::Nearest));
    }
}
