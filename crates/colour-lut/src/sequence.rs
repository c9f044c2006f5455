//! Ordered chains of LUTs.

use std::fmt;

use crate::Lut;

/// LUTs applied one after another.
///
/// # Example
///
/// ```rust
/// use colour_lut::{Lut1D, Lut3D, LutSequence};
///
/// let mut sequence = LutSequence::new();
/// sequence.push(Lut1D::identity(16)?.powf(2.0));
/// sequence.push(Lut3D::identity(17)?);
/// let out = sequence.apply([0.5, 0.5, 0.5]);
/// assert!((out[0] - 0.25).abs() < 1e-2);
/// # Ok::<(), colour_lut::LutError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LutSequence {
    luts: Vec<Lut>,
}

impl LutSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a LUT.
    pub fn push(&mut self, lut: impl Into<Lut>) {
        self.luts.push(lut.into());
    }

    /// Inserts a LUT at `index`, shifting the ones after it.
    ///
    /// `index` is clamped to the sequence length.
    pub fn insert(&mut self, index: usize, lut: impl Into<Lut>) {
        let index = index.min(self.luts.len());
        self.luts.insert(index, lut.into());
    }

    /// Removes and returns the LUT at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Lut> {
        (index < self.luts.len()).then(|| self.luts.remove(index))
    }

    /// LUT at `index`.
    pub fn get(&self, index: usize) -> Option<&Lut> {
        self.luts.get(index)
    }

    /// Number of LUTs.
    pub fn len(&self) -> usize {
        self.luts.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.luts.is_empty()
    }

    /// Iterates the LUTs in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Lut> {
        self.luts.iter()
    }

    /// Applies every LUT in turn.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.luts.iter().fold(rgb, |acc, lut| lut.apply(acc))
    }
}

impl FromIterator<Lut> for LutSequence {
    fn from_iter<I: IntoIterator<Item = Lut>>(iter: I) -> Self {
        Self {
            luts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LutSequence {
    type Item = &'a Lut;
    type IntoIter = std::slice::Iter<'a, Lut>;

    fn into_iter(self) -> Self::IntoIter {
        self.luts.iter()
    }
}

impl fmt::Display for LutSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.luts.iter().map(Lut::kind).collect::<Vec<_>>().join(" --> ");
        writeln!(f, "LUT Sequence")?;
        writeln!(f, "------------")?;
        writeln!(f)?;
        writeln!(f, "Overview")?;
        writeln!(f)?;
        writeln!(f, "    {overview}")?;
        writeln!(f)?;
        writeln!(f, "Operations")?;
        write!(f, "----------")?;
        for lut in &self.luts {
            writeln!(f)?;
            for line in lut.to_string().lines() {
                write!(f, "\n    {line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lut1D, Lut2D, Lut3D};

    fn sequence() -> LutSequence {
        let mut sequence = LutSequence::new();
        sequence.push(Lut1D::identity(16).unwrap() + 0.25);
        sequence.push(Lut3D::identity(9).unwrap() * 2.0);
        sequence
    }

    #[test]
    fn test_apply_order() {
        let out = sequence().apply([0.0, 0.25, 0.5]);
        assert_eq!(out.map(|v| (v * 1e9).round() / 1e9), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_edit() {
        let mut sequence = sequence();
        sequence.insert(1, Lut2D::identity(4).unwrap());
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.get(1).map(Lut::kind), Some("LUT2D"));

        assert!(sequence.remove(5).is_none());
        assert_eq!(sequence.remove(0).map(|l| l.dimensions()), Some(1));
        assert_eq!(sequence.iter().count(), 2);
    }

    #[test]
    fn test_display_overview() {
        let text = sequence().to_string();
        assert!(text.starts_with("LUT Sequence\n------------\n\nOverview\n\n    LUT1D --> LUT3D\n"));
        assert!(text.contains("\n    LUT3D - Unity 9\n"));
    }
}
