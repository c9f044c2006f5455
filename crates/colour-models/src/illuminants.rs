//! Reference illuminants.
//!
//! CIE 1931 2° standard observer chromaticities and the Hunter Lab reference
//! tristimulus values, both keyed by case-insensitive name.

use crate::error::{ModelError, ModelResult};
use colour_utils::CaseInsensitiveMapping;
use std::sync::OnceLock;

/// CIE Illuminant D65 chromaticity.
pub const D65: [f64; 2] = [0.3127, 0.3290];

/// CIE Illuminant D50 chromaticity.
pub const D50: [f64; 2] = [0.3457, 0.3585];

/// Chromaticity coordinates of the CIE 1931 2° illuminants.
pub fn illuminants() -> &'static CaseInsensitiveMapping<[f64; 2]> {
    static ILLUMINANTS: OnceLock<CaseInsensitiveMapping<[f64; 2]>> = OnceLock::new();
    ILLUMINANTS.get_or_init(|| {
        [
            ("A", [0.44757, 0.40745]),
            ("C", [0.31006, 0.31616]),
            ("D50", D50),
            ("D55", [0.33242, 0.34743]),
            ("D60", [0.32168, 0.33767]),
            ("D65", D65),
            ("D75", [0.29902, 0.31485]),
            ("E", [1.0 / 3.0, 1.0 / 3.0]),
            ("F2", [0.37208, 0.37529]),
            ("F7", [0.31292, 0.32933]),
            ("F11", [0.38052, 0.37713]),
        ]
        .into_iter()
        .collect()
    })
}

/// Looks up an illuminant chromaticity by name.
///
/// ```rust
/// use colour_models::illuminants::{illuminant, D65};
///
/// assert_eq!(illuminant("d65").unwrap(), D65);
/// assert!(illuminant("D93").is_err());
/// ```
pub fn illuminant(name: &str) -> ModelResult<[f64; 2]> {
    illuminants()
        .get(name)
        .copied()
        .ok_or_else(|| ModelError::UnknownIlluminant(name.to_string()))
}

/// Hunter Lab reference values for an illuminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterLabReference {
    /// Reference white tristimulus values, Y = 100.
    pub xyz_n: [f64; 3],
    /// Chromaticity coefficients `[K_a, K_b]`.
    pub k_ab: [f64; 2],
}

/// Hunter Lab reference data for the CIE 1931 2° observer.
pub fn hunter_lab_illuminants() -> &'static CaseInsensitiveMapping<HunterLabReference> {
    static HUNTER_LAB: OnceLock<CaseInsensitiveMapping<HunterLabReference>> = OnceLock::new();
    HUNTER_LAB.get_or_init(|| {
        [
            ("A", [109.83, 100.0, 35.55], [185.20, 38.40]),
            ("C", [98.04, 100.0, 118.11], [175.0, 70.0]),
            ("D50", [96.38, 100.0, 82.45], [173.51, 58.48]),
            ("D65", [95.02, 100.0, 108.82], [172.30, 67.20]),
        ]
        .into_iter()
        .map(|(name, xyz_n, k_ab)| (name, HunterLabReference { xyz_n, k_ab }))
        .collect()
    })
}

/// Looks up Hunter Lab reference data by illuminant name.
pub fn hunter_lab_illuminant(name: &str) -> ModelResult<HunterLabReference> {
    hunter_lab_illuminants()
        .get(name)
        .copied()
        .ok_or_else(|| ModelError::UnknownIlluminant(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illuminant_names() {
        let names: Vec<_> = illuminants().keys().collect();
        assert_eq!(names.first(), Some(&"A"));
        assert!(names.contains(&"F11"));
        assert_eq!(illuminant("f7").unwrap(), [0.31292, 0.32933]);
    }

    #[test]
    fn test_hunter_lab_reference() {
        let d65 = hunter_lab_illuminant("D65").unwrap();
        assert_eq!(d65.xyz_n, [95.02, 100.0, 108.82]);
        assert_eq!(
            hunter_lab_illuminant("F2"),
            Err(ModelError::UnknownIlluminant("F2".into()))
        );
    }
}
