//! Name-based conversion between colour models.
//!
//! Every conversion is routed through CIE XYZ scaled to [0, 1]. Models that
//! work on a [0, 100] scale (CIE UVW, Hunter Lab, Hunter Rdab) are rescaled on the way in
//! and out.
//!
//! # Example
//!
//! ```rust
//! use colour_models::convert::{convert, ConvertOptions, Model};
//!
//! let lab = convert(
//!     [0.20654008, 0.12197225, 0.05136952],
//!     Model::CieXyz,
//!     "cie lab".parse().unwrap(),
//!     &ConvertOptions::default(),
//! );
//! assert!((lab[0] - 41.52787529).abs() < 1e-6);
//! ```

use crate::cie_lab::{lab_to_lchab, lab_to_xyz, lchab_to_lab, xyz_to_lab};
use crate::cie_luv::{lchuv_to_luv, luv_to_lchuv, luv_to_xyz, xyz_to_luv};
use crate::cie_ucs::{ucs_to_xyz, xyz_to_ucs};
use crate::cie_uvw::{uvw_to_xyz, xyz_to_uvw};
use crate::cie_xyy::{xy_to_xyz, xyy_to_xyz, xyz_to_xyy};
use crate::din99::{din99_to_lab, lab_to_din99, Din99Factors};
use crate::error::{ModelError, ModelResult};
use crate::hunter_lab::{hunter_lab_to_xyz, xyz_to_hunter_lab};
use crate::hunter_rdab::{hunter_rdab_to_xyz, xyz_to_hunter_rdab};
use crate::igpgtg::{igpgtg_to_xyz, xyz_to_igpgtg};
use crate::illuminants::{self, HunterLabReference, D65};
use crate::ipt::{ipt_to_xyz, xyz_to_ipt};
use crate::jzazbz::{jzazbz_to_xyz, xyz_to_jzazbz};
use crate::oklab::{oklab_to_xyz, xyz_to_oklab};
use colour_utils::CaseInsensitiveMapping;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::trace;

/// Colour model names accepted by [`convert`].
pub const COLOURSPACE_MODELS: [&str; 15] = [
    "CIE XYZ",
    "CIE xyY",
    "CIE Lab",
    "CIE LCHab",
    "CIE Luv",
    "CIE LCHuv",
    "CIE UCS",
    "CIE UVW",
    "DIN99",
    "Hunter Lab",
    "Hunter Rdab",
    "IPT",
    "IgPgTg",
    "Oklab",
    "JzAzBz",
];

/// A colour model reachable through [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    /// CIE 1931 XYZ tristimulus values.
    #[serde(rename = "CIE XYZ")]
    CieXyz,
    /// CIE xyY.
    #[serde(rename = "CIE xyY")]
    CieXyy,
    /// CIE 1976 L*a*b*.
    #[serde(rename = "CIE Lab")]
    CieLab,
    /// Cylindrical CIE L*a*b*.
    #[serde(rename = "CIE LCHab")]
    CieLchab,
    /// CIE 1976 L*u*v*.
    #[serde(rename = "CIE Luv")]
    CieLuv,
    /// Cylindrical CIE L*u*v*.
    #[serde(rename = "CIE LCHuv")]
    CieLchuv,
    /// CIE 1960 UCS.
    #[serde(rename = "CIE UCS")]
    CieUcs,
    /// CIE 1964 U*V*W*.
    #[serde(rename = "CIE UVW")]
    CieUvw,
    /// DIN99.
    #[serde(rename = "DIN99")]
    Din99,
    /// Hunter L,a,b.
    #[serde(rename = "Hunter Lab")]
    HunterLab,
    /// Hunter Rd,a,b.
    #[serde(rename = "Hunter Rdab")]
    HunterRdab,
    /// IPT.
    #[serde(rename = "IPT")]
    Ipt,
    /// IgPgTg.
    #[serde(rename = "IgPgTg")]
    IgPgTg,
    /// Oklab.
    #[serde(rename = "Oklab")]
    Oklab,
    /// JzAzBz.
    #[serde(rename = "JzAzBz")]
    JzAzBz,
}

impl Model {
    /// Every model, in [`COLOURSPACE_MODELS`] order.
    pub const ALL: [Model; 15] = [
        Self::CieXyz,
        Self::CieXyy,
        Self::CieLab,
        Self::CieLchab,
        Self::CieLuv,
        Self::CieLchuv,
        Self::CieUcs,
        Self::CieUvw,
        Self::Din99,
        Self::HunterLab,
        Self::HunterRdab,
        Self::Ipt,
        Self::IgPgTg,
        Self::Oklab,
        Self::JzAzBz,
    ];

    /// Canonical model name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CieXyz => "CIE XYZ",
            Self::CieXyy => "CIE xyY",
            Self::CieLab => "CIE Lab",
            Self::CieLchab => "CIE LCHab",
            Self::CieLuv => "CIE Luv",
            Self::CieLchuv => "CIE LCHuv",
            Self::CieUcs => "CIE UCS",
            Self::CieUvw => "CIE UVW",
            Self::Din99 => "DIN99",
            Self::HunterLab => "Hunter Lab",
            Self::HunterRdab => "Hunter Rdab",
            Self::Ipt => "IPT",
            Self::IgPgTg => "IgPgTg",
            Self::Oklab => "Oklab",
            Self::JzAzBz => "JzAzBz",
        }
    }

    /// Axis labels of the model's three components.
    pub const fn axis_labels(&self) -> [&'static str; 3] {
        match self {
            Self::CieXyz => ["X", "Y", "Z"],
            Self::CieXyy => ["x", "y", "Y"],
            Self::CieLab => ["L*", "a*", "b*"],
            Self::CieLchab => ["L*", "C*ab", "h_ab"],
            Self::CieLuv => ["L*", "u*", "v*"],
            Self::CieLchuv => ["L*", "C*uv", "h_uv"],
            Self::CieUcs => ["U", "V", "W"],
            Self::CieUvw => ["U*", "V*", "W*"],
            Self::Din99 => ["L99", "a99", "b99"],
            Self::HunterLab => ["L", "a", "b"],
            Self::HunterRdab => ["Rd", "a", "b"],
            Self::Ipt => ["I", "P", "T"],
            Self::IgPgTg => ["Ig", "Pg", "Tg"],
            Self::Oklab => ["L", "a", "b"],
            Self::JzAzBz => ["Jz", "Az", "Bz"],
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn models_by_name() -> &'static CaseInsensitiveMapping<Model> {
    static MODELS: OnceLock<CaseInsensitiveMapping<Model>> = OnceLock::new();
    MODELS.get_or_init(|| Model::ALL.iter().map(|m| (m.name(), *m)).collect())
}

impl FromStr for Model {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        models_by_name()
            .get(s.trim())
            .copied()
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

/// Options for [`convert`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Reference illuminant chromaticity.
    pub illuminant: [f64; 2],
    /// Hunter Lab reference white and coefficients.
    pub hunter_lab: HunterLabReference,
    /// DIN99 weighting factors.
    pub din99: Din99Factors,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            illuminant: D65,
            hunter_lab: crate::hunter_lab::HUNTER_LAB_D65,
            din99: Din99Factors::default(),
        }
    }
}

impl ConvertOptions {
    /// Uses a named reference illuminant.
    ///
    /// Hunter Lab takes the tabulated reference data when the illuminant has
    /// some, otherwise the reference white derives from the chromaticity.
    pub fn with_illuminant(mut self, name: &str) -> ModelResult<Self> {
        self.illuminant = illuminants::illuminant(name)?;
        self.hunter_lab = illuminants::hunter_lab_illuminant(name).unwrap_or_else(|_| {
            let xyz_n = xy_to_xyz(self.illuminant).map(|v| v * 100.0);
            HunterLabReference {
                xyz_n,
                k_ab: crate::hunter_lab::xyz_to_k_ab_hunter_lab_1966(xyz_n),
            }
        });
        Ok(self)
    }

    /// Sets the DIN99 weighting factors.
    pub fn with_din99(mut self, factors: Din99Factors) -> Self {
        self.din99 = factors;
        self
    }
}

fn to_xyz(value: [f64; 3], from: Model, opts: &ConvertOptions) -> [f64; 3] {
    let w = opts.illuminant;
    match from {
        Model::CieXyz => value,
        Model::CieXyy => xyy_to_xyz(value),
        Model::CieLab => lab_to_xyz(value, w),
        Model::CieLchab => lab_to_xyz(lchab_to_lab(value), w),
        Model::CieLuv => luv_to_xyz(value, w),
        Model::CieLchuv => luv_to_xyz(lchuv_to_luv(value), w),
        Model::CieUcs => ucs_to_xyz(value),
        Model::CieUvw => uvw_to_xyz(value, w).map(|v| v / 100.0),
        Model::Din99 => lab_to_xyz(din99_to_lab(value, opts.din99), w),
        Model::HunterLab => {
            let HunterLabReference { xyz_n, k_ab } = opts.hunter_lab;
            hunter_lab_to_xyz(value, xyz_n, Some(k_ab)).map(|v| v / 100.0)
        }
        Model::HunterRdab => {
            let HunterLabReference { xyz_n, k_ab } = opts.hunter_lab;
            hunter_rdab_to_xyz(value, xyz_n, Some(k_ab)).map(|v| v / 100.0)
        }
        Model::Ipt => ipt_to_xyz(value),
        Model::IgPgTg => igpgtg_to_xyz(value),
        Model::Oklab => oklab_to_xyz(value),
        Model::JzAzBz => jzazbz_to_xyz(value),
    }
}

fn from_xyz(xyz: [f64; 3], to: Model, opts: &ConvertOptions) -> [f64; 3] {
    let w = opts.illuminant;
    match to {
        Model::CieXyz => xyz,
        Model::CieXyy => xyz_to_xyy(xyz, w),
        Model::CieLab => xyz_to_lab(xyz, w),
        Model::CieLchab => lab_to_lchab(xyz_to_lab(xyz, w)),
        Model::CieLuv => xyz_to_luv(xyz, w),
        Model::CieLchuv => luv_to_lchuv(xyz_to_luv(xyz, w)),
        Model::CieUcs => xyz_to_ucs(xyz),
        Model::CieUvw => xyz_to_uvw(xyz.map(|v| v * 100.0), w),
        Model::Din99 => lab_to_din99(xyz_to_lab(xyz, w), opts.din99),
        Model::HunterLab => {
            let HunterLabReference { xyz_n, k_ab } = opts.hunter_lab;
            xyz_to_hunter_lab(xyz.map(|v| v * 100.0), xyz_n, Some(k_ab))
        }
        Model::HunterRdab => {
            let HunterLabReference { xyz_n, k_ab } = opts.hunter_lab;
            xyz_to_hunter_rdab(xyz.map(|v| v * 100.0), xyz_n, Some(k_ab))
        }
        Model::Ipt => xyz_to_ipt(xyz),
        Model::IgPgTg => xyz_to_igpgtg(xyz),
        Model::Oklab => xyz_to_oklab(xyz),
        Model::JzAzBz => xyz_to_jzazbz(xyz),
    }
}

/// Converts `value` from one colour model to another through CIE XYZ.
pub fn convert(value: [f64; 3], from: Model, to: Model, opts: &ConvertOptions) -> [f64; 3] {
    if from == to {
        return value;
    }
    let xyz = to_xyz(value, from, opts);
    trace!(%from, %to, ?xyz, "converting through CIE XYZ");
    from_xyz(xyz, to, opts)
}

/// Same as [`convert`], with models given by name.
pub fn convert_by_name(
    value: [f64; 3],
    from: &str,
    to: &str,
    opts: &ConvertOptions,
) -> ModelResult<[f64; 3]> {
    Ok(convert(value, from.parse()?, to.parse()?, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XYZ: [f64; 3] = [0.20654008, 0.12197225, 0.05136952];

    #[test]
    fn test_model_names() {
        assert_eq!(COLOURSPACE_MODELS.len(), Model::ALL.len());
        for (name, model) in COLOURSPACE_MODELS.iter().zip(Model::ALL) {
            assert_eq!(model.name(), *name);
            assert_eq!(name.to_uppercase().parse::<Model>().unwrap(), model);
        }
        assert_eq!(
            "CIE CAM16".parse::<Model>(),
            Err(ModelError::UnknownModel("CIE CAM16".into()))
        );
    }

    #[test]
    fn test_convert_to_lab() {
        let lab = convert(XYZ, Model::CieXyz, Model::CieLab, &ConvertOptions::default());
        assert_abs_diff_eq!(lab[1], 52.63858304, epsilon = 1e-6);
    }

    #[test]
    fn test_convert_scaled_models() {
        let opts = ConvertOptions::default();
        let uvw = convert(XYZ, Model::CieXyz, Model::CieUvw, &opts);
        assert_abs_diff_eq!(uvw[2], 40.54757405, epsilon = 1e-6);

        let hunter = convert(XYZ, Model::CieXyz, Model::HunterLab, &opts);
        assert_abs_diff_eq!(hunter[0], 34.92452577, epsilon = 1e-6);
    }

    #[test]
    fn test_every_pair_round_trips() {
        let opts = ConvertOptions::default().with_illuminant("D50").unwrap();
        for from in Model::ALL {
            let value = convert(XYZ, Model::CieXyz, from, &opts);
            for to in Model::ALL {
                let there = convert(value, from, to, &opts);
                let back = convert(there, to, Model::CieXyz, &opts);
                for i in 0..3 {
                    assert_abs_diff_eq!(back[i], XYZ[i], epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_derived_hunter_lab_reference() {
        let opts = ConvertOptions::default().with_illuminant("D75").unwrap();
        assert_eq!(opts.hunter_lab.xyz_n[1], 100.0);
        assert!(ConvertOptions::default().with_illuminant("Z").is_err());
    }

    #[test]
    fn test_convert_by_name() {
        let xyy = convert_by_name(XYZ, "cie xyz", "CIE XYY", &ConvertOptions::default()).unwrap();
        assert_abs_diff_eq!(xyy[0], 0.54369557, epsilon = 1e-7);
    }
}
