//! DIN99 colourspace.
//!
//! A logarithmic compression of CIE L*a*b* with a 16° rotated opponent
//! plane, weighted by the `k_E` (lightness) and `k_CH` (chroma) factors.

const HUE_ROTATION: f64 = 16.0;
const F_SCALE: f64 = 0.7;
const CHROMA_FACTOR: f64 = 0.045;
const L_FACTOR: f64 = 105.509;
const L_SLOPE: f64 = 0.0158;

/// DIN99 weighting factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99Factors {
    /// Lightness factor `k_E`.
    pub k_e: f64,
    /// Chroma factor `k_CH`.
    pub k_ch: f64,
}

impl Default for Din99Factors {
    fn default() -> Self {
        Self { k_e: 1.0, k_ch: 1.0 }
    }
}

/// Converts CIE L*a*b* to DIN99.
///
/// ```rust
/// use colour_models::din99::{lab_to_din99, Din99Factors};
///
/// let din99 = lab_to_din99([41.52787529, 52.63858304, 26.92317922], Din99Factors::default());
/// assert!((din99[0] - 53.22821988).abs() < 1e-6);
/// ```
pub fn lab_to_din99(lab: [f64; 3], factors: Din99Factors) -> [f64; 3] {
    let [l, a, b] = lab;
    let Din99Factors { k_e, k_ch } = factors;
    let (sin, cos) = HUE_ROTATION.to_radians().sin_cos();

    let e = cos * a + sin * b;
    let f = F_SCALE * (-sin * a + cos * b);
    let g = e.hypot(f);
    let h_ef = f.atan2(e);

    let c_99 = (1.0 + CHROMA_FACTOR * g).ln() / (CHROMA_FACTOR * k_ch * k_e);
    let l_99 = L_FACTOR * (1.0 + L_SLOPE * l).ln() * k_e;

    [l_99, c_99 * h_ef.cos(), c_99 * h_ef.sin()]
}

/// Converts DIN99 to CIE L*a*b*.
pub fn din99_to_lab(din99: [f64; 3], factors: Din99Factors) -> [f64; 3] {
    let [l_99, a_99, b_99] = din99;
    let Din99Factors { k_e, k_ch } = factors;
    let (sin, cos) = HUE_ROTATION.to_radians().sin_cos();

    let h_99 = b_99.atan2(a_99);
    let c_99 = a_99.hypot(b_99);
    let g = ((CHROMA_FACTOR * c_99 * k_ch * k_e).exp() - 1.0) / CHROMA_FACTOR;

    let e = g * h_99.cos();
    let f = g * h_99.sin();

    [
        ((l_99 / (L_FACTOR * k_e)).exp() - 1.0) / L_SLOPE,
        e * cos - (f / F_SCALE) * sin,
        e * sin + (f / F_SCALE) * cos,
    ]
}
