//! Luo, Cui and Li (2006) uniform colour spaces on CIECAM02 and CAM16 `JMh`.
//!
//! Hue `h` is in degrees. Only the `JMh` transforms are provided; computing
//! `JMh` from CIE XYZ needs a full colour appearance model.

/// Coefficients of a Luo et al. (2006) uniform colour space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UcsCoefficients {
    /// Lightness parameter.
    pub k_l: f64,
    /// Lightness compression.
    pub c_1: f64,
    /// Colourfulness compression.
    pub c_2: f64,
}

/// Large colour differences.
pub const UCS_LCD: UcsCoefficients = UcsCoefficients { k_l: 0.77, c_1: 0.007, c_2: 0.0053 };
/// Small colour differences.
pub const UCS_SCD: UcsCoefficients = UcsCoefficients { k_l: 1.24, c_1: 0.007, c_2: 0.0363 };
/// Uniform colour space.
pub const UCS_UCS: UcsCoefficients = UcsCoefficients { k_l: 1.00, c_1: 0.007, c_2: 0.0228 };

/// Converts `JMh` correlates to `J'a'b'`.
pub fn jmh_to_ucs_luo2006(jmh: [f64; 3], coefficients: UcsCoefficients) -> [f64; 3] {
    let [j, m, h] = jmh;
    let UcsCoefficients { c_1, c_2, .. } = coefficients;

    let j_p = ((1.0 + 100.0 * c_1) * j) / (1.0 + c_1 * j);
    let m_p = (c_2 * m).ln_1p() / c_2;
    let (sin_h, cos_h) = h.to_radians().sin_cos();

    [j_p, m_p * cos_h, m_p * sin_h]
}

/// Converts `J'a'b'` back to `JMh` correlates.
pub fn ucs_luo2006_to_jmh(jab: [f64; 3], coefficients: UcsCoefficients) -> [f64; 3] {
    let [j_p, a_p, b_p] = jab;
    let UcsCoefficients { c_1, c_2, .. } = coefficients;

    let j = -j_p / (c_1 * j_p - 1.0 - 100.0 * c_1);
    let m_p = a_p.hypot(b_p);
    let m = (c_2 * m_p).exp_m1() / c_2;
    let h = b_p.atan2(a_p).to_degrees().rem_euclid(360.0);

    [j, m, h]
}

macro_rules! ucs_pair {
    ($to:ident, $from:ident, $coefficients:ident, $doc:literal) => {
        #[doc = concat!("Converts `JMh` to ", $doc, ".")]
        pub fn $to(jmh: [f64; 3]) -> [f64; 3] {
            jmh_to_ucs_luo2006(jmh, $coefficients)
        }

        #[doc = concat!("Converts ", $doc, " to `JMh`.")]
        pub fn $from(jab: [f64; 3]) -> [f64; 3] {
            ucs_luo2006_to_jmh(jab, $coefficients)
        }
    };
}

ucs_pair!(jmh_ciecam02_to_cam02lcd, cam02lcd_to_jmh_ciecam02, UCS_LCD, "CAM02-LCD");
ucs_pair!(jmh_ciecam02_to_cam02scd, cam02scd_to_jmh_ciecam02, UCS_SCD, "CAM02-SCD");
ucs_pair!(jmh_ciecam02_to_cam02ucs, cam02ucs_to_jmh_ciecam02, UCS_UCS, "CAM02-UCS");
ucs_pair!(jmh_cam16_to_cam16lcd, cam16lcd_to_jmh_cam16, UCS_LCD, "CAM16-LCD");
ucs_pair!(jmh_cam16_to_cam16scd, cam16scd_to_jmh_cam16, UCS_SCD, "CAM16-SCD");
ucs_pair!(jmh_cam16_to_cam16ucs, cam16ucs_to_jmh_cam16, UCS_UCS, "CAM16-UCS");

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const JMH: [f64; 3] = [41.73109113, 0.10873867, 219.04843359];

    fn assert_triplet(actual: [f64; 3], expected: [f64; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_jmh_to_cam02() {
        assert_triplet(
            jmh_ciecam02_to_cam02lcd(JMH),
            [54.90433133917284, -0.08442361623069054, -0.06848314076710224],
        );
        assert_triplet(
            jmh_ciecam02_to_cam02scd(JMH),
            [54.90433133917284, -0.08428171144068604, -0.06836802978106192],
        );
        assert_triplet(
            jmh_ciecam02_to_cam02ucs(JMH),
            [54.90433133917284, -0.08434343046575442, -0.06841809530621326],
        );
    }

    #[test]
    fn test_cam16_shares_transform() {
        assert_eq!(jmh_cam16_to_cam16ucs(JMH), jmh_ciecam02_to_cam02ucs(JMH));
        assert_eq!(cam16lcd_to_jmh_cam16(JMH), cam02lcd_to_jmh_ciecam02(JMH));
    }

    #[test]
    fn test_round_trip() {
        for coefficients in [UCS_LCD, UCS_SCD, UCS_UCS] {
            let jmh = ucs_luo2006_to_jmh(jmh_to_ucs_luo2006(JMH, coefficients), coefficients);
            assert_triplet(jmh, JMH);
        }
        let jmh = cam16scd_to_jmh_cam16(jmh_cam16_to_cam16scd([60.0, 25.0, 10.0]));
        assert_triplet(jmh, [60.0, 25.0, 10.0]);
    }

    #[test]
    fn test_white_lightness_fixed() {
        let [j_p, a_p, b_p] = jmh_to_ucs_luo2006([100.0, 0.0, 0.0], UCS_UCS);
        assert_abs_diff_eq!(j_p, 100.0, epsilon = 1e-12);
        assert_eq!([a_p, b_p], [0.0, 0.0]);
    }
}
