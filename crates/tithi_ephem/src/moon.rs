//! Geocentric lunar longitude from the truncated ELP-2000/82 series.
//!
//! Mean longitude plus the periodic terms of Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 47, Table 47.A, with the eccentricity factor `E` applied
//! to terms involving the Sun's mean anomaly and the three additive corrections
//! (Venus, Jupiter, flattening). Accuracy is about 10 arcseconds.

use crate::sun::normalize_deg;

/// Fundamental arguments `[L', D, M, M', F]` in degrees (not normalized).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // L': Moon's mean longitude
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    // D: mean elongation of the Moon
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    // M: Sun's mean anomaly
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    // M': Moon's mean anomaly
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    // F: Moon's argument of latitude
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    [lp, d, m, mp, f]
}

/// Sum of the periodic longitude terms, in units of 1e-6 degree.
fn longitude_perturbation(t: f64, args: &[f64; 5]) -> f64 {
    // Table 47.A, longitude column: [nD, nM, nM', nF, coefficient (1e-6 deg)]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 59] = [
        [0.0,  0.0,  1.0,  0.0,  6_288_774.0],
        [2.0,  0.0, -1.0,  0.0,  1_274_027.0],
        [2.0,  0.0,  0.0,  0.0,    658_314.0],
        [0.0,  0.0,  2.0,  0.0,    213_618.0],
        [0.0,  1.0,  0.0,  0.0,   -185_116.0],
        [0.0,  0.0,  0.0,  2.0,   -114_332.0],
        [2.0,  0.0, -2.0,  0.0,     58_793.0],
        [2.0, -1.0, -1.0,  0.0,     57_066.0],
        [2.0,  0.0,  1.0,  0.0,     53_322.0],
        [2.0, -1.0,  0.0,  0.0,     45_758.0],
        [0.0,  1.0, -1.0,  0.0,    -40_923.0],
        [1.0,  0.0,  0.0,  0.0,    -34_720.0],
        [0.0,  1.0,  1.0,  0.0,    -30_383.0],
        [2.0,  0.0,  0.0, -2.0,     15_327.0],
        [0.0,  0.0,  1.0,  2.0,    -12_528.0],
        [0.0,  0.0,  1.0, -2.0,     10_980.0],
        [4.0,  0.0, -1.0,  0.0,     10_675.0],
        [0.0,  0.0,  3.0,  0.0,     10_034.0],
        [4.0,  0.0, -2.0,  0.0,      8_548.0],
        [2.0,  1.0, -1.0,  0.0,     -7_888.0],
        [2.0,  1.0,  0.0,  0.0,     -6_766.0],
        [1.0,  0.0, -1.0,  0.0,     -5_163.0],
        [1.0,  1.0,  0.0,  0.0,      4_987.0],
        [2.0, -1.0,  1.0,  0.0,      4_036.0],
        [2.0,  0.0,  2.0,  0.0,      3_994.0],
        [4.0,  0.0,  0.0,  0.0,      3_861.0],
        [2.0,  0.0, -3.0,  0.0,      3_665.0],
        [0.0,  1.0, -2.0,  0.0,     -2_689.0],
        [2.0,  0.0, -1.0,  2.0,     -2_602.0],
        [2.0, -1.0, -2.0,  0.0,      2_390.0],
        [1.0,  0.0,  1.0,  0.0,     -2_348.0],
        [2.0, -2.0,  0.0,  0.0,      2_236.0],
        [0.0,  1.0,  2.0,  0.0,     -2_120.0],
        [0.0,  2.0,  0.0,  0.0,     -2_069.0],
        [2.0, -2.0, -1.0,  0.0,      2_048.0],
        [2.0,  0.0,  1.0, -2.0,     -1_773.0],
        [2.0,  0.0,  0.0,  2.0,     -1_595.0],
        [4.0, -1.0, -1.0,  0.0,      1_215.0],
        [0.0,  0.0,  2.0,  2.0,     -1_110.0],
        [3.0,  0.0, -1.0,  0.0,       -892.0],
        [2.0,  1.0,  1.0,  0.0,       -810.0],
        [4.0, -1.0, -2.0,  0.0,        759.0],
        [0.0,  2.0, -1.0,  0.0,       -713.0],
        [2.0,  2.0, -1.0,  0.0,       -700.0],
        [2.0,  1.0, -2.0,  0.0,        691.0],
        [2.0, -1.0,  0.0, -2.0,        596.0],
        [4.0,  0.0,  1.0,  0.0,        549.0],
        [0.0,  0.0,  4.0,  0.0,        537.0],
        [4.0, -1.0,  0.0,  0.0,        520.0],
        [1.0,  0.0, -2.0,  0.0,       -487.0],
        [2.0,  1.0,  0.0, -2.0,       -399.0],
        [0.0,  0.0,  2.0, -2.0,       -381.0],
        [1.0,  1.0,  1.0,  0.0,        351.0],
        [3.0,  0.0, -2.0,  0.0,       -340.0],
        [4.0,  0.0, -3.0,  0.0,        330.0],
        [2.0, -1.0,  2.0,  0.0,        327.0],
        [0.0,  2.0,  1.0,  0.0,       -323.0],
        [1.0,  1.0, -1.0,  0.0,        299.0],
        [2.0,  0.0,  3.0,  0.0,        294.0],
    ];

    let [lp, d, m, mp, f] = *args;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let (d, m, mp, f) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());
    let mut sum = 0.0_f64;
    for term in &TERMS {
        let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
        let ecc = match term[1].abs() as u8 {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += term[4] * ecc * arg.sin();
    }

    // Additive terms: A1 (Venus), A2 (Jupiter), L' - F (Earth flattening)
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp.to_radians() - f).sin() + 318.0 * a2.sin();

    sum
}

/// Moon's geocentric ecliptic longitude (mean equinox of date) in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn geocentric_longitude_deg(t: f64) -> f64 {
    let args = fundamental_arguments_deg(t);
    normalize_deg(args[0] + longitude_perturbation(t, &args) * 1e-6)
}
