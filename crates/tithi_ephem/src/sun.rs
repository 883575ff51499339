//! Low-precision solar longitude.
//!
//! Geometric mean longitude plus equation of the centre, referred to the mean
//! equinox of date (Meeus, *Astronomical Algorithms* 2nd ed., Chapter 25).
//! Accuracy is about 0.01 deg, ample for a folded elongation oracle.

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Sun's mean anomaly in degrees (not normalized).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35999.05029 * t - 0.0001537 * t * t
}

/// Sun's true geometric longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn true_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = mean_anomaly_deg(t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    normalize_deg(l0 + c)
}

/// Sun's longitude corrected for annual aberration, in degrees [0, 360).
///
/// Nutation is left out: it shifts Sun and Moon equally and cancels in the elongation.
pub fn aberrated_longitude_deg(t: f64) -> f64 {
    normalize_deg(true_longitude_deg(t) - 0.00569)
}
