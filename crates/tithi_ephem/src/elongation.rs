//! Folded Moon-Sun elongation.

use chrono::{DateTime, Utc};

use crate::AngleOracle;
use crate::julian::tt_centuries;
use crate::{moon, sun};

/// Default ΔT = TT − UTC in seconds (close to the 2000–2025 average).
pub const DEFAULT_DELTA_T_SECONDS: f64 = 69.2;

/// Fold a longitude difference into the absolute separation `[0, 180]`.
pub fn fold_elongation(diff_deg: f64) -> f64 {
    let d = diff_deg.abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Analytic Sun-Moon elongation oracle.
///
/// Evaluates the truncated lunar series and the low-precision solar theory at
/// `UTC + ΔT` and folds the longitude difference into `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarElongation {
    delta_t_seconds: f64,
}

impl LunisolarElongation {
    /// Oracle with an explicit ΔT (TT − UTC) in seconds.
    pub fn new(delta_t_seconds: f64) -> Self {
        Self { delta_t_seconds }
    }

    /// ΔT (TT − UTC) in seconds used by this oracle.
    pub fn delta_t_seconds(&self) -> f64 {
        self.delta_t_seconds
    }

    /// Unfolded elongation `(moon − sun) mod 360` in degrees [0, 360).
    pub fn signed_elongation_deg(&self, instant: DateTime<Utc>) -> f64 {
        let t = tt_centuries(instant, self.delta_t_seconds);
        (moon::geocentric_longitude_deg(t) - sun::aberrated_longitude_deg(t)).rem_euclid(360.0)
    }
}

impl Default for LunisolarElongation {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_T_SECONDS)
    }
}

impl AngleOracle for LunisolarElongation {
    fn angle(&self, instant: DateTime<Utc>) -> f64 {
        fold_elongation(self.signed_elongation_deg(instant))
    }
}
