//! Sun-Moon elongation oracle for tithi search.
//!
//! This crate provides:
//! - The [`AngleOracle`] contract: absolute Sun-Moon separation in `[0, 180]` at a UTC instant
//! - [`LunisolarElongation`], an analytic low-precision oracle (Meeus Sun + Moon series)
//! - Julian Date helpers for `chrono` instants
//!
//! Search code never looks inside an oracle; anything that maps an instant to a
//! folded separation angle can drive it, including plain closures.

pub mod elongation;
pub mod julian;
pub mod moon;
pub mod sun;

use chrono::{DateTime, Utc};

pub use elongation::{DEFAULT_DELTA_T_SECONDS, LunisolarElongation, fold_elongation};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, centuries_since_j2000,
    jd_from_utc, tt_centuries,
};

/// Absolute angular separation between the Moon and the Sun.
///
/// Implementations must be pure: equal instants give equal angles. The returned
/// value is in degrees within `[0, 180]`.
pub trait AngleOracle {
    /// Separation in degrees `[0, 180]` at `instant`.
    fn angle(&self, instant: DateTime<Utc>) -> f64;
}

impl<F> AngleOracle for F
where
    F: Fn(DateTime<Utc>) -> f64,
{
    fn angle(&self, instant: DateTime<Utc>) -> f64 {
        self(instant)
    }
}
