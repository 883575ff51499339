//! Configuration for crossing and reversal searches.

use chrono::Duration;

use crate::error::SearchError;

/// Angular width of one tithi in degrees.
pub const TITHI_STEP_DEG: u16 = 12;

/// Default angular tolerance in degrees.
pub const DEFAULT_PRECISION_DEG: f64 = 0.001;

/// Default bisection cap. A day halves to a nanosecond in under 50 steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Configuration shared by every search stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Width of one angular cell in degrees (default 12). Must divide 180 and be at least 2.
    pub angular_step_deg: u16,
    /// Angular tolerance in degrees that ends a bisection (default 0.001).
    pub precision_deg: f64,
    /// Time-resolution floor for reversal search and edge direction probes (default 1 min).
    pub resolution: Duration,
    /// Forward window used to classify the direction at a confirmed crossing (default 1 h).
    pub direction_window: Duration,
    /// Maximum bisection iterations before reporting no convergence (default 64).
    pub max_iterations: u32,
}

impl SearchConfig {
    /// Standard 12-degree tithi config with the given angular precision.
    pub fn with_precision(precision_deg: f64) -> Self {
        Self {
            precision_deg,
            ..Self::default()
        }
    }

    /// Config for an alternate cell width, otherwise default.
    pub fn with_step(angular_step_deg: u16) -> Self {
        Self {
            angular_step_deg,
            ..Self::default()
        }
    }

    /// Cell width in degrees as a float.
    pub fn step(&self) -> f64 {
        f64::from(self.angular_step_deg)
    }

    /// Number of distinct cell indices over a full 360-degree cycle.
    pub fn cells(&self) -> u16 {
        360 / self.angular_step_deg
    }

    /// Time window that holds at most one crossing: one hour per degree of step.
    ///
    /// Elongation advances less than one degree per hour, so a window this long
    /// never spans a whole cell, and consecutive crossings (and a reversal and its
    /// nearest neighbouring crossing) are always further apart than this.
    pub fn crossing_gap(&self) -> Duration {
        Duration::hours(i64::from(self.angular_step_deg))
    }

    /// Whether a normalized angle lies within tolerance of a cell boundary.
    pub fn is_boundary(&self, normalized: f64) -> bool {
        normalized <= self.precision_deg || normalized >= self.step() - self.precision_deg
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.precision_deg.is_finite() || self.precision_deg <= 0.0 {
            return Err(SearchError::InvalidPrecision(self.precision_deg));
        }
        if self.angular_step_deg < 2 || 180 % self.angular_step_deg != 0 {
            return Err(SearchError::InvalidConfig(
                "angular_step_deg must be at least 2 and divide 180",
            ));
        }
        if self.precision_deg * 2.0 >= self.step() {
            return Err(SearchError::InvalidConfig(
                "precision_deg must be less than half the angular step",
            ));
        }
        if self.resolution <= Duration::zero() {
            return Err(SearchError::InvalidConfig("resolution must be positive"));
        }
        if self.direction_window <= Duration::zero() {
            return Err(SearchError::InvalidConfig(
                "direction_window must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be > 0"));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            angular_step_deg: TITHI_STEP_DEG,
            precision_deg: DEFAULT_PRECISION_DEG,
            resolution: Duration::minutes(1),
            direction_window: Duration::hours(1),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
