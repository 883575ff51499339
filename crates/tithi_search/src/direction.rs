//! Direction probes and cell-normalized angles.
//!
//! The folded separation rises from 0 to 180 through the waxing half of a
//! lunation and falls back to 0 through the waning half. Everything downstream
//! needs to know which half it is in and where the angle sits inside its cell.

use chrono::{DateTime, Utc};
use tithi_ephem::AngleOracle;

use crate::search_types::SearchConfig;

/// Whether the folded separation is growing or shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Waxing: separation moving from 0 toward 180.
    Increasing,
    /// Waning: separation moving from 180 toward 0.
    Decreasing,
}

impl Direction {
    /// `+1` for increasing, `-1` for decreasing.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Increasing => 1,
            Self::Decreasing => -1,
        }
    }

    /// True when cell-normalized angles must be mirrored.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Decreasing)
    }
}

/// Direction of travel of the separation between two instants.
///
/// Compares cosines, so an interval straddling a reversal reports the net
/// movement rather than failing. Equal cosines count as increasing.
pub fn movement_direction<O>(oracle: &O, start: DateTime<Utc>, end: DateTime<Utc>) -> Direction
where
    O: AngleOracle + ?Sized,
{
    let c0 = oracle.angle(start).to_radians().cos();
    let c1 = oracle.angle(end).to_radians().cos();
    if c0 - c1 >= 0.0 {
        Direction::Increasing
    } else {
        Direction::Decreasing
    }
}

/// Fold `angle` into `[0, range)`.
pub fn fold_to_cell(angle: f64, range: f64) -> f64 {
    angle - (angle / range).floor() * range
}

/// Position of the separation inside its cell.
///
/// With `reverse` set the value is mirrored (`range - folded`), so that a
/// decreasing separation still produces a rising sawtooth that drops to zero
/// at each boundary.
pub fn normalized_angle<O>(oracle: &O, instant: DateTime<Utc>, reverse: bool, range: f64) -> f64
where
    O: AngleOracle + ?Sized,
{
    let folded = fold_to_cell(oracle.angle(instant), range);
    if reverse { range - folded } else { folded }
}

/// Cell index and direction-adjusted angle at a confirmed crossing.
///
/// The separation is rounded to whole degrees. If it is shrinking over the
/// configured forward window the angle is mapped onto the waning half
/// (`360 - a`), with 360 wrapping back to 0. The index is `angle / step + 1`.
pub fn tithi_index_and_angle<O>(
    oracle: &O,
    instant: DateTime<Utc>,
    config: &SearchConfig,
) -> (u8, u16)
where
    O: AngleOracle + ?Sized,
{
    let raw = oracle.angle(instant).clamp(0.0, 180.0).round() as u16;
    let angle = match movement_direction(oracle, instant, instant + config.direction_window) {
        Direction::Increasing => raw,
        Direction::Decreasing => 360 - raw,
    };
    let angle = if angle >= 360 { 0 } else { angle };
    let index = (angle / config.angular_step_deg) as u8 + 1;
    (index, angle)
}
