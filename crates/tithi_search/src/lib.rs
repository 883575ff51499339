//! Tithi boundary search.
//!
//! A tithi begins whenever the folded Sun-Moon separation crosses a multiple of
//! 12 degrees. This crate finds those instants to a chosen angular precision:
//! - Direction probes and cell-normalized angles
//! - Crossing bisection and the monotonic span scan built on it
//! - Reversal (new/full moon) bisection
//! - Per-day and multi-day scans, with duplicate suppression and index filtering
//!
//! Every operation is generic over [`tithi_ephem::AngleOracle`], so any model of
//! the separation (or a plain closure) can drive it.

pub mod crossing;
pub mod day;
pub mod direction;
pub mod error;
pub mod extrema;
pub mod range;
pub mod search_types;
pub mod search_util;
pub mod tithi_types;

pub use crossing::{crossings_in_range, locate_crossing, try_locate_crossing};
pub use day::{day_bounds, find_tithi_by_day, search_tithi_by_day};
pub use direction::{
    Direction, fold_to_cell, movement_direction, normalized_angle, tithi_index_and_angle,
};
pub use error::SearchError;
pub use extrema::locate_extremum;
pub use range::{angle_between, find_tithi_in_range, search_tithi_in_range};
pub use search_types::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION_DEG, SearchConfig, TITHI_STEP_DEG,
};
pub use search_util::Interval;
pub use tithi_types::{Paksha, Tithi};
