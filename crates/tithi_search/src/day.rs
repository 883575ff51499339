//! Per-day crossing scan.
//!
//! A UTC civil day `[00:00:00, 23:59:59]` either sees the separation move one
//! way throughout, or contains exactly one reversal (new or full moon). The two
//! cases are told apart by comparing the whole-day direction with the directions
//! over the first and last resolution step.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tithi_ephem::AngleOracle;
use tracing::debug;

use crate::crossing::{crossings_in_range, try_locate_crossing};
use crate::direction::{Direction, movement_direction};
use crate::error::SearchError;
use crate::extrema::locate_extremum;
use crate::search_types::SearchConfig;

/// Scanned span of a civil day: midnight to one second before the next midnight.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1) - Duration::seconds(1))
}

/// Crossing instants on the UTC civil date of `day`, default config.
///
/// The time of day in `day` is ignored. Adjacent instants may fall in the same
/// cell; [`crate::find_tithi_in_range`] is what removes those.
pub fn find_tithi_by_day<O>(
    oracle: &O,
    day: DateTime<Utc>,
    precision: f64,
) -> Result<Vec<DateTime<Utc>>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    search_tithi_by_day(oracle, day.date_naive(), &SearchConfig::with_precision(precision))
}

/// Crossing instants on `date` with an explicit configuration.
pub fn search_tithi_by_day<O>(
    oracle: &O,
    date: NaiveDate,
    config: &SearchConfig,
) -> Result<Vec<DateTime<Utc>>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    config.validate()?;
    scan_day(oracle, date, config)
}

/// Day scan without argument validation.
pub(crate) fn scan_day<O>(
    oracle: &O,
    date: NaiveDate,
    config: &SearchConfig,
) -> Result<Vec<DateTime<Utc>>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    let (day_start, day_end) = day_bounds(date);
    let resolution = config.resolution;

    let day_dir = movement_direction(oracle, day_start, day_end);
    let start_dir = movement_direction(oracle, day_start, day_start + resolution);
    let end_dir = movement_direction(oracle, day_end - resolution, day_end);

    if day_dir == start_dir && day_dir == end_dir {
        let mut found = crossings_in_range(oracle, day_start, day_end, day_dir, config)?;
        add_edge_reversals(oracle, day_start, day_end, config, &mut found);
        add_seam_crossing(oracle, day_end, day_dir, config, &mut found)?;
        debug!(%date, direction = ?day_dir, count = found.len(), "monotonic day");
        return Ok(found);
    }

    let extremum = locate_extremum(
        oracle,
        day_start,
        day_end,
        start_dir == Direction::Increasing,
        config,
    )?;
    let gap = config.crossing_gap();
    let mut found = Vec::new();
    if extremum - day_start > gap {
        found.extend(crossings_in_range(oracle, day_start, extremum - gap, start_dir, config)?);
    }
    found.push(extremum);
    if day_end - extremum > gap {
        found.extend(crossings_in_range(oracle, extremum + gap, day_end, end_dir, config)?);
    }
    add_seam_crossing(oracle, day_end, end_dir, config, &mut found)?;
    debug!(%date, %extremum, count = found.len(), "reversal day");
    Ok(found)
}

/// Report a reversal squeezed into the first or last resolution step.
///
/// Such a day probes as monotonic, and the crossing search never brackets the
/// turn. An edge whose angle is within one resolution step of travel from 0
/// or 180 is taken as the reversal.
fn add_edge_reversals<O>(
    oracle: &O,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    config: &SearchConfig,
    found: &mut Vec<DateTime<Utc>>,
) where
    O: AngleOracle + ?Sized,
{
    let a_start = oracle.angle(day_start);
    let a_end = oracle.angle(day_end);
    let span_ms = (day_end - day_start).num_milliseconds() as f64;
    let tolerance = (a_end - a_start).abs() * config.resolution.num_milliseconds() as f64 / span_ms;
    let near_reversal = |a: f64| a <= tolerance || a >= 180.0 - tolerance;

    if near_reversal(a_start) && found.first() != Some(&day_start) {
        debug!(%day_start, angle = a_start, "reversal at start of day");
        found.insert(0, day_start);
    }
    if near_reversal(a_end) && found.last() != Some(&day_end) {
        debug!(%day_end, angle = a_end, "reversal at end of day");
        found.push(day_end);
    }
}

/// Look for a crossing in the last second, between `day_end` and the next midnight.
///
/// Neither this day's windows nor the next day's bracket that second. Skipped
/// when the day already has an instant within one crossing gap of its end. A hit
/// exactly at the next midnight is left for the next day, whose start sees it.
fn add_seam_crossing<O>(
    oracle: &O,
    day_end: DateTime<Utc>,
    direction: Direction,
    config: &SearchConfig,
    found: &mut Vec<DateTime<Utc>>,
) -> Result<(), SearchError>
where
    O: AngleOracle + ?Sized,
{
    if found.last().is_some_and(|t| day_end - *t < config.crossing_gap()) {
        return Ok(());
    }
    let next_midnight = day_end + Duration::seconds(1);
    let hit = try_locate_crossing(oracle, day_end, next_midnight, direction.is_reversed(), config)?;
    if let Some(t) = hit.filter(|t| *t < next_midnight) {
        debug!(%t, "crossing in the midnight seam");
        found.push(t);
    }
    Ok(())
}
