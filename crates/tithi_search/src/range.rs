//! Multi-day tithi search.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tithi_ephem::AngleOracle;
use tracing::debug;

use crate::day::scan_day;
use crate::direction::tithi_index_and_angle;
use crate::error::SearchError;
use crate::search_types::SearchConfig;
use crate::tithi_types::Tithi;

/// Raw folded separation at `instant`, straight from the oracle.
pub fn angle_between<O>(oracle: &O, instant: DateTime<Utc>) -> f64
where
    O: AngleOracle + ?Sized,
{
    oracle.angle(instant)
}

/// Tithis that begin on the civil dates `start.date()..=end.date()` (UTC).
///
/// Only the dates of `start` and `end` matter; every day in between is
/// scanned whole. When `index_filter` is given only those indices are kept.
///
/// # Errors
/// [`SearchError::InvalidRange`] unless `start < end`, and
/// [`SearchError::InvalidPrecision`] unless `precision` is finite and positive.
pub fn find_tithi_in_range<O>(
    oracle: &O,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    index_filter: Option<&HashSet<u8>>,
    precision: f64,
) -> Result<Vec<Tithi>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    search_tithi_in_range(
        oracle,
        start,
        end,
        index_filter,
        &SearchConfig::with_precision(precision),
    )
}

/// [`find_tithi_in_range`] with an explicit configuration.
///
/// A crossing whose index equals that of the crossing examined just before it
/// is dropped. That comparison runs before the filter, so a filtered-out
/// crossing still suppresses a repeat of its own index.
pub fn search_tithi_in_range<O>(
    oracle: &O,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    index_filter: Option<&HashSet<u8>>,
    config: &SearchConfig,
) -> Result<Vec<Tithi>, SearchError>
where
    O: AngleOracle + ?Sized,
{
    if start >= end {
        return Err(SearchError::InvalidRange { start, end });
    }
    config.validate()?;

    let first = start.date_naive();
    let last = end.date_naive();
    let mut result = Vec::new();
    let mut previous_index: Option<u8> = None;
    let mut days = 0usize;

    for date in first.iter_days().take_while(|d| *d <= last) {
        days += 1;
        for instant in scan_day(oracle, date, config)? {
            let (index, angle) = tithi_index_and_angle(oracle, instant, config);
            if previous_index == Some(index) {
                debug!(%instant, index, "dropping repeat of previous index");
                continue;
            }
            previous_index = Some(index);
            if index_filter.is_none_or(|f| f.contains(&index)) {
                result.push(Tithi::new(index, instant, angle));
            }
        }
    }

    debug!(%first, %last, days, count = result.len(), "range scan complete");
    Ok(result)
}
