//! Golden-value integration tests for tithi range and day search.
//!
//! Runs the full pipeline against the built-in analytic elongation model and
//! checks sequence invariants plus published new/full moon times (NASA).

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tithi_ephem::{AngleOracle, LunisolarElongation};
use tithi_search::{
    SearchConfig, SearchError, Tithi, angle_between, find_tithi_by_day, find_tithi_in_range,
    search_tithi_in_range,
};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn assert_continuous(tithis: &[Tithi], step: i32) {
    for pair in tithis.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.timestamp < b.timestamp, "not increasing: {a} then {b}");
        assert_ne!(a.index, b.index, "repeated index: {a} then {b}");
        let diff = (i32::from(b.angle) - i32::from(a.angle)).rem_euclid(360);
        assert_eq!(diff, step, "gap: {a} then {b}");
    }
}

fn find_near(tithis: &[Tithi], index: u8, expected: DateTime<Utc>) -> Tithi {
    let hit = tithis
        .iter()
        .find(|t| t.index == index && (t.timestamp - expected).abs() < Duration::hours(12))
        .copied();
    hit.unwrap_or_else(|| panic!("no index {index} near {expected} in {tithis:?}"))
}

// ---------------------------------------------------------------------------
// Sequence properties
// ---------------------------------------------------------------------------

#[test]
fn five_years_are_continuous() {
    let oracle = LunisolarElongation::default();
    let tithis =
        find_tithi_in_range(&oracle, utc(2020, 1, 1, 0, 0), utc(2025, 1, 31, 0, 0), None, 0.001)
            .unwrap();
    assert!(!tithis.is_empty());
    // ~371 tithis per year
    assert!(tithis.len() > 1850 && tithis.len() < 1920, "count = {}", tithis.len());
    assert_continuous(&tithis, 12);
    assert!(tithis.iter().all(|t| (1..=30).contains(&t.index)));
}

#[test]
fn filtered_quarter_century() {
    let oracle = LunisolarElongation::default();
    let wanted: HashSet<u8> = [11, 26].into_iter().collect();
    let tithis = find_tithi_in_range(
        &oracle,
        utc(2000, 1, 1, 0, 0),
        utc(2025, 1, 31, 0, 0),
        Some(&wanted),
        0.001,
    )
    .unwrap();
    assert!(!tithis.is_empty());
    assert!(tithis.iter().all(|t| t.index == 11 || t.index == 26));
    // Two ekadashis per lunation, ~310 lunations
    assert!(tithis.len() > 600 && tithis.len() < 640, "count = {}", tithis.len());
    assert!(tithis.iter().any(|t| t.index == 11));
    assert!(tithis.iter().any(|t| t.index == 26));
}

#[test]
fn single_day_range() {
    let oracle = LunisolarElongation::default();
    let tithis =
        find_tithi_in_range(&oracle, utc(2023, 9, 6, 0, 0), utc(2023, 9, 7, 0, 0), None, 0.001)
            .unwrap();
    assert!(!tithis.is_empty());
    assert_continuous(&tithis, 12);
}

#[test]
fn single_day_scan() {
    let oracle = LunisolarElongation::default();
    let instants = find_tithi_by_day(&oracle, utc(2023, 9, 7, 0, 0), 0.001).unwrap();
    assert!(!instants.is_empty());
    let day = utc(2023, 9, 7, 0, 0).date_naive();
    assert!(instants.iter().all(|t| t.date_naive() == day), "{instants:?}");
}

#[test]
fn crossings_land_on_boundaries() {
    let oracle = LunisolarElongation::default();
    let tithis =
        find_tithi_in_range(&oracle, utc(2024, 6, 1, 0, 0), utc(2024, 6, 30, 0, 0), None, 0.001)
            .unwrap();
    for t in &tithis {
        let a = oracle.angle(t.timestamp);
        let off = (a - (a / 12.0).round() * 12.0).abs();
        // reversals stop within a couple of minutes of the turn
        let tolerance = if t.angle == 0 || t.angle == 180 { 0.05 } else { 0.002 };
        assert!(off < tolerance, "{t}: angle {a}");
    }
}

#[test]
fn six_degree_cells() {
    let oracle = LunisolarElongation::default();
    let tithis = search_tithi_in_range(
        &oracle,
        utc(2024, 1, 1, 0, 0),
        utc(2024, 3, 1, 0, 0),
        None,
        &SearchConfig::with_step(6),
    )
    .unwrap();
    assert!(tithis.len() > 115, "count = {}", tithis.len());
    assert_continuous(&tithis, 6);
    assert!(tithis.iter().all(|t| (1..=60).contains(&t.index)));
}

// ---------------------------------------------------------------------------
// New and full moons
// ---------------------------------------------------------------------------

/// NASA: New Moon 2024-Jan-11 ~11:57 UTC, Full Moon 2024-Jan-25 ~17:54 UTC
#[test]
fn lunations_jan_2024() {
    let oracle = LunisolarElongation::default();
    let tithis =
        find_tithi_in_range(&oracle, utc(2024, 1, 1, 0, 0), utc(2024, 1, 31, 0, 0), None, 0.001)
            .unwrap();
    let amavasya_end = find_near(&tithis, 1, utc(2024, 1, 11, 11, 57));
    assert!((amavasya_end.timestamp - utc(2024, 1, 11, 11, 57)).abs() < Duration::minutes(15));
    assert_eq!(amavasya_end.angle, 0);

    let purnima_end = find_near(&tithis, 16, utc(2024, 1, 25, 17, 54));
    assert!((purnima_end.timestamp - utc(2024, 1, 25, 17, 54)).abs() < Duration::minutes(15));
    assert_eq!(purnima_end.angle, 180);
    assert_eq!(purnima_end.name(), "Pratipada");
}

/// NASA: New Moon 2024-Apr-08 ~18:21 UTC (total solar eclipse), Full Moon 2024-Apr-23 ~23:49 UTC
#[test]
fn lunations_apr_2024() {
    let oracle = LunisolarElongation::default();
    let tithis =
        find_tithi_in_range(&oracle, utc(2024, 4, 1, 0, 0), utc(2024, 4, 30, 0, 0), None, 0.001)
            .unwrap();
    let new_moon = find_near(&tithis, 1, utc(2024, 4, 8, 18, 21));
    assert!((new_moon.timestamp - utc(2024, 4, 8, 18, 21)).abs() < Duration::minutes(15));

    let full_moon = find_near(&tithis, 16, utc(2024, 4, 23, 23, 49));
    assert!((full_moon.timestamp - utc(2024, 4, 23, 23, 49)).abs() < Duration::minutes(15));
}

/// 2024 had twelve full moons.
#[test]
fn purnimas_2024() {
    let oracle = LunisolarElongation::default();
    let wanted: HashSet<u8> = [16].into_iter().collect();
    let tithis = find_tithi_in_range(
        &oracle,
        utc(2024, 1, 1, 0, 0),
        utc(2024, 12, 31, 0, 0),
        Some(&wanted),
        0.001,
    )
    .unwrap();
    assert_eq!(tithis.len(), 12, "{tithis:?}");
}

// ---------------------------------------------------------------------------
// Argument validation and oracle range
// ---------------------------------------------------------------------------

#[test]
fn rejects_invalid_arguments() {
    let oracle = LunisolarElongation::default();
    let t1 = utc(2023, 9, 6, 0, 0);
    let t2 = utc(2023, 9, 7, 0, 0);

    let same = find_tithi_in_range(&oracle, t1, t1, None, 0.001).unwrap_err();
    assert!(matches!(same, SearchError::InvalidRange { .. }));
    assert!(same.is_out_of_range());

    let reversed = find_tithi_in_range(&oracle, t2, t1, None, 0.001).unwrap_err();
    assert!(matches!(reversed, SearchError::InvalidRange { .. }));

    let precision = find_tithi_in_range(&oracle, t1, t2, None, -0.001).unwrap_err();
    assert!(matches!(precision, SearchError::InvalidPrecision(_)));

    let day = find_tithi_by_day(&oracle, t1, -0.001).unwrap_err();
    assert!(day.is_out_of_range());
}

#[test]
fn angle_stays_folded() {
    let oracle = LunisolarElongation::default();
    let mut t = utc(2000, 1, 1, 0, 0);
    let end = utc(2001, 1, 1, 0, 0);
    while t < end {
        let a = angle_between(&oracle, t);
        assert!((0.0..=180.0).contains(&a), "{t}: {a}");
        t += Duration::minutes(97);
    }
}
