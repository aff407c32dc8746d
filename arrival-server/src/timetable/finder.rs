//! Next-coincidence search over the arrival index.
//!
//! Schedules repeat every day, so "the next time two trains are in" must be
//! able to wrap past midnight. The search runs in two phases:
//!
//! 1. **Forward**: minutes strictly after the query, up to the end of the day
//!    (or the last recorded slot, if a 12 o'clock PM time pushed one past it).
//! 2. **Wrap**: minutes from midnight up to and including the query minute,
//!    standing in for tomorrow's run of the same schedule.
//!
//! A coincidence at exactly the query minute is therefore only reported when
//! nothing later that day qualifies.

use tracing::debug;

use super::arrival_index::ArrivalIndex;
use crate::domain::MinuteOffset;

/// Minimum number of arrivals at one minute for it to count as a coincidence.
pub const COINCIDENCE_THRESHOLD: u32 = 2;

/// Find the next minute, circularly after `query`, where at least two
/// arrivals coincide.
///
/// Returns `None` if no minute of the day has a coincidence. Midnight is a
/// valid result and comes back as `Some(MinuteOffset::new(0))`.
///
/// Offsets past the end of the day (12 o'clock PM times) are searched like
/// any other minute. A query past the end of the day wraps over every slot up
/// to and including the query.
///
/// # Examples
///
/// ```
/// use arrival_server::domain::{LineName, MinuteOffset};
/// use arrival_server::timetable::{ScheduleStore, find_next};
///
/// let mut store = ScheduleStore::new();
/// let t = |s: &str| MinuteOffset::parse_meridiem(s).unwrap();
/// store.put(LineName::parse("a").unwrap(), vec![t("09:10AM"), t("11:00AM")]).unwrap();
/// store.put(LineName::parse("b").unwrap(), vec![t("09:10AM"), t("10:00AM")]).unwrap();
///
/// // Nothing later today, so we wrap round to tomorrow's 09:10AM
/// assert_eq!(find_next(store.index(), t("10:30AM")), Some(t("09:10AM")));
/// ```
pub fn find_next(index: &ArrivalIndex, query: MinuteOffset) -> Option<MinuteOffset> {
    let q = query.minutes();
    let last = index.last_slot();

    let forward = index
        .minutes_with_at_least(q.saturating_add(1)..=last, COINCIDENCE_THRESHOLD)
        .next();
    if let Some(found) = forward {
        debug!(query = %query, found = %found, "coincidence found in forward phase");
        return Some(found);
    }

    let wrapped = index
        .minutes_with_at_least(0..=q.min(last), COINCIDENCE_THRESHOLD)
        .next();
    match wrapped {
        Some(found) => {
            debug!(query = %query, found = %found, "coincidence found after wrapping")
        }
        None => debug!(query = %query, "no coincidence in the day"),
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(minutes: u32) -> MinuteOffset {
        MinuteOffset::new(minutes)
    }

    fn index_with(minutes: &[u32]) -> ArrivalIndex {
        let mut index = ArrivalIndex::new();
        for &minute in minutes {
            index.increment(m(minute));
        }
        index
    }

    #[test]
    fn empty_index_finds_nothing() {
        let index = ArrivalIndex::new();
        assert_eq!(find_next(&index, m(0)), None);
        assert_eq!(find_next(&index, m(1439)), None);
    }

    #[test]
    fn single_arrivals_are_not_coincidences() {
        let index = index_with(&[550, 660, 785]);
        assert_eq!(find_next(&index, m(630)), None);
    }

    #[test]
    fn forward_phase_finds_later_minute() {
        let index = index_with(&[429, 429, 660, 660]);
        assert_eq!(find_next(&index, m(630)), Some(m(660)));
    }

    #[test]
    fn forward_phase_excludes_query_minute() {
        let index = index_with(&[429, 429, 660, 660]);
        assert_eq!(find_next(&index, m(429)), Some(m(660)));
    }

    #[test]
    fn wrap_phase_includes_query_minute() {
        let index = index_with(&[660, 660]);
        assert_eq!(find_next(&index, m(660)), Some(m(660)));
    }

    #[test]
    fn wraps_past_midnight() {
        let index = index_with(&[429, 429, 660, 660]);
        assert_eq!(find_next(&index, m(690)), Some(m(429)));
        assert_eq!(find_next(&index, m(1439)), Some(m(429)));
    }

    #[test]
    fn midnight_is_found_not_missing() {
        let index = index_with(&[0, 0]);
        assert_eq!(find_next(&index, m(0)), Some(m(0)));
        assert_eq!(find_next(&index, m(720)), Some(m(0)));
    }

    #[test]
    fn last_minute_of_day_is_searched() {
        let index = index_with(&[1439, 1439]);
        assert_eq!(find_next(&index, m(1438)), Some(m(1439)));
        assert_eq!(find_next(&index, m(1439)), Some(m(1439)));
    }

    #[test]
    fn smallest_later_minute_wins() {
        let index = index_with(&[100, 100, 900, 900, 800, 800, 800]);
        assert_eq!(find_next(&index, m(500)), Some(m(800)));
    }

    #[test]
    fn twelve_pm_coincidence_is_found() {
        // "12:30PM" encodes to 1470
        let index = index_with(&[1470, 1470]);
        assert_eq!(find_next(&index, m(0)), Some(m(1470)));
        assert_eq!(find_next(&index, m(1439)), Some(m(1470)));
        assert_eq!(find_next(&index, m(1470)), Some(m(1470)));
        assert_eq!(find_next(&index, m(1470)).unwrap().to_string(), "12:30PM");
    }

    #[test]
    fn twelve_pm_coincidence_comes_after_the_rest_of_the_day() {
        let index = index_with(&[429, 429, 1430, 1430, 1470, 1470]);
        assert_eq!(find_next(&index, m(1000)), Some(m(1430)));
        assert_eq!(find_next(&index, m(1430)), Some(m(1470)));
        assert_eq!(find_next(&index, m(1470)), Some(m(429)));
    }

    #[test]
    fn out_of_day_query_wraps_whole_day() {
        let index = index_with(&[1439, 1439]);
        assert_eq!(find_next(&index, m(1470)), Some(m(1439)));
    }

    #[test]
    fn repeated_search_is_stable() {
        let index = index_with(&[429, 429, 660, 660]);
        let first = find_next(&index, m(700));
        let second = find_next(&index, m(700));
        assert_eq!(first, second);
    }
}
