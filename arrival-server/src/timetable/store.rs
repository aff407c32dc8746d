//! Write-once schedule store.
//!
//! Each line gets exactly one schedule. A second write for the same line is
//! rejected with [`TimetableError::KeyExists`] rather than overwriting, since
//! the arrival index has no way to take counts back out. Every accepted write
//! is folded into the arrival index before `put` returns.

use tracing::info;

use super::arrival_index::ArrivalIndex;
use super::error::TimetableError;
use super::kv::{KeyValueStore, MemoryStore};
use crate::domain::{LineName, MinuteOffset, Schedule};

/// Schedules keyed by line, plus the arrival index derived from them.
#[derive(Debug, Clone)]
pub struct ScheduleStore<S = MemoryStore<Schedule>> {
    records: S,
    index: ArrivalIndex,
}

impl ScheduleStore {
    /// Create an empty store backed by memory.
    pub fn new() -> Self {
        Self::with_backend(MemoryStore::new())
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KeyValueStore<Schedule>> ScheduleStore<S> {
    /// Create a store that writes through the given key/value backend.
    ///
    /// The backend should be empty: the arrival index starts empty and only
    /// counts schedules written through this store.
    pub fn with_backend(records: S) -> Self {
        Self {
            records,
            index: ArrivalIndex::new(),
        }
    }

    /// Store the schedule for `line` and fold its arrivals into the index.
    ///
    /// Fails without changing anything if the line already has a schedule or
    /// `arrivals` is empty.
    pub fn put(
        &mut self,
        line: LineName,
        arrivals: Vec<MinuteOffset>,
    ) -> Result<(), TimetableError> {
        if arrivals.is_empty() {
            return Err(TimetableError::InvalidInput(
                "schedule must contain at least one time".into(),
            ));
        }

        let key = line.storage_key();
        if !self
            .records
            .set_if_absent(key.clone(), Schedule::new(line, arrivals))
        {
            return Err(TimetableError::KeyExists(key));
        }

        let mut count = 0;
        if let Some(schedule) = self.records.get(&key) {
            for &minute in &schedule.arrivals {
                self.index.increment(minute);
            }
            count = schedule.arrivals.len();
        }

        info!(key = %key, arrivals = count, "schedule saved");
        Ok(())
    }

    /// Look up the schedule for `line`.
    pub fn get(&self, line: &LineName) -> Option<&Schedule> {
        self.records.get(&line.storage_key())
    }

    /// All storage keys, sorted.
    pub fn list_keys(&self) -> Vec<String> {
        let mut keys = self.records.keys();
        keys.sort();
        keys
    }

    /// Names of all stored lines, sorted.
    pub fn lines(&self) -> Vec<LineName> {
        self.list_keys()
            .iter()
            .filter_map(|k| LineName::from_storage_key(k))
            .collect()
    }

    /// Read-only view of the arrival index.
    pub fn index(&self) -> &ArrivalIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> LineName {
        LineName::parse(s).unwrap()
    }

    fn times(ts: &[&str]) -> Vec<MinuteOffset> {
        ts.iter()
            .map(|t| MinuteOffset::parse_meridiem(t).unwrap())
            .collect()
    }

    fn t(s: &str) -> MinuteOffset {
        MinuteOffset::parse_meridiem(s).unwrap()
    }

    #[test]
    fn put_then_get() {
        let mut store = ScheduleStore::new();
        store.put(line("a"), times(&["09:10AM", "11:00AM"])).unwrap();

        let schedule = store.get(&line("A")).unwrap();
        assert_eq!(schedule.line, line("a"));
        assert_eq!(schedule.arrivals, times(&["09:10AM", "11:00AM"]));
    }

    #[test]
    fn get_missing_line() {
        let store = ScheduleStore::new();
        assert!(store.get(&line("none")).is_none());
    }

    #[test]
    fn duplicate_put_is_rejected() {
        let mut store = ScheduleStore::new();
        store.put(line("a"), times(&["09:10AM"])).unwrap();

        let err = store.put(line("A"), times(&["09:10AM"])).unwrap_err();
        assert_eq!(err, TimetableError::KeyExists("line-a".into()));
    }

    #[test]
    fn rejected_put_leaves_index_untouched() {
        let mut store = ScheduleStore::new();
        store.put(line("a"), times(&["09:10AM"])).unwrap();

        assert!(store.put(line("a"), times(&["09:10AM", "10:00AM"])).is_err());
        assert_eq!(store.index().get(t("09:10AM")), 1);
        assert_eq!(store.index().get(t("10:00AM")), 0);
        assert_eq!(store.get(&line("a")).unwrap().arrivals, times(&["09:10AM"]));
    }

    #[test]
    fn empty_schedule_is_rejected() {
        let mut store = ScheduleStore::new();
        let err = store.put(line("a"), vec![]).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidInput(_)));
        assert!(store.list_keys().is_empty());
        assert!(store.index().is_empty());
    }

    #[test]
    fn index_counts_arrivals_across_lines() {
        let mut store = ScheduleStore::new();
        store.put(line("a"), times(&["09:10AM", "11:00AM"])).unwrap();
        store.put(line("b"), times(&["09:10AM", "10:00AM"])).unwrap();

        assert_eq!(store.index().get(t("09:10AM")), 2);
        assert_eq!(store.index().get(t("10:00AM")), 1);
        assert_eq!(store.index().get(t("11:00AM")), 1);
        assert_eq!(store.index().total(), 4);
    }

    #[test]
    fn repeated_arrival_in_one_line_counts_twice() {
        let mut store = ScheduleStore::new();
        store.put(line("a"), times(&["09:10AM", "09:10AM"])).unwrap();
        assert_eq!(store.index().get(t("09:10AM")), 2);
    }

    #[test]
    fn index_is_lazy() {
        let store = ScheduleStore::new();
        assert!(store.index().is_empty());
    }

    #[test]
    fn list_keys_is_sorted() {
        let mut store = ScheduleStore::new();
        assert!(store.list_keys().is_empty());

        store.put(line("b"), times(&["09:10AM"])).unwrap();
        store.put(line("a"), times(&["09:10AM"])).unwrap();
        assert_eq!(store.list_keys(), vec!["line-a", "line-b"]);
        assert_eq!(store.lines(), vec![line("a"), line("b")]);
    }

    #[test]
    fn custom_backend() {
        let mut store = ScheduleStore::with_backend(MemoryStore::<Schedule>::default());
        store.put(line("z9"), times(&["01:05PM"])).unwrap();
        assert_eq!(store.list_keys(), vec!["line-z9"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::MINUTES_PER_DAY;
    use proptest::prelude::*;

    proptest! {
        /// The index always equals a recount over the stored schedules
        #[test]
        fn index_matches_schedules(
            lines in proptest::collection::vec(
                ("[a-z0-9]{1,4}", proptest::collection::vec(0u32..MINUTES_PER_DAY, 1..10)),
                0..10,
            )
        ) {
            let mut store = ScheduleStore::new();
            for (name, minutes) in &lines {
                let arrivals = minutes.iter().map(|&m| MinuteOffset::new(m)).collect();
                // Duplicate names are expected to fail
                let _ = store.put(LineName::parse(name).unwrap(), arrivals);
            }

            for minute in 0..MINUTES_PER_DAY {
                let m = MinuteOffset::new(minute);
                let recount = store
                    .lines()
                    .iter()
                    .filter_map(|l| store.get(l))
                    .flat_map(|s| s.arrivals.iter())
                    .filter(|&&a| a == m)
                    .count() as u32;
                prop_assert_eq!(store.index().get(m), recount);
            }
        }
    }
}
