//! Shared timetable handle.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::TimetableError;
use super::finder::find_next;
use super::store::ScheduleStore;
use crate::domain::{LineName, MinuteOffset, Schedule, TimeInput, encode};

/// Thread-safe handle to the schedule store and its arrival index.
///
/// Writes hold the lock for both the schedule record and the index update,
/// so a concurrent search never sees one without the other.
#[derive(Clone, Default)]
pub struct Timetable {
    inner: Arc<RwLock<ScheduleStore>>,
}

impl Timetable {
    /// Create an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, encode and store a line's schedule.
    ///
    /// Returns the normalized line name on success.
    pub async fn register(
        &self,
        name: &str,
        schedule: TimeInput,
    ) -> Result<LineName, TimetableError> {
        let line = LineName::parse(name)?;

        if schedule.is_empty() {
            return Err(TimetableError::InvalidInput(
                "schedule must not be empty".into(),
            ));
        }
        let arrivals = encode(&schedule)?.into_vec();

        let mut guard = self.inner.write().await;
        guard.put(line.clone(), arrivals)?;

        Ok(line)
    }

    /// Find the next coincidence after a "HH:MMxx" query time.
    pub async fn next_coincidence(
        &self,
        time: &str,
    ) -> Result<Option<MinuteOffset>, TimetableError> {
        let query = MinuteOffset::parse_meridiem(time)?;
        let guard = self.inner.read().await;
        Ok(find_next(guard.index(), query))
    }

    /// Number of arrivals across all lines at a "HH:MMxx" time.
    pub async fn arrivals_at(&self, time: &str) -> Result<u32, TimetableError> {
        let minute = MinuteOffset::parse_meridiem(time)?;
        let guard = self.inner.read().await;
        Ok(guard.index().get(minute))
    }

    /// Look up a line's schedule by name.
    pub async fn schedule(&self, name: &str) -> Result<Option<Schedule>, TimetableError> {
        let line = LineName::parse(name)?;
        let guard = self.inner.read().await;
        Ok(guard.get(&line).cloned())
    }

    /// All storage keys, sorted.
    pub async fn line_keys(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        guard.list_keys()
    }

    /// All stored line names, sorted.
    pub async fn lines(&self) -> Vec<LineName> {
        let guard = self.inner.read().await;
        guard.lines()
    }
}
