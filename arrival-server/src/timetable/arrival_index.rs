//! Per-minute arrival counts across all lines.
//!
//! The index is a derived aggregate of the stored schedules: slot `m` holds
//! the number of (line, arrival) pairs whose arrival is at minute `m`. Only
//! [`ScheduleStore`](super::ScheduleStore) can increment it, and it does so in
//! the same step that records a schedule, so the two never disagree.

use crate::domain::{MINUTES_PER_DAY, MinuteOffset};

/// Count of arrivals at each minute of the day.
///
/// Storage is allocated on the first increment. Offsets past the end of the
/// day (see [`MinuteOffset`]) grow the storage rather than being folded back.
#[derive(Debug, Clone, Default)]
pub struct ArrivalIndex {
    counts: Vec<u32>,
}

impl ArrivalIndex {
    /// Create an empty index. No storage is allocated until the first increment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more arrival at `minute`.
    pub(super) fn increment(&mut self, minute: MinuteOffset) {
        let slot = minute.minutes() as usize;
        if self.counts.len() <= slot {
            let len = (slot + 1).max(MINUTES_PER_DAY as usize);
            self.counts.resize(len, 0);
        }
        self.counts[slot] += 1;
    }

    /// Number of arrivals recorded at `minute` (0 if none).
    pub fn get(&self, minute: MinuteOffset) -> u32 {
        self.counts
            .get(minute.minutes() as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Number of minute slots in a day.
    pub fn size(&self) -> usize {
        MINUTES_PER_DAY as usize
    }

    /// Highest slot the search has to cover: the end of the day, or further
    /// if an offset past the end of the day has been recorded.
    pub(super) fn last_slot(&self) -> u32 {
        let stored = self.counts.len().saturating_sub(1) as u32;
        stored.max(MINUTES_PER_DAY - 1)
    }

    /// Whether any arrival has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of arrivals recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Minutes within `range` with at least `min_count` arrivals, in order.
    pub(super) fn minutes_with_at_least(
        &self,
        range: std::ops::RangeInclusive<u32>,
        min_count: u32,
    ) -> impl Iterator<Item = MinuteOffset> + '_ {
        range
            .map(MinuteOffset::new)
            .filter(move |&m| self.get(m) >= min_count)
    }
}
