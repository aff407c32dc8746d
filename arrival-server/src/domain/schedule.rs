//! Per-line arrival schedules.

use super::{LineName, MinuteOffset};

/// The arrival times of one line, in the order they were submitted.
///
/// Arrivals are not sorted or deduplicated; a line that lists the same time
/// twice counts twice in the arrival index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Line this schedule belongs to
    pub line: LineName,

    /// Arrival times in submission order
    pub arrivals: Vec<MinuteOffset>,
}

impl Schedule {
    /// Create a new schedule.
    pub fn new(line: LineName, arrivals: Vec<MinuteOffset>) -> Self {
        Self { line, arrivals }
    }

    /// Arrival times rendered as "HH:MMxx" strings.
    pub fn readable_arrivals(&self) -> Vec<String> {
        self.arrivals.iter().map(|m| m.to_string()).collect()
    }
}
