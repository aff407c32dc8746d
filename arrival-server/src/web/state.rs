//! Application state for the web layer.

use crate::timetable::Timetable;

/// Shared application state.
///
/// The timetable handle is cheap to clone; every clone sees the same
/// schedules and arrival index.
#[derive(Clone, Default)]
pub struct AppState {
    /// Line schedules and arrival index
    pub timetable: Timetable,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable) -> Self {
        Self { timetable }
    }
}
