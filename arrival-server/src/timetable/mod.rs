//! Line schedules and the next-coincidence search.
//!
//! This module answers: "after a given time, when is the next moment that
//! two or more lines have a train in?"
//!
//! Schedules are stored write-once per line. Every stored arrival bumps a
//! per-minute counter in the [`ArrivalIndex`], and the search scans that
//! index circularly from the query minute, wrapping past midnight.

mod arrival_index;
mod error;
mod finder;
mod kv;
mod service;
mod store;

pub use arrival_index::ArrivalIndex;
pub use error::TimetableError;
pub use finder::{COINCIDENCE_THRESHOLD, find_next};
pub use kv::{KeyValueStore, MemoryStore};
pub use service::Timetable;
pub use store::ScheduleStore;
