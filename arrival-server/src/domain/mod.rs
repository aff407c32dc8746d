//! Domain types for the arrival server.
//!
//! This module contains the validated value types the timetable is built
//! from. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod line;
mod schedule;
mod time;

pub use line::{InvalidLineName, LINE_KEY_PREFIX, LineName, MAX_LINE_NAME_LEN};
pub use schedule::Schedule;
pub use time::{CodecError, Encoded, MINUTES_PER_DAY, MinuteOffset, TimeError, TimeInput, encode};
