//! Timetable error types.

use crate::domain::{CodecError, InvalidLineName, TimeError};

/// Errors from registering schedules or querying the timetable.
///
/// All of these are recoverable and leave the timetable unchanged. "No
/// coincidence found" is not an error; searches return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// Missing or malformed schedule or query time
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Line name failed validation
    #[error(transparent)]
    InvalidLineName(#[from] InvalidLineName),

    /// A schedule for this line is already stored
    #[error("key already exists: {0}")]
    KeyExists(String),

    /// Schedule was neither a time string nor a list of time strings
    #[error("encoding not supported")]
    EncodingUnsupported,
}

impl From<TimeError> for TimetableError {
    fn from(e: TimeError) -> Self {
        TimetableError::InvalidInput(e.to_string())
    }
}

impl From<CodecError> for TimetableError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Unsupported => TimetableError::EncodingUnsupported,
            CodecError::Time(e) => e.into(),
        }
    }
}
