//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{MinuteOffset, Schedule};

/// Request to register a line's schedule.
#[derive(Debug, Deserialize)]
pub struct RegisterLineRequest {
    /// Line name (1-4 letters or digits, case-insensitive)
    pub line: Option<String>,

    /// A single "HH:MMxx" time or a list of them
    pub schedule: Option<Value>,
}

/// Generic status response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Human-readable status
    pub status: String,
}

/// Query for the next coincidence.
#[derive(Debug, Deserialize)]
pub struct NextMultiRequest {
    /// Time in "HH:MMxx" format
    pub time: Option<String>,
}

/// Response for the next coincidence.
#[derive(Debug, Serialize, Deserialize)]
pub struct NextMultiResponse {
    /// Time of the next coincidence, or empty if there is none
    pub result: String,
}

impl NextMultiResponse {
    pub fn from_found(found: Option<MinuteOffset>) -> Self {
        Self {
            result: found.map(|m| m.to_string()).unwrap_or_default(),
        }
    }
}

/// Response listing stored lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinesResponse {
    /// Normalized line names
    pub lines: Vec<String>,
}

/// A single line's schedule.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Normalized line name
    pub line: String,

    /// Arrival times in submission order
    pub schedule: Vec<String>,
}

impl ScheduleResponse {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            line: schedule.line.to_string(),
            schedule: schedule.readable_arrivals(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
