//! Wall-clock time handling for arrival schedules.
//!
//! Schedules are submitted as 12-hour "HH:MMxx" strings (e.g. "09:10AM").
//! Internally every time is a [`MinuteOffset`] from midnight, which is what
//! the arrival index is keyed by.

use std::fmt;

use serde_json::Value;

/// Minutes in one day; the arrival index has one slot per minute.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes added for a "PM" marker.
const PM_OFFSET: u32 = 12 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Error returned when a schedule value can't be encoded into minutes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Input was neither a time string nor a list of time strings
    #[error("encoding not supported: expected a time string or a list of time strings")]
    Unsupported,

    /// One of the time strings was malformed
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Minutes since midnight.
///
/// The hour field of a parsed time is not range-checked, and "PM" always adds
/// twelve hours (so "12:30PM" lands past the end of the day). Offsets are
/// therefore not clamped to [`MINUTES_PER_DAY`].
///
/// # Examples
///
/// ```
/// use arrival_server::domain::MinuteOffset;
///
/// let t = MinuteOffset::parse_meridiem("01:05PM").unwrap();
/// assert_eq!(t.minutes(), 13 * 60 + 5);
/// assert_eq!(t.to_string(), "01:05PM");
///
/// // Midnight is a real offset, not "nothing"
/// assert_eq!(MinuteOffset::new(0).to_string(), "00:00AM");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOffset(u32);

impl MinuteOffset {
    /// Create an offset from a raw minute count.
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns the raw minute count.
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Whether this offset falls inside a single day (0..1440).
    pub const fn is_within_day(self) -> bool {
        self.0 < MINUTES_PER_DAY
    }

    /// Parse a time from "HH:MMxx" format, where `xx` is AM or PM.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrival_server::domain::MinuteOffset;
    ///
    /// assert_eq!(MinuteOffset::parse_meridiem("09:10AM").unwrap().minutes(), 550);
    /// assert_eq!(MinuteOffset::parse_meridiem("09:10am").unwrap().minutes(), 550);
    ///
    /// // Invalid shapes
    /// assert!(MinuteOffset::parse_meridiem("9:10AM").is_err());
    /// assert!(MinuteOffset::parse_meridiem("09:10").is_err());
    /// assert!(MinuteOffset::parse_meridiem("09-10AM").is_err());
    /// ```
    pub fn parse_meridiem(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 7 characters: HH:MMxx
        if s.len() != 7 {
            return Err(TimeError::new("expected HH:MMAM or HH:MMPM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        let meridiem = &bytes[5..7];
        let pm = if meridiem.eq_ignore_ascii_case(b"pm") {
            true
        } else if meridiem.eq_ignore_ascii_case(b"am") {
            false
        } else {
            return Err(TimeError::new("expected AM or PM"));
        };

        let mut minutes = hour * 60 + minute;
        if pm {
            minutes += PM_OFFSET;
        }

        Ok(Self(minutes))
    }
}

impl fmt::Debug for MinuteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinuteOffset({} = {})", self.0, self)
    }
}

/// Formats as "HH:MMxx".
///
/// Hours up to and including 12 are shown as AM, so 12:00-12:59 renders as
/// "12:MMAM" and only 13:00 onwards is PM.
impl fmt::Display for MinuteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        if hours <= 12 {
            write!(f, "{:02}:{:02}AM", hours, minutes)
        } else {
            write!(f, "{:02}:{:02}PM", hours - 12, minutes)
        }
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// A schedule as submitted: one time string or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    Single(String),
    Sequence(Vec<String>),
}

impl TimeInput {
    /// Returns true if there are no time strings at all.
    pub fn is_empty(&self) -> bool {
        match self {
            TimeInput::Single(s) => s.is_empty(),
            TimeInput::Sequence(v) => v.is_empty(),
        }
    }
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        TimeInput::Single(s.to_string())
    }
}

impl<S: AsRef<str>> From<&[S]> for TimeInput {
    fn from(times: &[S]) -> Self {
        TimeInput::Sequence(times.iter().map(|t| t.as_ref().to_string()).collect())
    }
}

impl TryFrom<Value> for TimeInput {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(TimeInput::Single(s)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(CodecError::Unsupported),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TimeInput::Sequence),
            _ => Err(CodecError::Unsupported),
        }
    }
}

/// Result of encoding a [`TimeInput`]; mirrors its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Single(MinuteOffset),
    Sequence(Vec<MinuteOffset>),
}

impl Encoded {
    /// Flatten into an ordered list of offsets.
    pub fn into_vec(self) -> Vec<MinuteOffset> {
        match self {
            Encoded::Single(m) => vec![m],
            Encoded::Sequence(v) => v,
        }
    }
}

/// Encode a single time or a sequence of times into minute offsets.
///
/// Each element of a sequence is encoded independently and the order is kept.
/// The first malformed element fails the whole input.
///
/// # Examples
///
/// ```
/// use arrival_server::domain::{Encoded, MinuteOffset, TimeInput, encode};
///
/// let input = TimeInput::from(&["07:09AM", "01:05PM"][..]);
/// let encoded = encode(&input).unwrap();
/// assert_eq!(
///     encoded,
///     Encoded::Sequence(vec![MinuteOffset::new(429), MinuteOffset::new(785)])
/// );
/// ```
pub fn encode(input: &TimeInput) -> Result<Encoded, CodecError> {
    match input {
        TimeInput::Single(s) => Ok(Encoded::Single(MinuteOffset::parse_meridiem(s)?)),
        TimeInput::Sequence(times) => times
            .iter()
            .map(|t| MinuteOffset::parse_meridiem(t))
            .collect::<Result<Vec<_>, _>>()
            .map(Encoded::Sequence)
            .map_err(CodecError::from),
    }
}
