//! Line name types.

use std::fmt;

/// Namespace prefix for schedule records in the key/value store.
pub const LINE_KEY_PREFIX: &str = "line-";

/// Maximum length of a line name.
pub const MAX_LINE_NAME_LEN: usize = 4;

/// Error returned when parsing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLineName {
    reason: &'static str,
}

/// A valid line name: 1 to 4 ASCII letters or digits.
///
/// Names are case-insensitive and stored lowercase, so "B" and "b" are the
/// same line.
///
/// # Examples
///
/// ```
/// use arrival_server::domain::LineName;
///
/// let line = LineName::parse("B7").unwrap();
/// assert_eq!(line.as_str(), "b7");
/// assert_eq!(line.storage_key(), "line-b7");
///
/// assert!(LineName::parse("12345").is_err());
/// assert!(LineName::parse("*23").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineName(String);

impl LineName {
    /// Parse and normalize a line name.
    pub fn parse(s: &str) -> Result<Self, InvalidLineName> {
        if s.is_empty() {
            return Err(InvalidLineName {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LINE_NAME_LEN {
            return Err(InvalidLineName {
                reason: "must be at most 4 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLineName {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(LineName(s.to_ascii_lowercase()))
    }

    /// Recover a line name from a storage key, if the key belongs to a line.
    pub fn from_storage_key(key: &str) -> Option<Self> {
        key.strip_prefix(LINE_KEY_PREFIX)
            .and_then(|name| Self::parse(name).ok())
    }

    /// Returns the normalized (lowercase) name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which this line's schedule is stored.
    pub fn storage_key(&self) -> String {
        format!("{LINE_KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
