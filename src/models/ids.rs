//! Student identifier
//!
//! Ids are plain sequential numbers handed out by the roster. The newtype
//! keeps them from being mixed up with other integers such as menu choices.

use std::fmt;
use std::str::FromStr;

/// First id handed out by a fresh roster
pub const FIRST_STUDENT_ID: u32 = 10000;

/// Sequential numeric identifier of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    /// Create an id from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Parse an id typed at a prompt
    ///
    /// Leading whitespace and an optional `+` sign are skipped, then the
    /// longest run of decimal digits is taken and anything after it is
    /// ignored, so `"10000abc"` and `"10000.7"` both read as `10000`.
    /// Returns `None` when there are no leading digits, the value is
    /// negative, or it does not fit in a `u32`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let s = s.trim_start();
        let s = s.strip_prefix('+').unwrap_or(s);

        let digits_end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());

        s[..digits_end].parse::<u32>().ok().map(Self)
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self(FIRST_STUDENT_ID)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StudentId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    /// Strict parse, used for command-line flags
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
