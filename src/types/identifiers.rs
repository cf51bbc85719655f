//! Unique identifier types for the user pool
//!
//! Profile ids are plain integers drawn from a ten-digit range so they stay
//! compatible with downstream event generators that key users by number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Range that freshly fabricated user ids are drawn from
pub const USER_ID_RANGE: RangeInclusive<u64> = 1_000_000_000..=99_999_999_999;

/// Unique identifier for a synthetic user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Wrap a raw id value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value
    pub fn value(self) -> u64 {
        self.0
    }

    /// Whether the id lies in the range fabricated ids are drawn from
    pub fn is_in_generated_range(self) -> bool {
        USER_ID_RANGE.contains(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(UserId)
            .map_err(|e| format!("Invalid user id '{}': {}", s, e))
    }
}
