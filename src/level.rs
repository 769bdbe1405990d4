//! API level - the platform version a class, member or relationship first
//! appeared in.
//!
//! Larger means later. Levels are plain non-negative integers; the wrapper
//! exists so that levels cannot be confused with line numbers or counts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A platform API level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Create a new level
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Get the raw integer value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ApiLevel {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

impl From<ApiLevel> for u32 {
    fn from(level: ApiLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| Error::InvalidLevel(s.to_string()))
    }
}
