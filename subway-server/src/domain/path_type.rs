//! Route optimisation criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a route search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PathType {
    /// Shortest total distance.
    Distance,
    /// Shortest total riding time.
    Duration,
    /// Earliest arrival for a given departure time.
    Arrival,
}

impl PathType {
    /// Returns true if edge weights are section durations.
    pub fn weighs_duration(self) -> bool {
        matches!(self, PathType::Duration | PathType::Arrival)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathType::Distance => "DISTANCE",
            PathType::Duration => "DURATION",
            PathType::Arrival => "ARRIVAL",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown path type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path type: {0}")]
pub struct InvalidPathType(String);

impl FromStr for PathType {
    type Err = InvalidPathType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DISTANCE" => Ok(PathType::Distance),
            "DURATION" => Ok(PathType::Duration),
            "ARRIVAL" => Ok(PathType::Arrival),
            _ => Err(InvalidPathType(s.to_string())),
        }
    }
}
