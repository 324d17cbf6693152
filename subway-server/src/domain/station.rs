//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a station in the external station registry.
///
/// The core never interprets the number; it only compares and hashes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A station: identity plus display name.
///
/// Stations are owned by the registry and immutable once created.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let gangnam = Station::new(StationId(1), "강남역");
/// assert_eq!(gangnam.id, StationId(1));
/// assert_eq!(gangnam.to_string(), "강남역 (1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
