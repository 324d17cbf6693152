//! Graph construction errors.

use crate::domain::{LineId, StationId};

/// Malformed line or section topology, detected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A line without sections contributes nothing routable.
    #[error("line {line} has no sections")]
    EmptyLine { line: LineId },

    /// Sections must have positive distance and duration.
    #[error("section {up}-{down} on line {line} must have positive distance and duration")]
    NonPositiveWeight {
        line: LineId,
        up: StationId,
        down: StationId,
    },

    /// A section starts and ends at the same station.
    #[error("section on line {line} loops back to station {station}")]
    SelfLoop { line: LineId, station: StationId },

    /// More than two sections of one line meet at a station.
    #[error("line {line} branches at station {station}")]
    Branching { line: LineId, station: StationId },

    /// The line's sections close into a ring.
    #[error("sections of line {line} form a cycle")]
    Cycle { line: LineId },

    /// The line's sections do not form a single connected chain.
    #[error("sections of line {line} are not contiguous")]
    NotContiguous { line: LineId },

    /// Two lines share an identifier.
    #[error("line {line} appears more than once")]
    DuplicateLine { line: LineId },

    /// The timetable's last departure precedes its first.
    #[error("line {line} has a timetable ending before it starts")]
    InvalidTimetable { line: LineId },
}
