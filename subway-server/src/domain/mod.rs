//! Domain types for the subway route planner.
//!
//! These types describe the network as the external registry hands it over:
//! stations, lines made of sections, and optional line timetables. They are
//! plain values, built fresh for every request.

mod line;
mod path_type;
mod station;
mod time;

pub use line::{Line, LineId, Section, Timetable};
pub use path_type::{InvalidPathType, PathType};
pub use station::{Station, StationId};
pub use time::{TimeError, parse_departure, parse_hhmm};
