//! Departure times at a single station.

use chrono::NaiveTime;

use crate::domain::{Line, LineId, StationId};
use crate::graph::{Direction, GraphError, LineRoute};

/// Departures from one station on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTimetable {
    pub line: LineId,
    pub line_name: String,
    /// Trains heading for the line's up terminus.
    pub towards_up: Vec<NaiveTime>,
    /// Trains heading for the line's down terminus.
    pub towards_down: Vec<NaiveTime>,
}

/// Departure times at `station` for every line serving it.
///
/// Lines without a timetable are listed with no departures. A station no
/// line serves yields an empty list.
///
/// # Errors
///
/// Fails if a line serving the station is malformed.
pub fn station_timetable(
    lines: &[Line],
    station: StationId,
) -> Result<Vec<StationTimetable>, GraphError> {
    lines
        .iter()
        .filter(|line| line.serves(station))
        .map(|line| -> Result<StationTimetable, GraphError> {
            let route = LineRoute::from_line(line)?;
            Ok(StationTimetable {
                line: route.id(),
                line_name: route.name().to_string(),
                towards_up: route.departures_from(station, Direction::Up),
                towards_down: route.departures_from(station, Direction::Down),
            })
        })
        .collect()
}
