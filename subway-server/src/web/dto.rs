//! Data transfer objects for web requests and responses.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{InvalidPathType, PathType, StationId, TimeError, parse_departure};
use crate::path::PathRequest;
use crate::timetable::StationTimetable;

/// Query string of a route search.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    /// Source station id
    pub source: u64,

    /// Target station id
    pub target: u64,

    /// DISTANCE, DURATION or ARRIVAL
    #[serde(rename = "type")]
    pub path_type: String,

    /// Departure time as yyyyMMddHHmm, required for ARRIVAL
    pub time: Option<String>,

    /// Rider age
    pub age: Option<u32>,
}

/// A query string that does not describe a route search.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    PathType(#[from] InvalidPathType),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("ARRIVAL searches require a departure time")]
    MissingTime,
}

impl PathQuery {
    /// Validate the query and turn it into a route request.
    ///
    /// The departure time is only parsed for ARRIVAL searches.
    pub fn to_request(&self) -> Result<PathRequest, QueryError> {
        let path_type: PathType = self.path_type.parse()?;
        let mut request =
            PathRequest::new(StationId(self.source), StationId(self.target), path_type);

        if path_type == PathType::Arrival {
            let time = self.time.as_deref().ok_or(QueryError::MissingTime)?;
            request = request.departing_at(parse_departure(time)?);
        }
        if let Some(age) = self.age {
            request = request.with_age(age);
        }

        Ok(request)
    }
}

/// Departures from a station on one line.
#[derive(Debug, Serialize)]
pub struct TimetableResult {
    pub line_id: u64,
    pub line_name: String,

    /// Departures towards the up terminus, as HH:MM
    pub towards_up: Vec<String>,

    /// Departures towards the down terminus, as HH:MM
    pub towards_down: Vec<String>,
}

/// Response for a station timetable.
#[derive(Debug, Serialize)]
pub struct StationTimetableResponse {
    pub station_id: u64,
    pub lines: Vec<TimetableResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub code: &'static str,

    /// Error message
    pub error: String,
}

// Conversion implementations

impl TimetableResult {
    /// Create from a station timetable.
    pub fn from_timetable(timetable: &StationTimetable) -> Self {
        Self {
            line_id: timetable.line.0,
            line_name: timetable.line_name.clone(),
            towards_up: timetable.towards_up.iter().map(format_time).collect(),
            towards_down: timetable.towards_down.iter().map(format_time).collect(),
        }
    }
}

/// Format a time of day as "HH:MM".
fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
