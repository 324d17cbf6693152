//! Lines, their sections, and optional timetables.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::StationId;
use super::time::hhmm;

/// Opaque identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track segment between two adjacent stations on one line.
///
/// `up_station` and `down_station` only fix the orientation used when the
/// line's stations are laid out; trains run in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub up_station: StationId,
    pub down_station: StationId,
    /// Length in kilometres.
    pub distance: u32,
    /// Travel time in minutes.
    pub duration: u32,
}

impl Section {
    pub fn new(up_station: StationId, down_station: StationId, distance: u32, duration: u32) -> Self {
        Self {
            up_station,
            down_station,
            distance,
            duration,
        }
    }

    /// Returns true if the section touches the given station.
    pub fn touches(&self, station: StationId) -> bool {
        self.up_station == station || self.down_station == station
    }

    /// Returns the station at the other end, if `station` is one of the ends.
    pub fn other_end(&self, station: StationId) -> Option<StationId> {
        if self.up_station == station {
            Some(self.down_station)
        } else if self.down_station == station {
            Some(self.up_station)
        } else {
            None
        }
    }
}

/// Service pattern of a line: trains leave each terminus from
/// `first_departure` to `last_departure`, every `interval_mins` minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    #[serde(with = "hhmm")]
    pub first_departure: NaiveTime,
    #[serde(with = "hhmm")]
    pub last_departure: NaiveTime,
    pub interval_mins: u32,
}

impl Timetable {
    pub fn new(first_departure: NaiveTime, last_departure: NaiveTime, interval_mins: u32) -> Self {
        Self {
            first_departure,
            last_departure,
            interval_mins,
        }
    }

    /// Returns true if the service window is well formed.
    pub fn is_valid(&self) -> bool {
        self.first_departure <= self.last_departure
    }

    /// Terminus departure times over one service day, in order.
    ///
    /// A zero interval means a single train per day.
    pub fn terminus_departures(&self) -> Vec<NaiveTime> {
        if !self.is_valid() {
            return Vec::new();
        }
        if self.interval_mins == 0 {
            return vec![self.first_departure];
        }

        let step = Duration::minutes(i64::from(self.interval_mins));
        let mut times = Vec::new();
        let mut current = self.first_departure;
        loop {
            times.push(current);
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 || next > self.last_departure {
                break;
            }
            current = next;
        }
        times
    }

    /// Earliest moment at or after `after` when a train passes a station
    /// reached `offset` after leaving the terminus.
    ///
    /// Returns `None` only for an invalid timetable.
    pub fn next_passing(&self, offset: Duration, after: NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.is_valid() {
            return None;
        }

        let today = after.date();
        let days = [today.pred_opt(), Some(today), today.succ_opt()];

        days.into_iter()
            .flatten()
            .find_map(|day| self.passing_on(day, offset, after))
    }

    fn passing_on(
        &self,
        day: NaiveDate,
        offset: Duration,
        after: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        let first = day.and_time(self.first_departure) + offset;
        let last = day.and_time(self.last_departure) + offset;

        if last < after {
            return None;
        }
        if first >= after {
            return Some(first);
        }
        if self.interval_mins == 0 {
            return None;
        }

        let interval_secs = i64::from(self.interval_mins) * 60;
        let waited_secs = (after - first).num_seconds();
        let trains = (waited_secs + interval_secs - 1) / interval_secs;
        let passing = first + Duration::seconds(trains * interval_secs);

        (passing <= last).then_some(passing)
    }
}

/// A line: an ordered chain of sections plus a flat surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Extra fare added when a route rides this line.
    #[serde(default)]
    pub extra_fare: u32,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timetable: Option<Timetable>,
}

impl Line {
    /// Create a line without surcharge or timetable.
    pub fn new(id: LineId, name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id,
            name: name.into(),
            extra_fare: 0,
            sections,
            timetable: None,
        }
    }

    /// Set the line's surcharge.
    pub fn with_extra_fare(mut self, extra_fare: u32) -> Self {
        self.extra_fare = extra_fare;
        self
    }

    /// Attach a timetable.
    pub fn with_timetable(mut self, timetable: Timetable) -> Self {
        self.timetable = Some(timetable);
        self
    }

    /// Returns true if any section of this line touches the station.
    pub fn serves(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }
}
