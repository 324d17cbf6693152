//! A line's sections laid out as one ordered chain of stations.
//!
//! Every line must be a simple path: no branches, no rings, no gaps. The
//! chain is stored from the up terminus to the down terminus together with
//! the cumulative running time, which is what timetable lookups need.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::domain::{Line, LineId, Section, StationId, Timetable};

use super::GraphError;

/// Direction of travel along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the up terminus.
    Up,
    /// Towards the down terminus.
    Down,
}

/// Validated, ordered view of a single line.
#[derive(Debug, Clone)]
pub struct LineRoute {
    id: LineId,
    name: String,
    extra_fare: u32,
    /// Up terminus first.
    stations: Vec<StationId>,
    /// Minutes from the up terminus to each station, parallel to `stations`.
    offsets: Vec<u32>,
    timetable: Option<Timetable>,
}

impl LineRoute {
    /// Validate a line and lay its sections out in order.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if the line has no sections, a section has a
    /// zero weight or loops on itself, the sections branch, close into a
    /// ring, or fall apart into more than one piece, or the timetable is
    /// inverted.
    pub fn from_line(line: &Line) -> Result<Self, GraphError> {
        let id = line.id;

        if line.sections.is_empty() {
            return Err(GraphError::EmptyLine { line: id });
        }

        for section in &line.sections {
            if section.distance == 0 || section.duration == 0 {
                return Err(GraphError::NonPositiveWeight {
                    line: id,
                    up: section.up_station,
                    down: section.down_station,
                });
            }
            if section.up_station == section.down_station {
                return Err(GraphError::SelfLoop {
                    line: id,
                    station: section.up_station,
                });
            }
        }

        if let Some(timetable) = &line.timetable
            && !timetable.is_valid()
        {
            return Err(GraphError::InvalidTimetable { line: id });
        }

        let adjacency = adjacency(&line.sections);

        let mut branching: Vec<StationId> = adjacency
            .iter()
            .filter(|(_, sections)| sections.len() > 2)
            .map(|(station, _)| *station)
            .collect();
        branching.sort();
        if let Some(&station) = branching.first() {
            return Err(GraphError::Branching { line: id, station });
        }

        let head = pick_head(&adjacency).ok_or(GraphError::Cycle { line: id })?;
        let (stations, offsets) = walk_chain(head, &adjacency);

        if stations.len() != adjacency.len() || stations.len() != line.sections.len() + 1 {
            return Err(GraphError::NotContiguous { line: id });
        }

        Ok(Self {
            id,
            name: line.name.clone(),
            extra_fare: line.extra_fare,
            stations,
            offsets,
            timetable: line.timetable.clone(),
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra_fare(&self) -> u32 {
        self.extra_fare
    }

    /// Stations from the up terminus to the down terminus.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn timetable(&self) -> Option<&Timetable> {
        self.timetable.as_ref()
    }

    /// Index of a station along the line.
    pub fn position(&self, station: StationId) -> Option<usize> {
        self.stations.iter().position(|s| *s == station)
    }

    /// Direction of travel when riding from `from` to `to`.
    pub fn direction(&self, from: StationId, to: StationId) -> Option<Direction> {
        let from = self.position(from)?;
        let to = self.position(to)?;
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Running time from the terminus a train in `direction` starts at.
    pub fn offset_from_terminus(&self, station: StationId, direction: Direction) -> Option<Duration> {
        let idx = self.position(station)?;
        let minutes = match direction {
            Direction::Down => self.offsets[idx],
            Direction::Up => self.total_minutes() - self.offsets[idx],
        };
        Some(Duration::minutes(i64::from(minutes)))
    }

    /// Earliest time at or after `after` when a train leaves `from` heading
    /// towards `to`.
    ///
    /// Returns `None` when the line has no timetable, or either station is
    /// not on the line.
    pub fn next_departure(
        &self,
        from: StationId,
        to: StationId,
        after: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        let timetable = self.timetable.as_ref()?;
        let direction = self.direction(from, to)?;
        let offset = self.offset_from_terminus(from, direction)?;
        timetable.next_passing(offset, after)
    }

    /// Times of day at which trains leave `station` in `direction`.
    ///
    /// Empty at the terminus a direction ends at, and for lines without a
    /// timetable.
    pub fn departures_from(&self, station: StationId, direction: Direction) -> Vec<NaiveTime> {
        let Some(timetable) = &self.timetable else {
            return Vec::new();
        };
        let Some(idx) = self.position(station) else {
            return Vec::new();
        };
        let is_last_stop = match direction {
            Direction::Down => idx + 1 == self.stations.len(),
            Direction::Up => idx == 0,
        };
        if is_last_stop {
            return Vec::new();
        }
        let Some(offset) = self.offset_from_terminus(station, direction) else {
            return Vec::new();
        };

        timetable
            .terminus_departures()
            .into_iter()
            .map(|t| t.overflowing_add_signed(offset).0)
            .collect()
    }

    fn total_minutes(&self) -> u32 {
        self.offsets.last().copied().unwrap_or(0)
    }
}

type Adjacency<'a> = HashMap<StationId, Vec<(StationId, &'a Section)>>;

fn adjacency(sections: &[Section]) -> Adjacency<'_> {
    let mut adjacency: Adjacency<'_> = HashMap::new();
    for section in sections {
        adjacency
            .entry(section.up_station)
            .or_default()
            .push((section.down_station, section));
        adjacency
            .entry(section.down_station)
            .or_default()
            .push((section.up_station, section));
    }
    adjacency
}

/// Choose the up terminus: an end station that its section names as the up
/// side, falling back to the lowest station id.
fn pick_head(adjacency: &Adjacency<'_>) -> Option<StationId> {
    let mut ends: Vec<StationId> = adjacency
        .iter()
        .filter(|(_, sections)| sections.len() == 1)
        .map(|(station, _)| *station)
        .collect();
    ends.sort();

    let oriented = ends.iter().copied().find(|station| {
        adjacency
            .get(station)
            .and_then(|sections| sections.first())
            .is_some_and(|(_, section)| section.up_station == *station)
    });

    oriented.or_else(|| ends.first().copied())
}

fn walk_chain(head: StationId, adjacency: &Adjacency<'_>) -> (Vec<StationId>, Vec<u32>) {
    let mut stations = vec![head];
    let mut offsets = vec![0];
    let mut visited = HashSet::from([head]);
    let mut current = head;
    let mut elapsed = 0u32;

    while let Some((next, section)) = adjacency
        .get(&current)
        .and_then(|sections| sections.iter().find(|(n, _)| !visited.contains(n)))
    {
        elapsed += section.duration;
        visited.insert(*next);
        stations.push(*next);
        offsets.push(elapsed);
        current = *next;
    }

    (stations, offsets)
}
