//! Clock simulation along candidate routes.

use chrono::{Duration, NaiveDateTime};
use tracing::trace;

use crate::graph::RoutingGraph;

use super::rank::rank_time_paths;
use super::result::PathResult;

/// A route together with the moment it reaches its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePath {
    path: PathResult,
    arrival: NaiveDateTime,
}

impl TimePath {
    /// Ride `path` leaving its source at `departure`.
    ///
    /// Boarding a line (the first edge, or any edge on a different line from
    /// the one before) waits for that line's next train when it has a
    /// timetable. Every edge then adds its running time. Lines without a
    /// timetable are boarded immediately.
    ///
    /// Returns `None` if a timetabled line runs no train in the direction
    /// of travel.
    pub fn simulate(
        graph: &RoutingGraph,
        path: PathResult,
        departure: NaiveDateTime,
    ) -> Option<Self> {
        let mut now = departure;
        let mut riding = None;

        for (hop, edge) in path.stations().windows(2).zip(path.edges()) {
            if riding != Some(edge.line) {
                if let Some(route) = graph.route(edge.line)
                    && route.timetable().is_some()
                {
                    now = route.next_departure(hop[0], hop[1], now)?;
                }
                riding = Some(edge.line);
            }
            now += Duration::minutes(i64::from(edge.duration));
        }

        Some(Self { path, arrival: now })
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub fn path(&self) -> &PathResult {
        &self.path
    }

    pub fn into_path(self) -> PathResult {
        self.path
    }
}

/// Simulated candidates for one earliest-arrival query.
#[derive(Debug, Clone, Default)]
pub struct TimePaths {
    paths: Vec<TimePath>,
}

impl TimePaths {
    /// Simulate every candidate from the same departure time.
    ///
    /// Candidates that cannot be completed are dropped.
    pub fn simulate(
        graph: &RoutingGraph,
        candidates: Vec<PathResult>,
        departure: NaiveDateTime,
    ) -> Self {
        let paths = candidates
            .into_iter()
            .filter_map(|path| {
                let stations = path.stations().len();
                let simulated = TimePath::simulate(graph, path, departure);
                if simulated.is_none() {
                    trace!(stations, "dropped candidate with no onward train");
                }
                simulated
            })
            .collect();

        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The candidate that arrives first.
    pub fn fastest_arrival(self) -> Option<TimePath> {
        rank_time_paths(self.paths).into_iter().next()
    }
}
