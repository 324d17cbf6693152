//! Shortest-route search.
//!
//! Distance and duration queries run a single Dijkstra search over the
//! routing graph. Earliest-arrival queries enumerate simple paths in order
//! of increasing duration (Yen's algorithm), simulate the clock along each,
//! and keep the one that arrives first. Each line choice over parallel
//! sections is enumerated as its own candidate.

use chrono::NaiveDateTime;
use pathfinding::prelude::{dijkstra, yen};
use tracing::debug;

use crate::domain::{LineId, PathType, StationId};
use crate::graph::RoutingGraph;

use super::arrival::TimePaths;
use super::config::SearchConfig;
use super::result::PathResult;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Source and target are the same station.
    #[error("source and target are the same station ({0})")]
    SameStation(StationId),

    /// Station is not a vertex of the routing graph.
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No route joins the two stations.
    #[error("no route connects station {from} to station {to}")]
    Disconnected { from: StationId, to: StationId },

    /// Earliest-arrival search needs a departure time.
    #[error("earliest-arrival search requires a departure time")]
    MissingDepartureTime,
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub source: StationId,
    pub target: StationId,
    /// Only read when the graph is weighted for earliest arrival.
    pub departure: Option<NaiveDateTime>,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(source: StationId, target: StationId) -> Self {
        Self {
            source,
            target,
            departure: None,
        }
    }

    /// Set the departure time.
    pub fn departing_at(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self
    }

    /// Validate the search request against a graph.
    ///
    /// The same-station check runs first and never touches the graph.
    pub fn validate(&self, graph: &RoutingGraph) -> Result<(), SearchError> {
        if self.source == self.target {
            return Err(SearchError::SameStation(self.source));
        }

        for station in [self.source, self.target] {
            if !graph.contains(station) {
                return Err(SearchError::StationNotFound(station));
            }
        }

        Ok(())
    }

    fn disconnected(&self) -> SearchError {
        SearchError::Disconnected {
            from: self.source,
            to: self.target,
        }
    }
}

/// A station reached on a given line; `line` is `None` only at the source.
///
/// Earliest-arrival candidates are enumerated over these states so that
/// riding a different line between the same stations is a different route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Boarding {
    station: StationId,
    line: Option<LineId>,
}

/// Route planner over one routing graph.
pub struct Planner<'a> {
    graph: &'a RoutingGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RoutingGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search using the criterion the graph was built for.
    pub fn search(&self, request: &SearchRequest) -> Result<PathResult, SearchError> {
        match self.graph.path_type() {
            PathType::Distance | PathType::Duration => {
                self.shortest_path(request.source, request.target)
            }
            PathType::Arrival => {
                // Reject same-station queries before asking for a time.
                request.validate(self.graph)?;
                let departure = request
                    .departure
                    .ok_or(SearchError::MissingDepartureTime)?;
                self.earliest_arrival_path(request.source, request.target, departure)
            }
        }
    }

    /// Minimum-weight route between two stations.
    ///
    /// When several routes tie on weight any one of them may be returned;
    /// neighbour order is fixed, so the choice is stable for a given graph.
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResult, SearchError> {
        let request = SearchRequest::new(source, target);
        request.validate(self.graph)?;

        let graph = self.graph;
        let (stations, cost) = dijkstra(
            &source,
            |station| graph.neighbours(*station),
            |station| *station == target,
        )
        .ok_or_else(|| request.disconnected())?;

        let path = PathResult::resolve(graph, stations).ok_or_else(|| request.disconnected())?;

        debug!(
            %source,
            %target,
            path_type = %graph.path_type(),
            cost,
            stops = path.stations().len(),
            "found shortest path"
        );

        Ok(path)
    }

    /// Route with the earliest simulated arrival when leaving at `departure`.
    ///
    /// Candidates are enumerated shortest-duration first, up to
    /// [`SearchConfig::max_candidate_paths`]. Ties on arrival go to the
    /// shorter ride, then the shorter distance.
    pub fn earliest_arrival_path(
        &self,
        source: StationId,
        target: StationId,
        departure: NaiveDateTime,
    ) -> Result<PathResult, SearchError> {
        let request = SearchRequest::new(source, target).departing_at(departure);
        request.validate(self.graph)?;

        let graph = self.graph;
        let bound = self.config.max_candidate_paths;
        let start = Boarding {
            station: source,
            line: None,
        };
        let candidates = yen(
            &start,
            |at| {
                graph
                    .edges_from(at.station)
                    .into_iter()
                    .map(|(station, edge)| {
                        let next = Boarding {
                            station,
                            line: Some(edge.line),
                        };
                        (next, edge.duration)
                    })
                    .collect::<Vec<_>>()
            },
            |at| at.station == target,
            bound,
        );

        if candidates.len() >= bound {
            debug!(bound, "candidate enumeration reached its bound");
        }

        // Candidates that pass a station twice on different lines are dropped.
        let paths: Vec<PathResult> = candidates
            .into_iter()
            .filter_map(|(stops, _)| {
                let stations = stops.iter().map(|stop| stop.station).collect();
                let lines: Vec<LineId> = stops.iter().filter_map(|stop| stop.line).collect();
                PathResult::resolve_on_lines(graph, stations, &lines)
            })
            .collect();

        let time_paths = TimePaths::simulate(graph, paths, departure);
        debug!(
            %source,
            %target,
            %departure,
            candidates = time_paths.len(),
            "simulated candidate arrivals"
        );

        let fastest = time_paths
            .fastest_arrival()
            .ok_or_else(|| request.disconnected())?;

        debug!(
            arrival = %fastest.arrival(),
            stops = fastest.path().stations().len(),
            "selected earliest arrival"
        );

        Ok(fastest.into_path())
    }
}
