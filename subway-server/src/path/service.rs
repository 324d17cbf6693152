//! Route queries end to end: network, graph, search, fare.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{PathType, Station, StationId};
use crate::fare::{Fare, FareEngine};
use crate::graph::{LineRoute, RoutingGraph};
use crate::network::NetworkProvider;
use crate::planner::{Planner, SearchConfig, SearchError, SearchRequest};
use crate::timetable::{StationTimetable, station_timetable};

use super::PathError;

/// A route query as the rider poses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub source: StationId,
    pub target: StationId,
    pub path_type: PathType,
    /// Required for [`PathType::Arrival`], ignored otherwise.
    pub departure: Option<NaiveDateTime>,
    /// Rider age; anonymous queries pay the full fare.
    pub age: Option<u32>,
}

impl PathRequest {
    pub fn new(source: StationId, target: StationId, path_type: PathType) -> Self {
        Self {
            source,
            target,
            path_type,
            departure: None,
            age: None,
        }
    }

    pub fn departing_at(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

/// A priced route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResponse {
    /// Stations in travel order, source first.
    pub stations: Vec<Station>,
    pub distance: u32,
    pub duration: u32,
    pub fare: Fare,
}

/// Answers route and timetable queries against a network.
///
/// Holds no state of its own; every query reads the network afresh and
/// builds its own graph.
pub struct PathService<'a, N> {
    network: &'a N,
    config: &'a SearchConfig,
    fares: &'a FareEngine,
}

impl<'a, N: NetworkProvider> PathService<'a, N> {
    pub fn new(network: &'a N, config: &'a SearchConfig, fares: &'a FareEngine) -> Self {
        Self {
            network,
            config,
            fares,
        }
    }

    /// Find a route under the requested criterion and price it.
    ///
    /// # Errors
    ///
    /// - [`SearchError::SameStation`] if source and target coincide
    /// - [`PathError::StationNotFound`] if the registry lacks either station
    /// - [`SearchError::Disconnected`] if no line joins them, including when
    ///   a station is served by no line at all
    /// - [`PathError::Graph`] if the line data is malformed
    pub fn find_path_and_fare(&self, request: &PathRequest) -> Result<PathResponse, PathError> {
        if request.source == request.target {
            return Err(SearchError::SameStation(request.source).into());
        }

        self.require_station(request.source)?;
        self.require_station(request.target)?;

        let lines = self.network.lines()?;
        let graph = RoutingGraph::build(&lines, request.path_type)?;

        if !graph.contains(request.source) || !graph.contains(request.target) {
            return Err(SearchError::Disconnected {
                from: request.source,
                to: request.target,
            }
            .into());
        }

        let search = SearchRequest {
            source: request.source,
            target: request.target,
            departure: request.departure,
        };
        let path = Planner::new(&graph, self.config).search(&search)?;

        let surcharges = path
            .lines()
            .into_iter()
            .map(|line| graph.route(line).map_or(0, LineRoute::extra_fare));
        let fare = self.fares.calculate(path.distance(), surcharges, request.age)?;

        let stations = path
            .stations()
            .iter()
            .map(|&id| self.require_station(id))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            source = %request.source,
            target = %request.target,
            path_type = %request.path_type,
            stops = stations.len(),
            distance = path.distance(),
            duration = path.duration(),
            %fare,
            "answered route query"
        );

        Ok(PathResponse {
            stations,
            distance: path.distance(),
            duration: path.duration(),
            fare,
        })
    }

    /// Departure times at a station for every line serving it.
    pub fn station_timetable(
        &self,
        station: StationId,
    ) -> Result<Vec<StationTimetable>, PathError> {
        self.require_station(station)?;
        let lines = self.network.lines()?;
        let timetables = station_timetable(&lines, station)?;

        debug!(%station, lines = timetables.len(), "built station timetable");
        Ok(timetables)
    }

    fn require_station(&self, id: StationId) -> Result<Station, PathError> {
        self.network
            .station(id)?
            .ok_or(PathError::StationNotFound(id))
    }
}
