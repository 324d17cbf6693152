//! Routing graph construction.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::domain::{Line, LineId, PathType, StationId};

use super::{GraphError, LineRoute};

/// One direction of travel over a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEdge {
    /// The line owning the underlying section.
    pub line: LineId,
    pub distance: u32,
    pub duration: u32,
}

impl SectionEdge {
    /// Edge weight under the given optimisation criterion.
    pub fn weight(&self, path_type: PathType) -> u32 {
        if path_type.weighs_duration() {
            self.duration
        } else {
            self.distance
        }
    }
}

/// Directed, weighted graph of the whole network for one request.
///
/// Vertices are station ids; every section contributes an edge in each
/// direction. Sections of different lines joining the same pair of stations
/// stay separate parallel edges.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    graph: DiGraph<StationId, SectionEdge>,
    nodes: HashMap<StationId, NodeIndex>,
    routes: HashMap<LineId, LineRoute>,
    path_type: PathType,
}

impl RoutingGraph {
    /// Build the graph from every line of the network.
    ///
    /// # Errors
    ///
    /// Fails with a [`GraphError`] if any line is malformed (see
    /// [`LineRoute::from_line`]) or two lines share an id.
    pub fn build(lines: &[Line], path_type: PathType) -> Result<Self, GraphError> {
        let mut built = Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            routes: HashMap::with_capacity(lines.len()),
            path_type,
        };

        for line in lines {
            let route = LineRoute::from_line(line)?;
            if built.routes.contains_key(&line.id) {
                return Err(GraphError::DuplicateLine { line: line.id });
            }

            for section in &line.sections {
                let up = built.add_or_get_station(section.up_station);
                let down = built.add_or_get_station(section.down_station);
                let edge = SectionEdge {
                    line: line.id,
                    distance: section.distance,
                    duration: section.duration,
                };
                built.graph.add_edge(up, down, edge);
                built.graph.add_edge(down, up, edge);
            }

            built.routes.insert(line.id, route);
        }

        debug!(
            stations = built.station_count(),
            edges = built.edge_count(),
            lines = built.routes.len(),
            %path_type,
            "built routing graph"
        );

        Ok(built)
    }

    fn add_or_get_station(&mut self, station: StationId) -> NodeIndex {
        if let Some(&index) = self.nodes.get(&station) {
            index
        } else {
            let index = self.graph.add_node(station);
            self.nodes.insert(station, index);
            index
        }
    }

    /// The criterion edge weights are taken from.
    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// Returns true if the station appears in any section.
    pub fn contains(&self, station: StationId) -> bool {
        self.nodes.contains_key(&station)
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Validated layout of a line.
    pub fn route(&self, line: LineId) -> Option<&LineRoute> {
        self.routes.get(&line)
    }

    /// Stations reachable in one hop, each with the cheapest edge weight.
    ///
    /// Sorted by station id so searches are reproducible.
    pub fn neighbours(&self, station: StationId) -> Vec<(StationId, u32)> {
        let Some(&index) = self.nodes.get(&station) else {
            return Vec::new();
        };

        let mut cheapest: BTreeMap<StationId, u32> = BTreeMap::new();
        for edge in self.graph.edges(index) {
            let weight = edge.weight().weight(self.path_type);
            cheapest
                .entry(self.graph[edge.target()])
                .and_modify(|w| *w = (*w).min(weight))
                .or_insert(weight);
        }
        cheapest.into_iter().collect()
    }

    /// Every edge leaving a station, paired with the station it reaches.
    ///
    /// Parallel sections are listed separately. Sorted by station id, then
    /// line id.
    pub fn edges_from(&self, station: StationId) -> Vec<(StationId, SectionEdge)> {
        let Some(&index) = self.nodes.get(&station) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self
            .graph
            .edges(index)
            .map(|edge| (self.graph[edge.target()], *edge.weight()))
            .collect();
        edges.sort_by_key(|(to, edge)| (*to, edge.line));
        edges
    }

    /// The edge of `line` joining two adjacent stations.
    pub fn edge_on_line(
        &self,
        from: StationId,
        to: StationId,
        line: LineId,
    ) -> Option<SectionEdge> {
        let from = *self.nodes.get(&from)?;
        let to = *self.nodes.get(&to)?;

        self.graph
            .edges_connecting(from, to)
            .map(|edge| *edge.weight())
            .find(|edge| edge.line == line)
    }

    /// The edge a route would ride between two adjacent stations.
    ///
    /// Among parallel edges this is the cheapest for the active weight, then
    /// the one on the line with the lower surcharge, then the lower line id.
    pub fn best_edge(&self, from: StationId, to: StationId) -> Option<SectionEdge> {
        let from = *self.nodes.get(&from)?;
        let to = *self.nodes.get(&to)?;

        self.graph
            .edges_connecting(from, to)
            .map(|edge| *edge.weight())
            .min_by_key(|edge| {
                let surcharge = self.route(edge.line).map_or(0, LineRoute::extra_fare);
                (edge.weight(self.path_type), surcharge, edge.line)
            })
    }
}
