//! Resolved routes.

use std::collections::BTreeSet;

use crate::domain::{LineId, StationId};
use crate::graph::{RoutingGraph, SectionEdge};

/// A route found by the planner: stations in travel order plus the edge
/// ridden between each consecutive pair.
///
/// # Invariants
///
/// - At least two stations, none repeated
/// - `edges.len() == stations.len() - 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    stations: Vec<StationId>,
    edges: Vec<SectionEdge>,
}

impl PathResult {
    /// Resolve a station sequence against the graph.
    ///
    /// Returns `None` if the sequence is shorter than two stations, repeats a
    /// station, or steps between stations that share no section.
    pub fn resolve(graph: &RoutingGraph, stations: Vec<StationId>) -> Option<Self> {
        if !is_simple(&stations) {
            return None;
        }

        let edges = stations
            .windows(2)
            .map(|hop| graph.best_edge(hop[0], hop[1]))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { stations, edges })
    }

    /// Resolve a station sequence where each hop names the line it rides.
    ///
    /// `lines[i]` is the line between `stations[i]` and `stations[i + 1]`.
    /// Returns `None` under the same conditions as [`PathResult::resolve`],
    /// or if a hop's line has no section between its two stations.
    pub fn resolve_on_lines(
        graph: &RoutingGraph,
        stations: Vec<StationId>,
        lines: &[LineId],
    ) -> Option<Self> {
        if !is_simple(&stations) || lines.len() + 1 != stations.len() {
            return None;
        }

        let edges = stations
            .windows(2)
            .zip(lines)
            .map(|(hop, &line)| graph.edge_on_line(hop[0], hop[1], line))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { stations, edges })
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Edges in travel order.
    pub fn edges(&self) -> &[SectionEdge] {
        &self.edges
    }

    pub fn source(&self) -> StationId {
        self.stations[0]
    }

    pub fn target(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Total distance over all edges.
    pub fn distance(&self) -> u32 {
        self.edges.iter().map(|e| e.distance).sum()
    }

    /// Total riding time over all edges.
    pub fn duration(&self) -> u32 {
        self.edges.iter().map(|e| e.duration).sum()
    }

    /// Distinct lines ridden.
    pub fn lines(&self) -> BTreeSet<LineId> {
        self.edges.iter().map(|e| e.line).collect()
    }
}

/// At least two stations, none repeated.
fn is_simple(stations: &[StationId]) -> bool {
    let distinct: BTreeSet<_> = stations.iter().collect();
    stations.len() >= 2 && distinct.len() == stations.len()
}
