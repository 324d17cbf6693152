//! Path assembly error types.

use crate::domain::StationId;
use crate::fare::FareError;
use crate::graph::GraphError;
use crate::network::NetworkError;
use crate::planner::SearchError;

/// Errors from answering a route or timetable query.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The station registry has no such station
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error(transparent)]
    Search(#[from] SearchError),

    /// Line data could not be turned into a routing graph
    #[error("invalid line data: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Fare(#[from] FareError),

    #[error("network data unavailable: {0}")]
    Network(#[from] NetworkError),
}
