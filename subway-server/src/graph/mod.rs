//! Routing graph construction.
//!
//! Turns the network's lines into a directed graph whose vertices are
//! stations and whose edges carry distance, duration, and the owning line.
//! Malformed lines are rejected here so the search can assume every line is
//! a simple chain of stations.

mod builder;
mod error;
mod line_route;

pub use builder::{RoutingGraph, SectionEdge};
pub use error::GraphError;
pub use line_route::{Direction, LineRoute};
