//! Route search over a routing graph.
//!
//! Distance and duration queries are single-source shortest-path searches.
//! Earliest-arrival queries enumerate a bounded number of candidate routes,
//! simulate the clock along each (waiting for trains on timetabled lines),
//! and keep the one that arrives first.

mod arrival;
mod config;
mod rank;
mod result;
mod search;

#[cfg(test)]
mod search_tests;

pub use arrival::{TimePath, TimePaths};
pub use config::{DEFAULT_MAX_CANDIDATE_PATHS, SearchConfig};
pub use rank::rank_time_paths;
pub use result::PathResult;
pub use search::{Planner, SearchError, SearchRequest};
