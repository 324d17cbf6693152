//! Search configuration for the route planner.

/// Default cap on candidate paths enumerated in earliest-arrival mode.
pub const DEFAULT_MAX_CANDIDATE_PATHS: usize = 10_000;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of simple paths enumerated (shortest first) when
    /// searching by earliest arrival.
    ///
    /// This bounds CPU time on dense networks. A route beyond the bound is
    /// never considered, so the result is best-effort past it.
    pub max_candidate_paths: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_candidate_paths: usize) -> Self {
        Self {
            max_candidate_paths,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidate_paths: DEFAULT_MAX_CANDIDATE_PATHS,
        }
    }
}
