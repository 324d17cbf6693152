//! Application state for the web layer.

use std::sync::Arc;

use crate::fare::FareEngine;
use crate::network::StaticNetwork;
use crate::path::PathService;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Everything here is read-only, so handlers run concurrently without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Stations and lines
    pub network: Arc<StaticNetwork>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,

    /// Fare calculation
    pub fares: Arc<FareEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: StaticNetwork, config: SearchConfig, fares: FareEngine) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            fares: Arc::new(fares),
        }
    }

    /// A path service borrowing this state.
    pub fn path_service(&self) -> PathService<'_, StaticNetwork> {
        PathService::new(&self.network, &self.config, &self.fares)
    }
}
