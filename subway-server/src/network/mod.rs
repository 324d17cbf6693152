//! Source of station and line data.
//!
//! Route queries read the whole network once per request through
//! [`NetworkProvider`]. The server uses [`StaticNetwork`], loaded from a
//! JSON file at startup.

mod error;
mod static_network;

pub use error::NetworkError;
pub use static_network::StaticNetwork;

use crate::domain::{Line, Station, StationId};

/// Trait for reading network data.
///
/// This abstraction allows for testing with fixed networks and for
/// backing the planner with another store.
pub trait NetworkProvider {
    /// Every line with its sections.
    fn lines(&self) -> Result<Vec<Line>, NetworkError>;

    /// Look up a station by id.
    fn station(&self, id: StationId) -> Result<Option<Station>, NetworkError>;
}
