//! Network data error types.

use std::path::PathBuf;

use crate::domain::{LineId, StationId};

/// Errors that can occur when loading or reading network data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The network file could not be read
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The network document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A section refers to a station the document does not define
    #[error("line {line} refers to unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// Two stations share an id
    #[error("station {0} is defined more than once")]
    DuplicateStation(StationId),
}
