//! In-memory network loaded from a JSON document.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{Line, Station, StationId};

use super::{NetworkError, NetworkProvider};

/// On-disk shape of a network file.
#[derive(Debug, Deserialize)]
struct NetworkDocument {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

/// A fixed set of stations and lines held in memory.
///
/// Every section is checked to refer to a defined station when the network
/// is built, so lookups during route queries only fail for ids a caller
/// made up.
#[derive(Debug, Clone, Default)]
pub struct StaticNetwork {
    stations: BTreeMap<StationId, Station>,
    lines: Vec<Line>,
}

impl StaticNetwork {
    /// Build a network from stations and lines.
    ///
    /// # Errors
    ///
    /// Fails if a station id repeats or a section names an undefined station.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Result<Self, NetworkError> {
        let mut by_id = BTreeMap::new();
        for station in stations {
            let id = station.id;
            if by_id.insert(id, station).is_some() {
                return Err(NetworkError::DuplicateStation(id));
            }
        }

        for line in &lines {
            for section in &line.sections {
                for station in [section.up_station, section.down_station] {
                    if !by_id.contains_key(&station) {
                        return Err(NetworkError::UnknownStation {
                            line: line.id,
                            station,
                        });
                    }
                }
            }
        }

        Ok(Self {
            stations: by_id,
            lines,
        })
    }

    /// Parse a network from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let document: NetworkDocument = serde_json::from_str(json)?;
        Self::new(document.stations, document.lines)
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json_str(&contents)?;

        info!(
            path = %path.display(),
            stations = network.stations.len(),
            lines = network.lines.len(),
            "loaded network"
        );

        Ok(network)
    }
}

impl NetworkProvider for StaticNetwork {
    fn lines(&self) -> Result<Vec<Line>, NetworkError> {
        Ok(self.lines.clone())
    }

    fn station(&self, id: StationId) -> Result<Option<Station>, NetworkError> {
        Ok(self.stations.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, Section};
    use chrono::NaiveTime;
    use tempfile::tempdir;

    const NETWORK: &str = r#"{
        "stations": [
            { "id": 1, "name": "강남역" },
            { "id": 3, "name": "양재역" },
            { "id": 6, "name": "교대역" }
        ],
        "lines": [
            {
                "id": 2,
                "name": "2호선",
                "sections": [
                    { "up_station": 6, "down_station": 1, "distance": 7, "duration": 7 }
                ],
                "timetable": {
                    "first_departure": "05:30",
                    "last_departure": "23:30",
                    "interval_mins": 10
                }
            },
            {
                "id": 7,
                "name": "신분당선",
                "extra_fare": 900,
                "sections": [
                    { "up_station": 1, "down_station": 3, "distance": 8, "duration": 5 }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_document() {
        let network = StaticNetwork::from_json_str(NETWORK).unwrap();

        let lines = network.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].extra_fare, 0);
        assert_eq!(lines[1].extra_fare, 900);
        assert!(lines[1].timetable.is_none());

        let timetable = lines[0].timetable.as_ref().unwrap();
        assert_eq!(
            timetable.first_departure,
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
        assert_eq!(timetable.interval_mins, 10);

        assert_eq!(
            network.station(StationId(3)).unwrap().unwrap().name,
            "양재역"
        );
        assert!(network.station(StationId(99)).unwrap().is_none());
    }

    #[test]
    fn unknown_station_in_section() {
        let stations = vec![Station::new(StationId(1), "강남역")];
        let lines = vec![Line::new(
            LineId(2),
            "2호선",
            vec![Section::new(StationId(1), StationId(2), 5, 5)],
        )];

        let err = StaticNetwork::new(stations, lines).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::UnknownStation {
                line: LineId(2),
                station: StationId(2)
            }
        ));
    }

    #[test]
    fn duplicate_station() {
        let stations = vec![
            Station::new(StationId(1), "강남역"),
            Station::new(StationId(1), "역삼역"),
        ];

        let err = StaticNetwork::new(stations, Vec::new()).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStation(StationId(1))));
    }

    #[test]
    fn malformed_json() {
        let err = StaticNetwork::from_json_str("{ \"stations\": [").unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, NETWORK).unwrap();

        let loaded = StaticNetwork::load(&path).unwrap();
        let parsed = StaticNetwork::from_json_str(NETWORK).unwrap();
        assert_eq!(loaded.lines().unwrap(), parsed.lines().unwrap());
        assert_eq!(loaded.station(StationId(6)).unwrap().unwrap().name, "교대역");
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = StaticNetwork::load(&path).unwrap_err();
        match err {
            NetworkError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
