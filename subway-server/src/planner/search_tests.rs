//! Scenario tests for route search.

use super::*;
use crate::domain::{Line, LineId, PathType, Section, StationId, Timetable};
use crate::graph::RoutingGraph;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;

const GANGNAM: StationId = StationId(1);
const YEOKSAM: StationId = StationId(2);
const YANGJAE: StationId = StationId(3);
const CITIZENS_FOREST: StationId = StationId(4);
const CHEONGGYESAN: StationId = StationId(5);
const GYODAE: StationId = StationId(6);
const NAMBU_TERMINAL: StationId = StationId(7);
const MYEONGDONG: StationId = StationId(8);
const EULJIRO: StationId = StationId(9);

fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn seoul_lines() -> Vec<Line> {
    vec![
        Line::new(
            LineId(2),
            "2호선",
            vec![
                Section::new(GYODAE, GANGNAM, 7, 7),
                Section::new(GANGNAM, YEOKSAM, 5, 5),
            ],
        ),
        Line::new(
            LineId(3),
            "3호선",
            vec![
                Section::new(GYODAE, NAMBU_TERMINAL, 3, 3),
                Section::new(NAMBU_TERMINAL, YANGJAE, 3, 3),
            ],
        ),
        Line::new(
            LineId(7),
            "신분당선",
            vec![
                Section::new(GANGNAM, YANGJAE, 8, 5),
                Section::new(YANGJAE, CITIZENS_FOREST, 3, 3),
                Section::new(CITIZENS_FOREST, CHEONGGYESAN, 4, 7),
            ],
        )
        .with_extra_fare(900),
        Line::new(
            LineId(4),
            "4호선",
            vec![Section::new(MYEONGDONG, EULJIRO, 2, 2)],
        ),
    ]
}

fn seoul(path_type: PathType) -> RoutingGraph {
    RoutingGraph::build(&seoul_lines(), path_type).unwrap()
}

fn station(id: u64) -> StationId {
    StationId(id)
}

/// Express 1-2-4 runs hourly from `first`; local 1-3-4 runs on demand.
fn express_and_local(first: NaiveTime) -> RoutingGraph {
    let lines = vec![
        Line::new(
            LineId(10),
            "Express",
            vec![
                Section::new(station(1), station(2), 10, 10),
                Section::new(station(2), station(4), 10, 10),
            ],
        )
        .with_timetable(Timetable::new(
            first,
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            60,
        )),
        Line::new(
            LineId(11),
            "Local",
            vec![
                Section::new(station(1), station(3), 15, 15),
                Section::new(station(3), station(4), 15, 15),
            ],
        ),
    ];
    RoutingGraph::build(&lines, PathType::Arrival).unwrap()
}

fn six(min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(6, min, 0).unwrap()
}

#[test]
fn shortest_by_distance() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let path = planner.shortest_path(GANGNAM, NAMBU_TERMINAL).unwrap();

    assert_eq!(path.stations(), &[GANGNAM, GYODAE, NAMBU_TERMINAL]);
    assert_eq!(path.distance(), 10);
    assert_eq!(path.duration(), 10);
}

#[test]
fn shortest_by_duration() {
    let graph = seoul(PathType::Duration);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let path = planner.shortest_path(GANGNAM, NAMBU_TERMINAL).unwrap();

    assert_eq!(path.stations(), &[GANGNAM, YANGJAE, NAMBU_TERMINAL]);
    assert_eq!(path.duration(), 8);
    assert_eq!(path.distance(), 11);
    assert!(path.lines().contains(&LineId(7)));
}

#[test]
fn route_changing_lines() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let path = planner.shortest_path(YEOKSAM, CITIZENS_FOREST).unwrap();

    assert_eq!(path.stations(), &[YEOKSAM, GANGNAM, YANGJAE, CITIZENS_FOREST]);
    assert_eq!(path.distance(), 16);
    assert_eq!(path.duration(), 13);
}

#[test]
fn search_dispatches_on_graph_weighting() {
    let config = SearchConfig::default();
    let request = SearchRequest::new(GANGNAM, NAMBU_TERMINAL);

    let by_distance = seoul(PathType::Distance);
    let path = Planner::new(&by_distance, &config).search(&request).unwrap();
    assert_eq!(path.distance(), 10);

    let by_duration = seoul(PathType::Duration);
    let path = Planner::new(&by_duration, &config).search(&request).unwrap();
    assert_eq!(path.duration(), 8);
}

#[test]
fn same_station_rejected() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    assert_eq!(
        planner.shortest_path(GANGNAM, GANGNAM).unwrap_err(),
        SearchError::SameStation(GANGNAM)
    );
}

#[test]
fn same_station_rejected_even_when_unknown() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    assert_eq!(
        planner.shortest_path(station(99), station(99)).unwrap_err(),
        SearchError::SameStation(station(99))
    );
}

#[test]
fn unknown_station_rejected() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    assert_eq!(
        planner.shortest_path(GANGNAM, station(99)).unwrap_err(),
        SearchError::StationNotFound(station(99))
    );
    assert_eq!(
        planner.shortest_path(station(98), GANGNAM).unwrap_err(),
        SearchError::StationNotFound(station(98))
    );
}

#[test]
fn disconnected_components() {
    let graph = seoul(PathType::Distance);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    assert_eq!(
        planner.shortest_path(GANGNAM, MYEONGDONG).unwrap_err(),
        SearchError::Disconnected {
            from: GANGNAM,
            to: MYEONGDONG
        }
    );
}

#[test]
fn disconnected_in_arrival_mode() {
    let graph = seoul(PathType::Arrival);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    assert!(matches!(
        planner.earliest_arrival_path(EULJIRO, GANGNAM, at(9, 0)),
        Err(SearchError::Disconnected { .. })
    ));
}

#[test]
fn arrival_without_timetables_follows_duration() {
    let graph = seoul(PathType::Arrival);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let request = SearchRequest::new(GANGNAM, NAMBU_TERMINAL).departing_at(at(9, 0));
    let path = planner.search(&request).unwrap();

    assert_eq!(path.stations(), &[GANGNAM, YANGJAE, NAMBU_TERMINAL]);
    assert_eq!(path.duration(), 8);
}

#[test]
fn arrival_mode_needs_departure() {
    let graph = seoul(PathType::Arrival);
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    let request = SearchRequest::new(GANGNAM, NAMBU_TERMINAL);
    assert_eq!(
        planner.search(&request).unwrap_err(),
        SearchError::MissingDepartureTime
    );

    let same = SearchRequest::new(GANGNAM, GANGNAM);
    assert_eq!(
        planner.search(&same).unwrap_err(),
        SearchError::SameStation(GANGNAM)
    );
}

#[test]
fn missed_express_loses_to_local() {
    let graph = express_and_local(six(0));
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // Next express leaves at 07:00 and arrives 07:20; the local arrives 06:31.
    let path = planner
        .earliest_arrival_path(station(1), station(4), at(6, 1))
        .unwrap();

    assert_eq!(path.stations(), &[station(1), station(3), station(4)]);
}

#[test]
fn waiting_express_beats_local() {
    let graph = express_and_local(six(0));
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // Express leaves at 06:00 and arrives 06:20; the local arrives 06:25.
    let path = planner
        .earliest_arrival_path(station(1), station(4), at(5, 55))
        .unwrap();

    assert_eq!(path.stations(), &[station(1), station(2), station(4)]);
}

#[test]
fn equal_arrival_prefers_shorter_ride() {
    let graph = express_and_local(six(10));
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // Both arrive at 06:30; the express rides for 20 minutes, the local 30.
    let path = planner
        .earliest_arrival_path(station(1), station(4), at(6, 0))
        .unwrap();

    assert_eq!(path.stations(), &[station(1), station(2), station(4)]);
    assert_eq!(path.duration(), 20);
}

#[test]
fn untimed_parallel_line_beats_waiting() {
    let lines = vec![
        Line::new(LineId(1), "Timed", vec![Section::new(station(1), station(2), 5, 5)])
            .with_timetable(Timetable::new(
                six(0),
                NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
                60,
            )),
        Line::new(LineId(2), "Untimed", vec![Section::new(station(1), station(2), 6, 6)]),
    ];
    let graph = RoutingGraph::build(&lines, PathType::Arrival).unwrap();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // The timed line is quicker to ride but its next train leaves at 07:00.
    let path = planner
        .earliest_arrival_path(station(1), station(2), at(6, 1))
        .unwrap();

    assert_eq!(path.lines(), BTreeSet::from([LineId(2)]));
    assert_eq!(path.duration(), 6);
}

#[test]
fn stays_on_the_line_already_running() {
    let hourly_from = |first| {
        Timetable::new(first, NaiveTime::from_hms_opt(22, 0, 0).unwrap(), 60)
    };
    let lines = vec![
        Line::new(
            LineId(1),
            "Early",
            vec![
                Section::new(station(1), station(2), 5, 5),
                Section::new(station(2), station(3), 5, 5),
            ],
        )
        .with_timetable(hourly_from(six(0))),
        Line::new(
            LineId(2),
            "Quick",
            vec![
                Section::new(station(1), station(2), 4, 4),
                Section::new(station(2), station(3), 4, 4),
            ],
        )
        .with_timetable(hourly_from(six(30))),
    ];
    let graph = RoutingGraph::build(&lines, PathType::Arrival).unwrap();
    let config = SearchConfig::default();
    let planner = Planner::new(&graph, &config);

    // The early train arrives 06:10; the quick one not before 06:38.
    let path = planner
        .earliest_arrival_path(station(1), station(3), at(6, 0))
        .unwrap();

    assert_eq!(path.stations(), &[station(1), station(2), station(3)]);
    assert_eq!(path.lines(), BTreeSet::from([LineId(1)]));
    assert_eq!(path.duration(), 10);
}

#[test]
fn candidate_bound_limits_enumeration() {
    let graph = express_and_local(six(0));
    let config = SearchConfig::new(1);
    let planner = Planner::new(&graph, &config);

    // Only the shortest-duration candidate (the express) is considered.
    let path = planner
        .earliest_arrival_path(station(1), station(4), at(6, 1))
        .unwrap();

    assert_eq!(path.stations(), &[station(1), station(2), station(4)]);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CONNECTED: [StationId; 7] = [
        GANGNAM,
        YEOKSAM,
        YANGJAE,
        CITIZENS_FOREST,
        CHEONGGYESAN,
        GYODAE,
        NAMBU_TERMINAL,
    ];

    fn weighting() -> impl Strategy<Value = PathType> {
        prop_oneof![Just(PathType::Distance), Just(PathType::Duration)]
    }

    proptest! {
        /// Routes start and end where asked, and the weight of a route is
        /// the same in both directions.
        #[test]
        fn routes_are_symmetric(
            a in 0usize..7,
            b in 0usize..7,
            path_type in weighting(),
        ) {
            prop_assume!(a != b);
            let graph = seoul(path_type);
            let config = SearchConfig::default();
            let planner = Planner::new(&graph, &config);

            let there = planner.shortest_path(CONNECTED[a], CONNECTED[b]).unwrap();
            let back = planner.shortest_path(CONNECTED[b], CONNECTED[a]).unwrap();

            prop_assert_eq!(there.source(), CONNECTED[a]);
            prop_assert_eq!(there.target(), CONNECTED[b]);
            prop_assert_eq!(there.edges().len(), there.stations().len() - 1);

            let weight = |p: &PathResult| match path_type {
                PathType::Distance => p.distance(),
                _ => p.duration(),
            };
            prop_assert_eq!(weight(&there), weight(&back));
        }
    }
}
