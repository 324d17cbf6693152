//! Ranking for earliest-arrival candidates.

use crate::domain::LineId;

use super::arrival::TimePath;

/// Rank simulated routes by preference.
///
/// Routes are ranked by:
/// 1. Arrival time (earlier is better)
/// 2. Riding time (shorter is better)
/// 3. Distance (shorter is better)
/// 4. Station sequence
/// 5. Lines ridden, so the order is total
///
/// Returns routes sorted best-first.
pub fn rank_time_paths(mut paths: Vec<TimePath>) -> Vec<TimePath> {
    paths.sort_by(|a, b| {
        a.arrival()
            .cmp(&b.arrival())
            .then_with(|| a.path().duration().cmp(&b.path().duration()))
            .then_with(|| a.path().distance().cmp(&b.path().distance()))
            .then_with(|| a.path().stations().cmp(b.path().stations()))
            .then_with(|| lines_ridden(a).cmp(&lines_ridden(b)))
    });

    paths
}

fn lines_ridden(path: &TimePath) -> Vec<LineId> {
    path.path().edges().iter().map(|e| e.line).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Line, LineId, PathType, Section, StationId};
    use crate::graph::RoutingGraph;
    use crate::planner::result::PathResult;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn graph() -> RoutingGraph {
        let lines = vec![Line::new(
            LineId(1),
            "Only",
            vec![
                Section::new(StationId(1), StationId(2), 3, 4),
                Section::new(StationId(2), StationId(3), 3, 4),
            ],
        )];
        RoutingGraph::build(&lines, PathType::Arrival).unwrap()
    }

    proptest! {
        /// Ranking yields non-decreasing arrivals and keeps every route.
        #[test]
        fn ranking_orders_arrivals(offsets in prop::collection::vec(0i64..2000, 0..20)) {
            let graph = graph();
            let midnight = NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();

            let paths: Vec<TimePath> = offsets
                .iter()
                .map(|&m| {
                    let path = PathResult::resolve(
                        &graph,
                        vec![StationId(1), StationId(2), StationId(3)],
                    )
                    .unwrap();
                    TimePath::simulate(&graph, path, midnight + Duration::minutes(m)).unwrap()
                })
                .collect();

            let ranked = rank_time_paths(paths);

            prop_assert_eq!(ranked.len(), offsets.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].arrival() <= pair[1].arrival());
            }
        }
    }
}
