pub mod points;
pub mod ranking;
pub mod types;

pub use self::types::{MapSummary, PointsMatrix, RankingEntry, Standings};
use crate::config::ScoringRules;
use crate::race::{RaceMap, RaceState, Racer};
use tracing::debug;

/// Stateless scoring engine. Holds only the point rules, so one value can be
/// shared across threads and reused for any number of races.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    pub rules: ScoringRules,
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// One row of the points matrix.
    pub fn map_points(&self, map: &RaceMap, racers: &[Racer]) -> Vec<u32> {
        points::map_points(&self.rules, map, racers)
    }

    pub fn points_matrix(&self, race: &RaceState) -> PointsMatrix {
        PointsMatrix::from_rows(
            race.maps
                .iter()
                .map(|map| self.map_points(map, &race.racers))
                .collect(),
        )
    }

    pub fn totals(&self, race: &RaceState) -> Vec<u32> {
        self.points_matrix(race).totals(race.racers.len())
    }

    pub fn ranking(&self, race: &RaceState) -> Vec<RankingEntry> {
        ranking::rank_totals(&race.racers, &self.totals(race))
    }

    pub fn summarize_map(&self, race: &RaceState, map_index: usize) -> Option<MapSummary> {
        points::summarize_map(race, map_index)
    }

    /// Full pass: matrix, ranking and per-map summaries.
    pub fn score(&self, race: &RaceState) -> Standings {
        let matrix = self.points_matrix(race);
        let ranking = ranking::rank_totals(&race.racers, &matrix.totals(race.racers.len()));
        let maps = (0..race.maps.len())
            .filter_map(|i| points::summarize_map(race, i))
            .collect();

        debug!(
            "Scored {} maps for {} racers",
            matrix.map_count(),
            race.racers.len()
        );

        Standings {
            matrix,
            ranking,
            maps,
        }
    }
}

/// Points for one map under the standard 12/11/10 rules.
pub fn compute_map_points(map: &RaceMap, racers: &[Racer]) -> Vec<u32> {
    Scorer::default().map_points(map, racers)
}

/// Ranking for a race under the standard rules.
pub fn compute_ranking(race: &RaceState) -> Vec<RankingEntry> {
    Scorer::default().ranking(race)
}
