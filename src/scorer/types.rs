use crate::timecode::LapTime;
use serde::{Deserialize, Serialize};

/// Points indexed `[map][racer]`. Recomputed on every pass, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsMatrix {
    rows: Vec<Vec<u32>>,
}

impl PointsMatrix {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn map_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, map_index: usize) -> Option<&[u32]> {
        self.rows.get(map_index).map(Vec::as_slice)
    }

    pub fn get(&self, map_index: usize, racer_index: usize) -> u32 {
        self.rows
            .get(map_index)
            .and_then(|row| row.get(racer_index))
            .copied()
            .unwrap_or(0)
    }

    /// Column sums for `racer_count` racers.
    pub fn totals(&self, racer_count: usize) -> Vec<u32> {
        let mut totals = vec![0u32; racer_count];
        for row in &self.rows {
            for (total, &points) in totals.iter_mut().zip(row) {
                *total = total.saturating_add(points);
            }
        }
        totals
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// Slot of the racer in the roster.
    pub original_index: usize,
    pub name: String,
    pub total_score: u32,
    /// 1-based competition rank; ties share a rank and leave a gap.
    pub rank: usize,
}

/// Display facts for one map, derived in the same pass as its points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub index: usize,
    pub name: String,
    pub is_btc: bool,
    // Hundredths of a second
    pub best_time: Option<LapTime>,
    /// Slots holding the best time. More than one on an exact tie.
    pub winners: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub matrix: PointsMatrix,
    pub ranking: Vec<RankingEntry>,
    pub maps: Vec<MapSummary>,
}
