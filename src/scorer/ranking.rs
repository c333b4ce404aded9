use super::types::RankingEntry;
use crate::race::Racer;

/// Orders racers by total, highest first. Equal totals keep roster order.
pub fn rank_totals(racers: &[Racer], totals: &[u32]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = racers
        .iter()
        .enumerate()
        .map(|(i, racer)| RankingEntry {
            original_index: i,
            name: racer.name.clone(),
            total_score: totals.get(i).copied().unwrap_or(0),
            rank: 0,
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    assign_competition_ranks(&mut entries);
    entries
}

/// `[12, 12, 9]` ranks as `[1, 1, 3]`. Expects entries already sorted.
pub fn assign_competition_ranks(entries: &mut [RankingEntry]) {
    let mut previous: Option<u32> = None;
    let mut rank = 0;
    for (position, entry) in entries.iter_mut().enumerate() {
        if previous != Some(entry.total_score) {
            rank = position + 1;
            previous = Some(entry.total_score);
        }
        entry.rank = rank;
    }
}
