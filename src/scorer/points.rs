use super::types::MapSummary;
use crate::config::ScoringRules;
use crate::race::{RaceMap, RaceState, Racer};
use crate::timecode::LapTime;

/// Valid (strictly positive) decoded time per roster slot. Missing slots
/// and unreadable strings both come out as `None`; extra times are ignored.
pub fn slot_times(map: &RaceMap, racer_count: usize) -> Vec<Option<LapTime>> {
    (0..racer_count)
        .map(|slot| map.time_at(slot).filter(|t| t.is_valid()))
        .collect()
}

pub fn best_time(times: &[Option<LapTime>]) -> Option<LapTime> {
    times.iter().flatten().min().copied()
}

pub fn map_points(rules: &ScoringRules, map: &RaceMap, racers: &[Racer]) -> Vec<u32> {
    let times = slot_times(map, racers.len());
    let Some(best) = best_time(&times) else {
        return vec![0; racers.len()];
    };
    let step = rules.penalty_step_hundredths.max(1);

    racers
        .iter()
        .zip(&times)
        .map(|(racer, time)| match time {
            None => 0,
            Some(t) if *t == best => {
                if racer.has_signature(&map.name) {
                    rules.points_signature_win
                } else {
                    rules.points_win
                }
            }
            Some(t) => {
                let steps = t.behind(best).hundredths() / step;
                let penalty = u32::try_from(steps).unwrap_or(u32::MAX);
                rules.points_base.saturating_sub(penalty)
            }
        })
        .collect()
}

pub fn summarize_map(race: &RaceState, map_index: usize) -> Option<MapSummary> {
    let map = race.maps.get(map_index)?;
    let times = slot_times(map, race.racers.len());
    let best = best_time(&times);
    let winners = match best {
        Some(b) => times
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Some(b))
            .map(|(slot, _)| slot)
            .collect(),
        None => Vec::new(),
    };

    Some(MapSummary {
        index: map_index,
        name: map.name.clone(),
        is_btc: race.is_btc_map(map_index),
        best_time: best,
        winners,
    })
}
