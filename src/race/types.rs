use crate::timecode::{self, LapTime};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Racer {
    pub name: String,
    // Empty when the racer nominated no specialty
    pub signature_map: String,
}

impl Racer {
    pub fn new(name: impl Into<String>, signature_map: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            signature_map: signature_map.into(),
        }
    }

    pub fn has_signature(&self, map_name: &str) -> bool {
        self.signature_map.trim() == map_name.trim()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceMap {
    pub name: String,
    /// One entry per racer slot, same order as the roster.
    #[serde(deserialize_with = "nullable_times")]
    pub times: Vec<String>,
}

impl RaceMap {
    pub fn new<S: Into<String>>(name: impl Into<String>, times: Vec<S>) -> Self {
        Self {
            name: name.into(),
            times: times.into_iter().map(Into::into).collect(),
        }
    }

    /// Decoded time for `slot`. Slots past the end of `times` have no time.
    pub fn time_at(&self, slot: usize) -> Option<LapTime> {
        self.times.get(slot).and_then(|t| timecode::decode(t))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceState {
    pub racers: Vec<Racer>,
    pub maps: Vec<RaceMap>,
    pub first_map_btc: String,
}

/// A map whose `times` does not line up with the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentIssue {
    pub map_index: usize,
    pub map_name: String,
    pub times_len: usize,
    pub racers_len: usize,
}

impl RaceState {
    pub fn new(racers: Vec<Racer>, maps: Vec<RaceMap>) -> Self {
        Self {
            racers,
            maps,
            first_map_btc: String::new(),
        }
    }

    pub fn with_first_map_btc(mut self, name: impl Into<String>) -> Self {
        self.first_map_btc = name.into();
        self
    }

    /// Only the first map can carry the organizer flag, and only when the
    /// stored marker names it. Affects display only.
    pub fn is_btc_map(&self, map_index: usize) -> bool {
        let marker = self.first_map_btc.trim();
        map_index == 0
            && !marker.is_empty()
            && self
                .maps
                .first()
                .is_some_and(|m| m.name.trim() == marker)
    }

    pub fn alignment_issues(&self) -> Vec<AlignmentIssue> {
        let racers_len = self.racers.len();
        self.maps
            .iter()
            .enumerate()
            .filter(|(_, m)| m.times.len() != racers_len)
            .map(|(i, m)| AlignmentIssue {
                map_index: i,
                map_name: m.name.clone(),
                times_len: m.times.len(),
                racers_len,
            })
            .collect()
    }
}

fn nullable_times<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
