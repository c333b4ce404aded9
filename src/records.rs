//! Historical record submissions, indexed for personal-best lookups.

use crate::error::LbResult;
use crate::timecode::{self, LapTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSubmission {
    pub racer: String,
    pub map: String,
    pub time: String,
}

impl RecordSubmission {
    pub fn new(racer: impl Into<String>, map: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            racer: racer.into(),
            map: map.into(),
            time: time.into(),
        }
    }
}

/// Trimmed and case-folded, so " Alice" and "alice" share records.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best valid time per (racer, map), built once and queried many times.
#[derive(Debug, Clone, Default)]
pub struct RecordBook {
    best: HashMap<(String, String), LapTime>,
}

impl RecordBook {
    pub fn from_submissions(submissions: &[RecordSubmission]) -> Self {
        let mut best: HashMap<(String, String), LapTime> = HashMap::new();
        let mut skipped = 0;

        for sub in submissions {
            let time = match timecode::decode(&sub.time) {
                Some(t) if t.is_valid() => t,
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            let key = (normalize_name(&sub.racer), normalize_name(&sub.map));
            best.entry(key)
                .and_modify(|current| *current = (*current).min(time))
                .or_insert(time);
        }

        debug!(
            "Record book: {} entries from {} submissions ({} unusable)",
            best.len(),
            submissions.len(),
            skipped
        );
        Self { best }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LbResult<Self> {
        Self::from_json_reader(File::open(path)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> LbResult<Self> {
        let submissions: Vec<RecordSubmission> = serde_json::from_reader(reader)?;
        Ok(Self::from_submissions(&submissions))
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn personal_best(&self, racer: &str, map: &str) -> Option<LapTime> {
        self.best
            .get(&(normalize_name(racer), normalize_name(map)))
            .copied()
    }

    /// True when `time` is a finish at least as fast as the stored record,
    /// or the first record for this pair.
    pub fn is_personal_best(&self, racer: &str, map: &str, time: LapTime) -> bool {
        if !time.is_valid() {
            return false;
        }
        match self.personal_best(racer, map) {
            Some(best) => time <= best,
            None => true,
        }
    }
}
