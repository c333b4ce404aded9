use super::types::{RaceMap, RaceState, Racer};
use crate::error::{LapboardError, LbResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

const SIGNATURE_ROW: &str = "@signature";
const BTC_ROW: &str = "@btc";

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> LbResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                LapboardError::Config(format!(
                    "Cannot infer race format of '{}' from its extension",
                    path.display()
                ))
            })?;
        Self::from_str(ext).map_err(|_| {
            let known: Vec<String> = Self::iter().map(|f| f.to_string()).collect();
            LapboardError::Config(format!(
                "Unsupported race file extension '.{}' (expected one of: {})",
                ext,
                known.join(", ")
            ))
        })
    }
}

impl RaceState {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LbResult<Self> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;
        debug!("Loading {} race from {}", format, path.display());
        let file = File::open(path)?;
        match format {
            InputFormat::Json => Self::from_json_reader(file),
            InputFormat::Csv => Self::from_csv_reader(file),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> LbResult<Self> {
        let mut race: RaceState = serde_json::from_reader(reader)?;
        for racer in &mut race.racers {
            racer.name = racer.name.trim().to_string();
        }
        Ok(race)
    }

    /// Reads a race sheet:
    ///
    /// ```text
    /// map,Alice,Bob
    /// @signature,Forest,
    /// @btc,Forest
    /// Forest,1'00'00,1'02'00
    /// ```
    ///
    /// The header names the racers; the two `@` rows are optional.
    pub fn from_csv_reader<R: Read>(reader: R) -> LbResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() < 2 {
            return Err(LapboardError::Validation(
                "Race sheet header needs a map column and at least one racer".to_string(),
            ));
        }

        let mut racers: Vec<Racer> = headers.iter().skip(1).map(|n| Racer::new(n, "")).collect();
        let mut maps = Vec::new();
        let mut first_map_btc = String::new();
        let mut skipped_count = 0;

        for (row_idx, result) in rdr.records().enumerate() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                    skipped_count += 1;
                    continue;
                }
            };

            let Some(label) = rec.get(0) else {
                skipped_count += 1;
                continue;
            };
            let cells = rec.iter().skip(1);

            if label.eq_ignore_ascii_case(SIGNATURE_ROW) {
                for (racer, sig) in racers.iter_mut().zip(cells) {
                    racer.signature_map = sig.to_string();
                }
            } else if label.eq_ignore_ascii_case(BTC_ROW) {
                first_map_btc = rec.get(1).unwrap_or_default().to_string();
            } else if label.is_empty() {
                skipped_count += 1;
            } else {
                // Short rows leave trailing racers without a time.
                let mut times: Vec<String> = cells.map(str::to_string).collect();
                times.resize(racers.len().max(times.len()), String::new());
                maps.push(RaceMap::new(label, times));
            }
        }

        if skipped_count > 0 {
            warn!("Skipped {} unusable rows in race sheet.", skipped_count);
        }
        debug!(
            "Race sheet: {} racers, {} maps",
            racers.len(),
            maps.len()
        );

        Ok(RaceState {
            racers,
            maps,
            first_map_btc,
        })
    }
}
