use crate::error::{LapboardError, LbResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub rules: ScoringRules,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    // === WINNERS ===
    // Best time on the racer's own signature map
    #[arg(long, default_value_t = 12)]
    pub points_signature_win: u32,
    #[arg(long, default_value_t = 11)]
    pub points_win: u32,

    // === CHASERS ===
    // Starting value before the deficit penalty
    #[arg(long, default_value_t = 10)]
    pub points_base: u32,
    // One point lost per full step behind the leader (100 = one second)
    #[arg(long, default_value_t = 100)]
    pub penalty_step_hundredths: u64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_signature_win: 12,
            points_win: 11,
            points_base: 10,
            penalty_step_hundredths: 100,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, default_value_t = false)]
    pub hide_matrix: bool,
    #[arg(long, default_value_t = false)]
    pub hide_maps: bool,
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ScoringRules {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LbResult<Self> {
        let content = fs::read_to_string(path)?;
        let rules: Self = serde_json::from_str(&content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> LbResult<()> {
        if self.penalty_step_hundredths == 0 {
            return Err(LapboardError::Config(
                "penalty_step_hundredths must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_rules: &ScoringRules, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_rules.$field;
                }
            };
        }

        update_if_present!(points_signature_win, "points_signature_win");
        update_if_present!(points_win, "points_win");
        update_if_present!(points_base, "points_base");
        update_if_present!(penalty_step_hundredths, "penalty_step_hundredths");
    }
}
