use crate::reports;
use clap::Args;
use lapboard::config::{Config, ScoringRules};
use lapboard::error::{LapboardError, LbResult};
use lapboard::race::RaceState;
use lapboard::records::RecordBook;
use lapboard::scorer::{Scorer, Standings};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Race documents (.json or .csv)
    #[arg(required = true)]
    pub races: Vec<PathBuf>,

    /// JSON array of {racer, map, time} record submissions
    #[arg(short, long)]
    pub records: Option<PathBuf>,
}

pub fn run(args: &ScoreArgs, rules: ScoringRules) -> LbResult<()> {
    let scorer = Scorer::new(rules);

    let records = match &args.records {
        Some(path) => {
            info!("📚 Loading Records: {}", path.display());
            Some(RecordBook::load_from_file(path)?)
        }
        None => None,
    };

    // Races are independent; collect() keeps input order.
    let results: Vec<(&PathBuf, LbResult<(RaceState, Standings)>)> = args
        .races
        .par_iter()
        .map(|path| {
            let outcome = RaceState::load_from_file(path).map(|race| {
                let standings = scorer.score(&race);
                (race, standings)
            });
            (path, outcome)
        })
        .collect();

    let mut failures = 0;
    for (path, outcome) in results {
        let (race, standings) = match outcome {
            Ok(scored) => scored,
            Err(e) => {
                error!("❌ {}: {}", path.display(), e);
                failures += 1;
                continue;
            }
        };

        for issue in race.alignment_issues() {
            warn!(
                "⚠️  {}: map #{} '{}' has {} times for {} racers",
                path.display(),
                issue.map_index + 1,
                issue.map_name,
                issue.times_len,
                issue.racers_len
            );
        }

        if args.config.report.json {
            println!("{}", serde_json::to_string(&standings)?);
        } else {
            reports::print_race(
                &path.display().to_string(),
                &race,
                &standings,
                records.as_ref(),
                &args.config.report,
            );
        }
    }

    if failures > 0 {
        return Err(LapboardError::Validation(format!(
            "{} of {} race files could not be scored",
            failures,
            args.races.len()
        )));
    }
    Ok(())
}
