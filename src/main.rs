use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lapboard::config::ScoringRules;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with point rules; explicit flags still win.
    #[arg(global = true, long)]
    rules: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Decode(cmd::decode::DecodeArgs),
}

fn main() {
    // 1. Parse raw matches (to tell user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so `--json` output stays machine readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Score(args) => {
            // 2. Resolve rules: file first, then explicit CLI overrides
            let mut rules = args.config.rules;
            if let Some(path) = &cli.rules {
                info!("⚖️  Loading Rules from: {}", path);
                let mut file_rules = ScoringRules::load_from_file(path).unwrap_or_else(|e| {
                    error!("❌ Failed to load rules '{}': {}", path, e);
                    process::exit(1);
                });
                if let Some(sub_matches) = matches.subcommand_matches("score") {
                    file_rules.merge_from_cli(&args.config.rules, sub_matches);
                }
                rules = file_rules;
            }

            if let Err(e) = rules.validate() {
                error!("❌ {}", e);
                process::exit(1);
            }

            // 3. Execute
            if let Err(e) = cmd::score::run(args, rules) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Decode(args) => cmd::decode::run(args),
    }
}
