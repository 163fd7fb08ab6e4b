mod config;
mod session;

use clap::Parser;
use tictactoe_engine::{log, logger, BotSettings, MinimaxBot};

use config::Config;

#[derive(Parser)]
#[command(
    name = "tictactoe_cli",
    about = "Console tic-tac-toe driven by a minimax bot"
)]
struct Args {
    /// Search depth in plies, 0 to 8 (8 searches to the end of the game)
    #[arg(long)]
    depth: Option<usize>,

    /// Visit every branch instead of cutting off refuted ones
    #[arg(long)]
    no_pruning: bool,

    /// Play X yourself instead of watching two bots
    #[arg(long)]
    human: bool,

    /// YAML settings file; explicit flags take precedence
    #[arg(long)]
    config: Option<String>,

    /// Print the score of every candidate move before each bot turn
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(depth) = args.depth {
        config.depth_limit = depth;
    }
    if args.no_pruning {
        config.pruning_enabled = false;
    }

    let settings = BotSettings {
        pruning_enabled: config.pruning_enabled,
        depth_limit: config.depth_limit,
    };
    settings.validate()?;

    let bot = MinimaxBot::with_settings(settings);
    log!(
        "Depth limit {}, alpha-beta pruning {}",
        settings.depth_limit,
        if settings.pruning_enabled { "on" } else { "off" }
    );

    if args.human {
        session::run_human_match(&bot)?;
    } else {
        session::run_bot_match(&bot)?;
    }

    Ok(())
}
