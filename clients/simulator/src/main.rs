use std::io;
use std::path::{Path, PathBuf};

use blackjack::PayoutRatio;
use blackjack_table::{CardCounter, Game, IllegalMovePolicy, TableConfig};
use clap::{Parser, Subcommand};

mod console;

use console::ConsoleStrategy;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack-simulator", about = "Play blackjack sessions against the house")]
struct Cli {
    /// JSON table config; any flag given below overrides the file
    #[arg(long, env = "TABLE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of decks in the shoe
    #[arg(long, env = "DECKS")]
    decks: Option<usize>,

    /// Rounds to play
    #[arg(long, env = "ROUNDS")]
    rounds: Option<usize>,

    /// Blackjack payout ratio (e.g. "3:2", "6:5" or "1.5")
    #[arg(long, env = "BLACKJACK_PAYOUT")]
    blackjack_payout: Option<PayoutRatio>,

    /// Table minimum bet
    #[arg(long, env = "MIN_BET")]
    min_bet: Option<i64>,

    /// Seed for a reproducible session
    #[arg(long, env = "SEED")]
    seed: Option<u64>,

    /// What to do with an illegal move: reprompt or fatal
    #[arg(long, env = "ILLEGAL_MOVE_POLICY", value_parser = parse_policy)]
    illegal_move_policy: Option<IllegalMovePolicy>,

    /// Rejected moves before a hand is stood
    #[arg(long, env = "MAX_REPROMPTS")]
    max_reprompts: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the Hi-Lo card counter and print the final balance
    Counter {
        /// Base bet; raised with the true count
        #[arg(long, env = "BET_UNIT", default_value_t = 10)]
        unit: i64,
    },

    /// Play hands from the console
    Interactive {
        /// Bet used when the prompt is left empty
        #[arg(long, default_value_t = 10)]
        bet: i64,
    },
}

fn parse_policy(s: &str) -> Result<IllegalMovePolicy, String> {
    match s.to_lowercase().as_str() {
        "reprompt" => Ok(IllegalMovePolicy::Reprompt),
        "fatal" => Ok(IllegalMovePolicy::Fatal),
        other => Err(format!("unknown policy '{other}', expected reprompt or fatal")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxErr> {
    let config = load_config(&cli)?;
    let payout = config.blackjack_payout;
    let mut game = Game::new(config)?;

    let balance = match cli.command {
        Command::Counter { unit } => {
            let mut counter = CardCounter::new(game.config().decks, unit);
            game.play(&mut counter)?
        }
        Command::Interactive { bet } => {
            let stdin = io::stdin();
            let mut human = ConsoleStrategy::new(stdin.lock(), io::stdout(), bet, payout);
            game.play(&mut human)?
        }
    };

    println!("Final balance: {balance}");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<TableConfig, BoxErr> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => TableConfig::default(),
    };

    if let Some(decks) = cli.decks {
        config.decks = decks;
    }
    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }
    if let Some(payout) = cli.blackjack_payout {
        config.blackjack_payout = payout;
    }
    if cli.min_bet.is_some() {
        config.min_bet = cli.min_bet;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(policy) = cli.illegal_move_policy {
        config.illegal_move_policy = policy;
    }
    if let Some(max) = cli.max_reprompts {
        config.max_reprompts = max;
    }

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<TableConfig, BoxErr> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    log::info!("Loaded table config from {}", path.display());
    Ok(config)
}
