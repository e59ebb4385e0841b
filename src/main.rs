use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_minimax::config::{AgentConfig, AgentKind, AppConfig};
use connect_four_minimax::driver::MatchDriver;
use connect_four_minimax::game::{GameOutcome, GameState, Player};

/// Pit two Connect Four agents against each other.
#[derive(Parser)]
#[command(
    name = "connect-four-minimax",
    about = "Pit two Connect Four search agents against each other"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Red agent: minimax, alpha-beta, or random
    #[arg(long)]
    red: Option<String>,

    /// Search depth for the red agent
    #[arg(long)]
    red_depth: Option<usize>,

    /// Yellow agent: minimax, alpha-beta, or random
    #[arg(long)]
    yellow: Option<String>,

    /// Search depth for the yellow agent
    #[arg(long)]
    yellow_depth: Option<usize>,

    /// Which color moves first: red or yellow
    #[arg(long)]
    starting_player: Option<String>,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // CLI flags override the config file
    if let Some(kind) = &cli.red {
        config.red.agent = parse_agent_kind(kind)?;
    }
    if let Some(depth) = cli.red_depth {
        config.red.depth = depth;
    }
    if let Some(kind) = &cli.yellow {
        config.yellow.agent = parse_agent_kind(kind)?;
    }
    if let Some(depth) = cli.yellow_depth {
        config.yellow.depth = depth;
    }
    if let Some(player) = &cli.starting_player {
        config.game.starting_player = parse_player(player)?;
    }
    config.validate()?;

    println!(
        "Red: {}  vs  Yellow: {}",
        describe(&config.red),
        describe(&config.yellow)
    );

    let mut driver = MatchDriver::new(config.red.build(), config.yellow.build());
    let state = GameState::with_starting_player(config.game.starting_player);

    let quiet = cli.quiet;
    let record = driver.run(state, |_, state| {
        if !quiet {
            println!("{}\n", state.board());
        }
    })?;

    match record.outcome {
        GameOutcome::Winner(player) => println!("{} wins!", player.name()),
        GameOutcome::Draw => println!("Tie game!"),
    }

    Ok(())
}

fn parse_agent_kind(s: &str) -> Result<AgentKind> {
    Ok(match s {
        "minimax" => AgentKind::Minimax,
        "alpha-beta" => AgentKind::AlphaBeta,
        "random" => AgentKind::Random,
        other => bail!(
            "unknown agent '{}' (expected 'minimax', 'alpha-beta', or 'random')",
            other
        ),
    })
}

fn parse_player(s: &str) -> Result<Player> {
    Ok(match s {
        "red" => Player::Red,
        "yellow" => Player::Yellow,
        other => bail!("unknown player '{}' (expected 'red' or 'yellow')", other),
    })
}

fn describe(config: &AgentConfig) -> String {
    match config.agent {
        AgentKind::Minimax => format!("Minimax (depth {})", config.depth),
        AgentKind::AlphaBeta => format!("AlphaBeta (depth {})", config.depth),
        AgentKind::Random => "Random".to_string(),
    }
}
