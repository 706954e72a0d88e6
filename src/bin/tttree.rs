//! tttree CLI - Exhaustive minimax tic-tac-toe toolkit
//!
//! This CLI provides a unified interface for:
//! - Asking the decision-tree AI for a move on any board
//! - Playing games against a second AI or a seeded random player
//! - Building, summarizing and exporting full decision trees

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};
use tttree::{
    app::load_config,
    cli::commands::{decide, play, tree},
};

/// Filter used until the configuration names its own level
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "tttree")]
#[command(version, about = "Exhaustive minimax decision trees for tic-tac-toe", long_about = None)]
struct Cli {
    /// Config file (defaults to $TTTREE_CONFIG, then ./tttree.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the AI's move for a board
    Decide(decide::DecideArgs),

    /// Play games against the decision-tree AI
    Play(play::PlayArgs),

    /// Build and inspect the decision tree for a board
    Tree(tree::TreeArgs),
}

/// Install the subscriber before anything logs.
///
/// The filter starts at `level` and can be swapped once the configuration
/// is known; `RUST_LOG` always wins.
fn init_tracing(level: &str) -> reload::Handle<EnvFilter, Registry> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let startup_level = cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    let filter = init_tracing(startup_level);

    let mut config = load_config(cli.config.as_deref())?;
    match cli.log_level {
        Some(level) => config = config.with_log_level(level),
        None if std::env::var_os("RUST_LOG").is_none() => {
            filter.reload(EnvFilter::new(&config.log_level))?;
        }
        None => {}
    }
    info!(log_level = %config.log_level, "Tracing initialized");

    match cli.command {
        Commands::Decide(args) => decide::execute(args),
        Commands::Play(args) => play::execute(args, &config),
        Commands::Tree(args) => tree::execute(args, &config),
    }
}
