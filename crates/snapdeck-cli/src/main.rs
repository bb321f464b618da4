use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "A terminal deck viewer with scroll-snap navigation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to open (shorthand for `run <DECK>`)
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run {
        /// Deck file (TOML); falls back to the configured default,
        /// then to the built-in demo deck
        deck: Option<PathBuf>,
    },
    /// Validate a deck file and list its sections
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
    }
}
