//! Terminal frontend for the Dreadmoor horror engine.

mod commands;
mod input;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use dm_core::Mode;
use dm_engine::EngineConfig;
use tracing_subscriber::EnvFilter;

use commands::play::{DEFAULT_TURN_MS, PlayOptions};

#[derive(Parser)]
#[command(
    name = "dread",
    about = "Dreadmoor: creep through a haunted story or a haunted house",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the branching story
    Story(PlayArgs),

    /// Explore the haunted house map
    Grid(PlayArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Load a scenario from a JSON file instead of the bundled one
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Print one JSON object per frame instead of text
    #[arg(long)]
    json: bool,

    /// Milliseconds to reveal each character of story text
    #[arg(long, default_value = "50")]
    reveal_ms: u64,

    /// Milliseconds a jump scare stays up
    #[arg(long, default_value = "1500")]
    scare_ms: u64,

    /// Let time pass only on `wait`
    #[arg(long)]
    manual_clock: bool,

    /// Milliseconds that pass after each command when the clock runs itself
    #[arg(long, default_value_t = DEFAULT_TURN_MS)]
    turn_ms: u64,
}

impl PlayArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_reveal_ms_per_char(self.reveal_ms)
            .with_scare_duration_ms(self.scare_ms)
    }

    fn options(&self) -> PlayOptions {
        PlayOptions {
            json: self.json,
            manual_clock: self.manual_clock,
            turn_ms: self.turn_ms,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let (mode, args) = match &cli.command {
        Commands::Story(args) => (Mode::Story, args),
        Commands::Grid(args) => (Mode::Grid, args),
    };
    let result = commands::play::run(mode, args.scenario.as_deref(), args.config(), args.options());

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
