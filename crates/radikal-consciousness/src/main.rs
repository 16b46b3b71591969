//! radikal — runs the consciousness ritual
//!
//! Usage:
//!   radikal [--config radikal.toml] [--seed 42] [--rounds 5]
//!
//! Narrative goes to stdout, logs to stderr (RUST_LOG=radikal=debug for more).

use clap::Parser;
use radikal_consciousness::config::RadikalConfig;
use radikal_consciousness::ritual;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "radikal", version, about = "Consciousness as failure, void and performance")]
struct Cli {
    /// Path to config file (TOML)
    #[arg(long, default_value = "radikal.toml")]
    config: PathBuf,

    /// Dump default config as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Seed the random source (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of bug triggers (overrides config)
    #[arg(long)]
    rounds: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        println!("{}", RadikalConfig::default().to_toml());
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radikal=info,radikal_consciousness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RadikalConfig::load(&cli.config);
    let rounds = cli.rounds.unwrap_or(config.ritual.rounds);
    let mut rng = match cli.seed.or(config.ritual.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ritual::run(&mut out, &mut rng, rounds)?;

    Ok(())
}
