use std::path::PathBuf;

use abacus_core::AbacusConfig;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "abacus",
    version,
    about = "Arithmetic layout, clock sums, shapes, 3x3 stats, budgets and hat draws"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Config file (defaults to ./abacus.toml when present)
    #[arg(long, global = true, env = "ABACUS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AbacusConfig> {
    AbacusConfig::load(cli.config.as_deref()).context("Failed to load configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        commands::Commands::Arrange(args) => commands::arrange::run(args, cli.format),
        commands::Commands::Time(args) => commands::time::run(args, cli.format),
        commands::Commands::Stats(args) => commands::stats::run(args, cli.format),
        commands::Commands::Shapes(args) => commands::shapes::run(args, cli.format),
        commands::Commands::Probability(args) => {
            commands::probability::run(args, &load_config(&cli)?, cli.format)
        }
        commands::Commands::Budget(args) => {
            commands::budget::run(args, &load_config(&cli)?, cli.format)
        }
        commands::Commands::Version => commands::version::run(),
    }
}
