use abacus_core::AbacusConfig;
use abacus_sim::{parse_counts, Experiment, Hat};
use anyhow::{Context, Result};
use clap::Args;

use crate::output::format::format_outcome;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ProbabilityArgs {
    /// Hat contents as color=count pairs, e.g. "blue=3,red=2,green=6"
    #[arg(long)]
    pub hat: String,

    /// Colors that must all appear among the drawn balls, e.g. "blue=2,green=1"
    #[arg(long)]
    pub expect: String,

    /// Balls drawn per experiment
    #[arg(long)]
    pub draw: usize,

    /// Number of experiments (defaults to the configured count)
    #[arg(long, short = 'n')]
    pub experiments: Option<u32>,

    /// Seed for a reproducible estimate
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &ProbabilityArgs, config: &AbacusConfig, format: OutputFormat) -> Result<()> {
    let hat: Hat = args
        .hat
        .parse()
        .with_context(|| format!("Invalid --hat '{}'", args.hat))?;
    let expected =
        parse_counts(&args.expect).with_context(|| format!("Invalid --expect '{}'", args.expect))?;

    let outcome = Experiment::new(expected, args.draw)
        .with_experiments(args.experiments.unwrap_or(config.probability.experiments))
        .with_seed(args.seed.or(config.probability.seed))
        .run(&hat)?;

    println!("{}", format_outcome(&outcome, format));
    Ok(())
}
