use anyhow::Result;
use clap::Args;

use crate::output::format::format_stats;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct StatsArgs {
    /// Nine numbers, read row by row into a 3x3 grid
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

pub fn run(args: &StatsArgs, format: OutputFormat) -> Result<()> {
    let report = abacus_core::calculate(&args.values)?;
    println!("{}", format_stats(&report, format));
    Ok(())
}
