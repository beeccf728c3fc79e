use anyhow::Result;
use clap::Args;

use crate::output::format::format_time_sum;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct TimeArgs {
    /// Start time, e.g. "3:00 PM"
    pub start: String,

    /// Duration as hours:minutes, e.g. "3:10" or "205:12"
    pub duration: String,

    /// Starting day of the week (any case)
    #[arg(long, short)]
    pub day: Option<String>,
}

pub fn run(args: &TimeArgs, format: OutputFormat) -> Result<()> {
    let sum = abacus_core::clock::compute(&args.start, &args.duration, args.day.as_deref())?;
    println!("{}", format_time_sum(&sum, format));
    Ok(())
}
