use anyhow::Result;
use clap::Args;

use crate::output::format::format_arrangement;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ArrangeArgs {
    /// Problems such as "32 + 698" (quote each one)
    #[arg(required = true)]
    pub problems: Vec<String>,

    /// Print a fourth line with the answers
    #[arg(long, short)]
    pub answers: bool,
}

pub fn run(args: &ArrangeArgs, format: OutputFormat) -> Result<()> {
    let arranged = abacus_core::arrange(&args.problems, args.answers)?;
    println!("{}", format_arrangement(&args.problems, &arranged, format));
    Ok(())
}
