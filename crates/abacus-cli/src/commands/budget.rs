use std::path::{Path, PathBuf};

use abacus_budget::Book;
use abacus_core::AbacusConfig;
use anyhow::{Context, Result};
use clap::Args;

use crate::output::format::format_ledgers;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct BudgetArgs {
    /// JSON budget script; the built-in demo runs when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Write <category>.csv and <category>.json for every category here
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Render spending_report.png and balance_report.png
    #[arg(long)]
    pub charts: bool,
}

pub fn run(args: &BudgetArgs, config: &AbacusConfig, format: OutputFormat) -> Result<()> {
    let book = match &args.script {
        Some(path) => Book::load_script(path)
            .with_context(|| format!("Failed to run budget script {}", path.display()))?,
        None => Book::demo().context("Failed to build the demo budget")?,
    };

    println!("{}", format_ledgers(book.categories(), format));

    if let Some(dir) = &args.export_dir {
        export_all(&book, dir)?;
    }

    if args.charts {
        let dir = args
            .export_dir
            .as_deref()
            .unwrap_or(config.budget.export_dir.as_path());
        render_charts(&book, dir, config)?;
    }

    Ok(())
}

fn export_all(book: &Book, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for category in book.categories() {
        let stem = file_stem(category.name());
        category
            .export_csv(&dir.join(format!("{stem}.csv")))
            .with_context(|| format!("Failed to export {} as CSV", category.name()))?;
        category
            .export_json(&dir.join(format!("{stem}.json")))
            .with_context(|| format!("Failed to export {} as JSON", category.name()))?;
    }
    eprintln!(
        "Exported {} categories to {}",
        book.categories().len(),
        dir.display()
    );
    Ok(())
}

/// Lowercase name with anything outside `[a-z0-9_-]` replaced by `_`.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(feature = "charts")]
fn render_charts(book: &Book, dir: &Path, config: &AbacusConfig) -> Result<()> {
    use abacus_budget::chart::{plot_balance_over_time, plot_spending};

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let charts = &config.charts;
    let spending = dir.join("spending_report.png");
    let balance = dir.join("balance_report.png");
    plot_spending(
        book.categories(),
        &spending,
        (charts.spending_width, charts.spending_height),
    )
    .context("Failed to render spending chart")?;
    plot_balance_over_time(
        book.categories(),
        &balance,
        (charts.balance_width, charts.balance_height),
    )
    .context("Failed to render balance chart")?;
    eprintln!(
        "Charts saved as '{}' and '{}'",
        spending.display(),
        balance.display()
    );
    Ok(())
}

#[cfg(not(feature = "charts"))]
fn render_charts(_book: &Book, _dir: &Path, _config: &AbacusConfig) -> Result<()> {
    anyhow::bail!("abacus was built without chart support; rebuild with `--features charts`")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Food"), "food");
        assert_eq!(file_stem("Eating Out/Bars"), "eating_out_bars");
        assert_eq!(file_stem("car-2"), "car-2");
    }
}
