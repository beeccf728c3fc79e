use abacus_budget::{spending_by_category, Category};
use abacus_core::{Reduction, StatsReport, TimeSum};
use abacus_sim::Outcome;

use super::OutputFormat;

pub fn format_arrangement(problems: &[String], arranged: &str, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "problems": problems,
            "arranged": arranged,
        }))
        .unwrap_or_default(),
        OutputFormat::Text => arranged.to_string(),
    }
}

pub fn format_time_sum(sum: &TimeSum, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(sum).unwrap_or_default(),
        OutputFormat::Text => sum.to_string(),
    }
}

pub fn format_stats(report: &StatsReport, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_stats_text(report),
    }
}

/// One line per statistic: `[columns, rows, flattened]`.
fn format_stats_text(report: &StatsReport) -> String {
    report
        .entries()
        .iter()
        .map(|(name, r)| format!("{name}: {}", reduction_text(r)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reduction_text(r: &Reduction) -> String {
    format!("[{:?}, {:?}, {:?}]", r.columns, r.rows, r.flattened)
}

pub fn format_outcome(outcome: &Outcome, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(outcome).unwrap_or_default(),
        OutputFormat::Text => format!(
            "Probability: {:.3} ({} of {} experiments)",
            outcome.probability, outcome.successes, outcome.experiments
        ),
    }
}

pub fn format_ledgers(categories: &[Category], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let ledgers: Vec<_> = categories
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "name": c.name(),
                        "balance": c.balance(),
                        "spent": c.spent(),
                        "ledger": c.ledger(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "categories": ledgers,
                "spending": spending_by_category(categories),
            }))
            .unwrap_or_default()
        }
        OutputFormat::Text => categories
            .iter()
            .map(Category::to_string)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
