use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::BudgetError;
use crate::ledger::Category;

const CSV_HEADER: [&str; 3] = ["Date", "Amount", "Description"];

#[derive(Serialize)]
struct JsonRow<'a> {
    date: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    description: &'a str,
}

/// Write `Date,Amount,Description` rows, one per transaction.
pub fn write_csv<W: Write>(category: &Category, writer: W) -> Result<(), BudgetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for txn in category.ledger() {
        wtr.write_record([
            txn.timestamp().format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            txn.amount().to_string(),
            txn.description().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the ledger as a pretty-printed JSON array.
pub fn write_json<W: Write>(category: &Category, writer: W) -> Result<(), BudgetError> {
    let rows: Vec<JsonRow<'_>> = category
        .ledger()
        .iter()
        .map(|txn| JsonRow {
            date: txn.timestamp().format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            amount: txn.amount(),
            description: txn.description(),
        })
        .collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

impl Category {
    pub fn export_csv(&self, path: &Path) -> Result<(), BudgetError> {
        let file = File::create(path)?;
        write_csv(self, BufWriter::new(file))?;
        tracing::info!(category = %self.name(), path = %path.display(), "exported CSV");
        Ok(())
    }

    pub fn export_json(&self, path: &Path) -> Result<(), BudgetError> {
        let mut out = BufWriter::new(File::create(path)?);
        write_json(self, &mut out)?;
        out.flush()?;
        tracing::info!(category = %self.name(), path = %path.display(), "exported JSON");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Category {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Category::from_transactions(
            "Food",
            vec![
                Transaction::at(dec!(500), "Paycheck", at),
                Transaction::at(dec!(-12.5), "Lunch, with friends", at),
            ],
        )
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Amount,Description");
        assert_eq!(lines[1], "2024-03-01 09:30:00.000000,500,Paycheck");
        assert_eq!(
            lines[2],
            "2024-03-01 09:30:00.000000,-12.5,\"Lunch, with friends\""
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_json(&sample(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["amount"], 500.0);
        assert_eq!(rows[1]["amount"], -12.5);
        assert_eq!(rows[1]["description"], "Lunch, with friends");
        assert!(rows[0]["date"]
            .as_str()
            .unwrap()
            .starts_with("2024-03-01T09:30:00"));
        // Two-space indentation.
        assert!(String::from_utf8(buf).unwrap().contains("\n  {"));
    }

    #[test]
    fn test_empty_ledger_json() {
        let mut buf = Vec::new();
        write_json(&Category::new("Empty"), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }

    #[test]
    fn test_export_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("food.csv");
        let json_path = dir.path().join("food.json");
        let food = sample();

        food.export_csv(&csv_path).unwrap();
        food.export_json(&json_path).unwrap();

        let csv_text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv_text.starts_with("Date,Amount,Description\n"));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("food.csv");
        assert!(matches!(sample().export_csv(&path), Err(BudgetError::Io(_))));
    }
}
