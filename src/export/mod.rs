//! Transaction export
//!
//! Transactions are filtered, sorted newest first and written in one of
//! three formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: the full records with export metadata
//! - Text: a printable "Transaction Report" with totals

pub mod csv;
pub mod json;
pub mod text;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{FlowType, Transaction};
use crate::storage::Storage;

pub use self::csv::write_csv;
pub use self::json::{write_json, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use self::text::write_text;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    /// Parse a format name (case-insensitive)
    pub fn parse(s: &str) -> FinanceResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(FinanceError::Validation(format!(
                "Unsupported export format: {}",
                other
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// File name used when no output path is given, e.g. `transactions_2024-03-09.csv`
    pub fn default_file_name(&self, today: NaiveDate) -> String {
        format!("transactions_{}.{}", today.format("%Y-%m-%d"), self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Which transactions to export; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub flow_type: Option<FlowType>,
    /// Exact category name
    pub category: Option<String>,
    /// Inclusive lower bound
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.flow_type.is_some_and(|t| t != txn.flow_type) {
            return false;
        }
        if self.category.as_ref().is_some_and(|c| *c != txn.category) {
            return false;
        }
        if self.start.is_some_and(|start| txn.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| txn.date > end) {
            return false;
        }
        true
    }

    /// Matching transactions, newest date first
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut selected: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected
    }
}

/// Export filtered transactions from storage; returns how many were written
pub fn export_transactions<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    filter: &TransactionFilter,
    writer: &mut W,
) -> FinanceResult<usize> {
    let transactions = filter.apply(&storage.transactions.get_all()?);

    match format {
        ExportFormat::Csv => write_csv(&transactions, &mut *writer)?,
        ExportFormat::Json => write_json(&transactions, &mut *writer, true)?,
        ExportFormat::Text => write_text(
            &transactions,
            chrono::Local::now().date_naive(),
            &mut *writer,
        )?,
    }

    tracing::info!(%format, count = transactions.len(), "transactions exported");
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn storage() -> Storage {
        let storage = Storage::in_memory();
        for draft in [
            NewTransaction::expense("Food", Money::from_dollars(20), date(3, 2)),
            NewTransaction::income("Salary", Money::from_dollars(3000), date(3, 1)),
            NewTransaction::expense("Food", Money::from_dollars(35), date(3, 20)),
            NewTransaction::expense("Rent", Money::from_dollars(900), date(2, 1)),
        ] {
            storage.transactions.create(draft).unwrap();
        }
        storage
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(ExportFormat::parse("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);

        let err = ExportFormat::parse("pdf").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Unsupported export format"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            ExportFormat::Csv.default_file_name(date(3, 9)),
            "transactions_2024-03-09.csv"
        );
    }

    #[test]
    fn test_filter_sorts_newest_first() {
        let transactions = storage().transactions.get_all().unwrap();
        let all = TransactionFilter::default().apply(&transactions);
        let dates: Vec<_> = all.iter().map(|t| t.date).collect();
        assert_eq!(dates, [date(3, 20), date(3, 2), date(3, 1), date(2, 1)]);
    }

    #[test]
    fn test_filter_fields_combine() {
        let transactions = storage().transactions.get_all().unwrap();
        let filter = TransactionFilter {
            flow_type: Some(FlowType::Expense),
            category: Some("Food".into()),
            start: Some(date(3, 1)),
            end: Some(date(3, 10)),
        };
        let selected = filter.apply(&transactions);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].amount, Money::from_dollars(20));
    }

    #[test]
    fn test_export_counts_written_rows() {
        let storage = storage();
        let filter = TransactionFilter {
            flow_type: Some(FlowType::Expense),
            ..Default::default()
        };
        let mut out = Vec::new();
        let count = export_transactions(&storage, ExportFormat::Csv, &filter, &mut out).unwrap();

        assert_eq!(count, 3);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
