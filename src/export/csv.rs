//! CSV export
//!
//! One row per transaction: `Date,Description,Category,Type,Amount`.

use std::io::Write;

use crate::error::FinanceResult;
use crate::models::Transaction;

/// Write transactions as CSV with a header row
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Description", "Category", "Type", "Amount"])?;

    for txn in transactions {
        csv_writer.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.flow_type.as_str().to_string(),
            txn.amount.to_decimal_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId};
    use chrono::{NaiveDate, Utc};

    fn txn(id: u32, draft: NewTransaction) -> Transaction {
        Transaction::from_draft(TransactionId::new(id), draft, Utc::now())
    }

    #[test]
    fn test_csv_rows() {
        let transactions = vec![
            txn(
                1,
                NewTransaction::expense(
                    "Food",
                    Money::from_cents(1250),
                    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                )
                .with_description("Lunch, with friends"),
            ),
            txn(
                2,
                NewTransaction::income(
                    "Salary",
                    Money::from_dollars(3000),
                    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                )
                .with_description("Pay"),
            ),
        ];

        let mut out = Vec::new();
        write_csv(&transactions, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Date,Description,Category,Type,Amount");
        assert_eq!(lines[1], "2024-03-05,\"Lunch, with friends\",Food,expense,12.50");
        assert_eq!(lines[2], "2024-03-01,Pay,Salary,income,3000.00");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), "Date,Description,Category,Type,Amount");
    }
}
