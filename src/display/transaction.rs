//! Transaction display formatting
//!
//! Transaction lists are rendered as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    flow_type: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| {
            let signed = if txn.is_expense() { -txn.amount } else { txn.amount };
            TransactionRow {
                id: txn.id.to_string(),
                date: settings.format_date(txn.date),
                flow_type: txn.flow_type.to_string(),
                category: truncate(&txn.category, 20),
                description: truncate(&txn.description, 30),
                amount: settings.format_money(signed),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_table_contains_signed_amounts() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let transactions = vec![
            Transaction::from_draft(
                TransactionId::new(7),
                NewTransaction::expense("Food", Money::from_cents(4550), date)
                    .with_description("Groceries"),
                Utc::now(),
            ),
            Transaction::from_draft(
                TransactionId::new(8),
                NewTransaction::income("Salary", Money::from_dollars(3000), date),
                Utc::now(),
            ),
        ];

        let output = format_transaction_table(&transactions, &Settings::default());
        assert!(output.contains("Groceries"));
        assert!(output.contains("-$45.50"));
        assert!(output.contains("$3000.00"));
        assert!(output.contains("2024-03-04"));
        assert!(output.contains("2 transaction(s)"));
    }

    #[test]
    fn test_empty() {
        let output = format_transaction_table(&[], &Settings::default());
        assert_eq!(output, "No transactions found.\n");
    }
}
