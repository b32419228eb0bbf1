//! Plain-text transaction report
//!
//! A printable report: title, generation date, a table of transactions and
//! the income/expense/net totals.

use std::io::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::FinanceResult;
use crate::models::{Money, Transaction};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    flow_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Transaction> for ReportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%m/%d/%Y").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            flow_type: txn.flow_type.to_string(),
            amount: txn.amount.to_string(),
        }
    }
}

/// Render the report as a string
pub fn render_text(transactions: &[Transaction], generated_on: NaiveDate) -> String {
    let total_income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let mut output = String::new();
    output.push_str("Transaction Report\n");
    output.push_str(&format!(
        "Generated on: {}\n\n",
        generated_on.format("%B %d, %Y")
    ));

    let rows: Vec<ReportRow> = transactions.iter().map(ReportRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::ascii());
    output.push_str(&table.to_string());
    output.push_str("\n\n");

    output.push_str(&format!("Total Income: {}\n", total_income));
    output.push_str(&format!("Total Expenses: {}\n", total_expenses));
    output.push_str(&format!("Net Amount: {}\n", total_income - total_expenses));

    output
}

/// Write the report
pub fn write_text<W: Write>(
    transactions: &[Transaction],
    generated_on: NaiveDate,
    writer: &mut W,
) -> FinanceResult<()> {
    writer.write_all(render_text(transactions, generated_on).as_bytes())?;
    Ok(())
}
