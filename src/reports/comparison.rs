//! Budget Comparison Report
//!
//! Budgeted versus actual spending per category over a range of months.

use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_bar, format_percentage, truncate};
use crate::error::FinanceResult;
use crate::models::{BudgetMonth, DateRange, Money};
use crate::storage::Storage;

use super::aggregator::{build_comparison, BudgetComparisonRow, ComparisonSummary};

/// Budget-vs-actual comparison over a date range
#[derive(Debug, Clone, Serialize)]
pub struct BudgetComparisonReport {
    pub range: DateRange,
    pub rows: Vec<BudgetComparisonRow>,
    pub summary: ComparisonSummary,
}

impl BudgetComparisonReport {
    /// Generate the comparison for `range`
    pub fn generate(storage: &Storage, range: DateRange) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let rows = build_comparison(&transactions, &categories, &budgets, range);
        let summary = ComparisonSummary::from_rows(&rows);

        tracing::debug!(%range, categories = summary.categories, "comparison generated");

        Ok(Self {
            range,
            rows,
            summary,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!(
            "Budget vs Actual: {} to {}\n",
            BudgetMonth::from_date(self.range.start).short_name(),
            BudgetMonth::from_date(self.range.end).short_name()
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets found for the selected date range.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>11} {:>11} {:>17} {:>7}  {}\n",
            "Category", "Budgeted", "Actual", "Difference", "Used", "Actual/Budgeted"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        let max = self
            .rows
            .iter()
            .map(|r| r.budgeted.max(r.actual))
            .max()
            .unwrap_or_default();

        for row in &self.rows {
            let difference = row.difference();
            let direction = if difference.is_negative() { "over" } else { "under" };
            output.push_str(&format!(
                "{:<16} {:>11} {:>11} {:>11} {:<5} {:>7}  {}\n",
                truncate(&row.category_name, 16),
                money(row.budgeted),
                money(row.actual),
                money(difference.abs()),
                direction,
                format_percentage(row.percentage_used()),
                format_bar(row.actual.as_f64(), max.as_f64(), 12)
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Total Budgeted: {}   Total Spent: {}   Categories: {}\n",
            money(self.summary.total_budgeted),
            money(self.summary.total_actual),
            self.summary.categories
        ));
        let status = if self.summary.is_over_budget() {
            "over budget"
        } else {
            self.summary.usage_level().label()
        };
        output.push_str(&format!(
            "Overall: {} used ({})\n",
            format_percentage(self.summary.percentage_used()),
            status
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBudget, NewCategory, NewTransaction};
    use chrono::NaiveDate;

    fn month(m: u32) -> BudgetMonth {
        BudgetMonth::new(2024, m).unwrap()
    }

    fn storage() -> Storage {
        let storage = Storage::in_memory();
        let food = storage.categories.create(NewCategory::expense("Food")).unwrap();
        let rent = storage.categories.create(NewCategory::expense("Rent")).unwrap();

        for (category, dollars, m) in [
            (food.id, 100, month(3)),
            (food.id, 100, month(4)),
            (rent.id, 900, month(4)),
        ] {
            storage
                .budgets
                .create(NewBudget::new(category, Money::from_dollars(dollars), m))
                .unwrap();
        }

        for (category, dollars, m, d) in [("Food", 150, 3, 8), ("Food", 90, 4, 2), ("Rent", 900, 4, 1)] {
            storage
                .transactions
                .create(NewTransaction::expense(
                    category,
                    Money::from_dollars(dollars),
                    NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
                ))
                .unwrap();
        }

        storage
    }

    #[test]
    fn test_rows_and_summary() {
        let range = DateRange::between_months(month(3), month(4));
        let report = BudgetComparisonReport::generate(&storage(), range).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category_name, "Rent");
        assert_eq!(report.rows[1].budgeted, Money::from_dollars(200));
        assert_eq!(report.rows[1].actual, Money::from_dollars(240));

        assert_eq!(report.summary.total_budgeted, Money::from_dollars(1100));
        assert_eq!(report.summary.total_actual, Money::from_dollars(1140));
        assert_eq!(report.summary.categories, 2);
    }

    #[test]
    fn test_format_terminal() {
        let range = DateRange::between_months(month(3), month(4));
        let report = BudgetComparisonReport::generate(&storage(), range).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.contains("Budget vs Actual: Mar 2024 to Apr 2024"));
        assert!(output.contains("$40.00 over"));
        assert!(output.contains("120.0%"));
        assert!(output.contains("Categories: 2"));
        assert!(output.contains("Overall: 103.6% used (over budget)"));
    }

    #[test]
    fn test_near_limit_is_not_reported_as_over() {
        let report =
            BudgetComparisonReport::generate(&storage(), DateRange::for_month(month(4))).unwrap();
        // 990 of 1000 budgeted
        assert!(!report.summary.is_over_budget());

        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("Overall: 99.0% used (warning)"));
        assert!(!output.contains("over budget"));
    }

    #[test]
    fn test_empty_range_message() {
        let report =
            BudgetComparisonReport::generate(&storage(), DateRange::for_month(month(1))).unwrap();
        assert!(report.rows.is_empty());
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No budgets found"));
    }
}
