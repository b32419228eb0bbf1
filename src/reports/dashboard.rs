//! Dashboard Report
//!
//! Month-at-a-glance figures: income, expenses, net, the month's total budget
//! and the most recent transactions.

use serde::Serialize;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::{BudgetMonth, DateRange, Money, Transaction};
use crate::storage::Storage;

use super::aggregator::compute_budget_totals;

/// Dashboard summary for one month
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub month: BudgetMonth,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_income: Money,
    /// Net income as a percentage of income (0 without income)
    pub savings_rate: f64,
    /// Sum of the month's budgets
    pub total_budget: Money,
    /// Newest transactions first, across all months
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardReport {
    /// Generate the dashboard for `month`
    pub fn generate(storage: &Storage, month: BudgetMonth, recent: usize) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;
        let range = DateRange::for_month(month);

        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        for txn in transactions.iter().filter(|t| range.contains(t.date)) {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expenses += txn.amount;
            }
        }

        let net_income = total_income - total_expenses;
        let total_budget: Money = compute_budget_totals(&budgets, range).values().sum();

        let mut recent_transactions = transactions;
        recent_transactions.sort_by(|a, b| b.date.cmp(&a.date));
        recent_transactions.truncate(recent);

        tracing::debug!(%month, %total_income, %total_expenses, "dashboard generated");

        Ok(Self {
            month,
            total_income,
            total_expenses,
            net_income,
            savings_rate: net_income.percent_of(total_income),
            total_budget,
            recent_transactions,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.month.long_name()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("{:<20} {:>15}\n", "Total Income:", money(self.total_income)));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Total Expenses:",
            money(self.total_expenses)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}  ({:.1}% of income)\n",
            "Net Income:",
            money(self.net_income),
            self.savings_rate
        ));
        output.push_str(&format!("{:<20} {:>15}\n", "Total Budget:", money(self.total_budget)));

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.recent_transactions.is_empty() {
            output.push_str("No transactions yet.\n");
        }

        for txn in &self.recent_transactions {
            let signed = if txn.is_expense() { -txn.amount } else { txn.amount };
            output.push_str(&format!(
                "{:<12} {:<22} {:<14} {:>10}\n",
                settings.format_date(txn.date),
                crate::display::truncate(&txn.description, 22),
                crate::display::truncate(&txn.category, 14),
                money(signed)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Budget, BudgetId, Category, CategoryId, NewBudget, NewCategory, NewTransaction,
        TransactionId,
    };
    use crate::storage::Dataset;
    use chrono::{NaiveDate, Utc};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn march() -> BudgetMonth {
        BudgetMonth::new(2024, 3).unwrap()
    }

    fn storage() -> Storage {
        let drafts = vec![
            NewTransaction::income("Salary", Money::from_dollars(4000), date(3, 1)),
            NewTransaction::expense("Food", Money::from_dollars(250), date(3, 5))
                .with_description("Groceries"),
            NewTransaction::expense("Rent", Money::from_dollars(1500), date(3, 2)),
            NewTransaction::expense("Food", Money::from_dollars(80), date(2, 27)),
            NewTransaction::income("Salary", Money::from_dollars(4000), date(4, 1)),
        ];
        let transactions = drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| Transaction::from_draft(TransactionId::new(i as u32 + 1), d, Utc::now()))
            .collect();

        let food = Category::from_draft(CategoryId::new(1), NewCategory::expense("Food"));
        let budgets = vec![
            Budget::from_draft(
                BudgetId::new(1),
                NewBudget::new(food.id, Money::from_dollars(400), march()),
            ),
            Budget::from_draft(
                BudgetId::new(2),
                NewBudget::new(CategoryId::new(2), Money::from_dollars(1500), march()),
            ),
            Budget::from_draft(
                BudgetId::new(3),
                NewBudget::new(food.id, Money::from_dollars(999), march().prev()),
            ),
        ];

        Storage::from_dataset(Dataset {
            transactions,
            categories: vec![food],
            budgets,
        })
        .unwrap()
    }

    #[test]
    fn test_month_figures() {
        let report = DashboardReport::generate(&storage(), march(), 5).unwrap();

        assert_eq!(report.total_income, Money::from_dollars(4000));
        assert_eq!(report.total_expenses, Money::from_dollars(1750));
        assert_eq!(report.net_income, Money::from_dollars(2250));
        assert!((report.savings_rate - 56.25).abs() < 1e-9);
        assert_eq!(report.total_budget, Money::from_dollars(1900));
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let report = DashboardReport::generate(&storage(), march(), 3).unwrap();
        let dates: Vec<_> = report.recent_transactions.iter().map(|t| t.date).collect();
        assert_eq!(dates, [date(4, 1), date(3, 5), date(3, 2)]);
    }

    #[test]
    fn test_no_income_gives_zero_rate() {
        let storage = Storage::in_memory();
        storage
            .transactions
            .create(NewTransaction::expense("Food", Money::from_dollars(10), date(3, 3)))
            .unwrap();

        let report = DashboardReport::generate(&storage, march(), 5).unwrap();
        assert_eq!(report.net_income, Money::from_dollars(-10));
        assert_eq!(report.savings_rate, 0.0);
    }

    #[test]
    fn test_format_terminal() {
        let report = DashboardReport::generate(&storage(), march(), 5).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.contains("Dashboard: March 2024"));
        assert!(output.contains("$2250.00"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("-$250.00"));
    }
}
