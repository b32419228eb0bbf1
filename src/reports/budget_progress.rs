//! Budget Progress Report
//!
//! How each of a month's budgets is tracking: spent, remaining and usage
//! level per budget, month totals, and the expense categories that have no
//! budget yet.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_percentage, format_progress, usage_marker};
use crate::error::FinanceResult;
use crate::models::{BudgetId, BudgetMonth, Category, CategoryId, DateRange, Money};
use crate::storage::Storage;

use super::aggregator::{compute_actual_spending, UsageLevel};

/// Progress of a single budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgressLine {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub category_name: String,
    pub budget: Money,
    /// The category's spending for the whole month
    pub spent: Money,
}

impl BudgetProgressLine {
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn percentage(&self) -> f64 {
        self.spent.percent_of(self.budget)
    }

    pub fn usage_level(&self) -> UsageLevel {
        UsageLevel::from_percentage(self.percentage())
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

/// Budget progress for one month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgressReport {
    pub month: BudgetMonth,
    /// One line per budget whose category exists, in store order
    pub lines: Vec<BudgetProgressLine>,
    pub total_budget: Money,
    /// Spending across the budgeted categories, each counted once
    pub total_spent: Money,
    /// Expense categories without a budget this month
    pub unbudgeted: Vec<Category>,
    /// Number of distinct expense categories with a budget this month
    pub budgeted_categories: usize,
    pub expense_categories: usize,
}

impl BudgetProgressReport {
    /// Generate the progress report for `month`
    pub fn generate(storage: &Storage, month: BudgetMonth) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let range = DateRange::for_month(month);
        let spending = compute_actual_spending(&transactions, &categories, range);

        let mut lines = Vec::new();
        for budget in budgets.iter().filter(|b| b.month == month) {
            let Some(category) = categories.iter().find(|c| c.id == budget.category_id) else {
                tracing::warn!(
                    budget_id = %budget.id,
                    category_id = %budget.category_id,
                    "budget refers to an unknown category"
                );
                continue;
            };

            lines.push(BudgetProgressLine {
                budget_id: budget.id,
                category_id: category.id,
                category_name: category.name.clone(),
                budget: budget.amount,
                spent: spending.get(&category.id).copied().unwrap_or_default(),
            });
        }

        let budgeted: HashSet<CategoryId> = lines.iter().map(|l| l.category_id).collect();

        let total_budget: Money = lines.iter().map(|l| l.budget).sum();
        let total_spent: Money = budgeted
            .iter()
            .filter_map(|id| spending.get(id))
            .sum();

        let expense: Vec<&Category> = categories.iter().filter(|c| c.is_expense()).collect();
        let unbudgeted: Vec<Category> = expense
            .iter()
            .filter(|c| !budgeted.contains(&c.id))
            .map(|c| (*c).clone())
            .collect();

        Ok(Self {
            month,
            total_budget,
            total_spent,
            budgeted_categories: expense.len() - unbudgeted.len(),
            expense_categories: expense.len(),
            unbudgeted,
            lines,
        })
    }

    pub fn total_remaining(&self) -> Money {
        self.total_budget - self.total_spent
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!("Budgets: {}\n", self.month.long_name()));
        output.push_str(&"=".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}   Total Spent: {}   Remaining: {}\n",
            money(self.total_budget),
            money(self.total_spent),
            money(self.total_remaining())
        ));
        output.push_str(&format!(
            "{} of {} categories budgeted\n\n",
            self.budgeted_categories, self.expense_categories
        ));

        if self.lines.is_empty() {
            output.push_str("No budgets set for this month.\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>11} {:>11} {:>11} {:>7}  {:<12} {}\n",
                "Category", "Budget", "Spent", "Remaining", "Used", "", ""
            ));
            output.push_str(&"-".repeat(78));
            output.push('\n');

            for line in &self.lines {
                output.push_str(&format!(
                    "{:<20} {:>11} {:>11} {:>11} {:>7}  {:<12} {}\n",
                    crate::display::truncate(&line.category_name, 20),
                    money(line.budget),
                    money(line.spent),
                    money(line.remaining()),
                    format_percentage(line.percentage()),
                    format_progress(line.percentage(), 12),
                    usage_marker(line.usage_level())
                ));
            }
        }

        if !self.unbudgeted.is_empty() {
            output.push_str("\nUnbudgeted categories:\n");
            for category in &self.unbudgeted {
                output.push_str(&format!("  {}\n", category.name));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBudget, NewCategory, NewTransaction};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn march() -> BudgetMonth {
        BudgetMonth::new(2024, 3).unwrap()
    }

    fn storage() -> Storage {
        let storage = Storage::in_memory();
        let food = storage.categories.create(NewCategory::expense("Food")).unwrap();
        let rent = storage.categories.create(NewCategory::expense("Rent")).unwrap();
        storage.categories.create(NewCategory::expense("Travel")).unwrap();
        storage.categories.create(NewCategory::income("Salary")).unwrap();

        for (category, dollars, month) in [
            (food.id, 200, march()),
            (rent.id, 1000, march()),
            (food.id, 500, march().prev()),
            (CategoryId::new(77), 300, march()),
        ] {
            storage
                .budgets
                .create(NewBudget::new(category, Money::from_dollars(dollars), month))
                .unwrap();
        }

        for (category, dollars, on) in [
            ("Food", 150, date(3, 4)),
            ("Food", 100, date(3, 19)),
            ("Rent", 500, date(3, 1)),
            ("Food", 60, date(2, 10)),
        ] {
            storage
                .transactions
                .create(NewTransaction::expense(category, Money::from_dollars(dollars), on))
                .unwrap();
        }

        storage
    }

    #[test]
    fn test_lines_and_levels() {
        let report = BudgetProgressReport::generate(&storage(), march()).unwrap();
        assert_eq!(report.lines.len(), 2);

        let food = &report.lines[0];
        assert_eq!(food.category_name, "Food");
        assert_eq!(food.spent, Money::from_dollars(250));
        assert_eq!(food.remaining(), Money::from_dollars(-50));
        assert_eq!(food.percentage(), 125.0);
        assert_eq!(food.usage_level(), UsageLevel::Critical);
        assert!(food.is_over_budget());

        let rent = &report.lines[1];
        assert_eq!(rent.percentage(), 50.0);
        assert_eq!(rent.usage_level(), UsageLevel::OnTrack);
    }

    #[test]
    fn test_totals_and_unbudgeted() {
        let report = BudgetProgressReport::generate(&storage(), march()).unwrap();

        assert_eq!(report.total_budget, Money::from_dollars(1200));
        assert_eq!(report.total_spent, Money::from_dollars(750));
        assert_eq!(report.total_remaining(), Money::from_dollars(450));

        let names: Vec<_> = report.unbudgeted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Travel"]);
        assert_eq!(report.budgeted_categories, 2);
        assert_eq!(report.expense_categories, 3);
    }

    #[test]
    fn test_duplicate_budgets_do_not_double_count_spending() {
        let storage = storage();
        storage
            .budgets
            .create(NewBudget::new(CategoryId::new(1), Money::from_dollars(100), march()))
            .unwrap();

        let report = BudgetProgressReport::generate(&storage, march()).unwrap();
        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.total_budget, Money::from_dollars(1300));
        assert_eq!(report.total_spent, Money::from_dollars(750));
        assert_eq!(report.budgeted_categories, 2);
    }

    #[test]
    fn test_format_terminal() {
        let report = BudgetProgressReport::generate(&storage(), march()).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.contains("Budgets: March 2024"));
        assert!(output.contains("2 of 3 categories budgeted"));
        assert!(output.contains("125.0%"));
        assert!(output.contains("Unbudgeted categories:"));
        assert!(output.contains("Travel"));
    }

    #[test]
    fn test_empty_month() {
        let report =
            BudgetProgressReport::generate(&storage(), BudgetMonth::new(2023, 1).unwrap())
                .unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.total_budget, Money::zero());
        assert_eq!(report.unbudgeted.len(), 3);
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No budgets set for this month."));
    }
}
