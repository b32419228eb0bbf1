//! Spending charts
//!
//! The category breakdown (where a month's money went) and the monthly
//! income/expense trend.

use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_bar, format_percentage, truncate};
use crate::error::FinanceResult;
use crate::models::{BudgetMonth, CategoryId, DateRange, Money, Transaction};
use crate::storage::Storage;

use super::aggregator::{compute_actual_spending, resolve_expense_category};

/// One category's share of a month's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category_id: CategoryId,
    pub category_name: String,
    pub amount: Money,
    /// Share of the month's total expenses
    pub percentage: f64,
}

/// Expense spending per category for one month
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub month: BudgetMonth,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Largest categories first, at most the requested number
    pub slices: Vec<CategorySlice>,
    /// Spending in categories beyond the top slices
    pub other: Money,
    /// Expense transactions whose category does not resolve
    pub unmatched: Money,
}

impl CategoryBreakdown {
    /// Generate the breakdown for `month`, keeping the `top` largest categories
    pub fn generate(storage: &Storage, month: BudgetMonth, top: usize) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let range = DateRange::for_month(month);

        let spending = compute_actual_spending(&transactions, &categories, range);

        let in_month: Vec<&Transaction> =
            transactions.iter().filter(|t| range.contains(t.date)).collect();
        let total_income: Money = in_month
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expenses: Money = in_month
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        let unmatched: Money = in_month
            .iter()
            .filter(|t| t.is_expense() && resolve_expense_category(t, &categories).is_none())
            .map(|t| t.amount)
            .sum();

        let mut slices: Vec<CategorySlice> = categories
            .iter()
            .filter_map(|category| {
                let amount = spending.get(&category.id).copied()?;
                if amount.is_zero() {
                    return None;
                }
                Some(CategorySlice {
                    category_id: category.id,
                    category_name: category.name.clone(),
                    amount,
                    percentage: amount.percent_of(total_expenses),
                })
            })
            .collect();

        slices.sort_by(|a, b| b.amount.cmp(&a.amount));
        let other: Money = slices.iter().skip(top).map(|s| s.amount).sum();
        slices.truncate(top);

        Ok(Self {
            month,
            total_income,
            total_expenses,
            slices,
            other,
            unmatched,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!("Spending by Category: {}\n", self.month.long_name()));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Income: {}   Expenses: {}   Net: {}\n\n",
            money(self.total_income),
            money(self.total_expenses),
            money(self.total_income - self.total_expenses)
        ));

        if self.slices.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
        }

        let max = self
            .slices
            .first()
            .map(|s| s.amount.as_f64())
            .unwrap_or_default();

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<20} {:>11} {:>7}  {}\n",
                truncate(&slice.category_name, 20),
                money(slice.amount),
                format_percentage(slice.percentage),
                format_bar(slice.amount.as_f64(), max, 24)
            ));
        }

        if !self.other.is_zero() {
            output.push_str(&format!("{:<20} {:>11}\n", "Other", money(self.other)));
        }
        if !self.unmatched.is_zero() {
            output.push_str(&format!("{:<20} {:>11}\n", "Uncategorized", money(self.unmatched)));
        }

        output
    }
}

/// Income and expenses for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: BudgetMonth,
    pub income: Money,
    pub expenses: Money,
}

impl TrendPoint {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Income and expense totals for consecutive months, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    pub points: Vec<TrendPoint>,
}

impl MonthlyTrend {
    /// Generate the trend for the `months` months ending with `last`
    pub fn generate(storage: &Storage, last: BudgetMonth, months: u32) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        Ok(Self::from_transactions(&transactions, last, months))
    }

    pub fn from_transactions(transactions: &[Transaction], last: BudgetMonth, months: u32) -> Self {
        let points = DateRange::trailing_months(last, months)
            .months()
            .into_iter()
            .map(|month| {
                let mut point = TrendPoint {
                    month,
                    income: Money::zero(),
                    expenses: Money::zero(),
                };
                for txn in transactions.iter().filter(|t| month.contains(t.date)) {
                    if txn.is_income() {
                        point.income += txn.amount;
                    } else {
                        point.expenses += txn.amount;
                    }
                }
                point
            })
            .collect();

        Self { points }
    }

    /// Format the trend for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str("Income vs Expenses\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}  {}\n",
            "Month", "Income", "Expenses", "Net", "Expenses/Income"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        let max = self
            .points
            .iter()
            .map(|p| p.income.max(p.expenses))
            .max()
            .unwrap_or_default();

        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12}  {}\n",
                point.month.short_name(),
                money(point.income),
                money(point.expenses),
                money(point.net()),
                format_bar(point.expenses.as_f64(), max.as_f64(), 16)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewCategory, NewTransaction};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> BudgetMonth {
        BudgetMonth::new(2024, 3).unwrap()
    }

    fn storage() -> Storage {
        let storage = Storage::in_memory();
        for name in ["Food", "Rent", "Fun", "Travel"] {
            storage.categories.create(NewCategory::expense(name)).unwrap();
        }
        storage.categories.create(NewCategory::income("Salary")).unwrap();

        let drafts = [
            NewTransaction::expense("Food", Money::from_dollars(200), date(2024, 3, 3)),
            NewTransaction::expense("Rent", Money::from_dollars(600), date(2024, 3, 1)),
            NewTransaction::expense("Fun", Money::from_dollars(100), date(2024, 3, 9)),
            NewTransaction::expense("Mystery", Money::from_dollars(100), date(2024, 3, 12)),
            NewTransaction::income("Salary", Money::from_dollars(2000), date(2024, 3, 1)),
            NewTransaction::expense("Food", Money::from_dollars(50), date(2024, 1, 20)),
            NewTransaction::income("Salary", Money::from_dollars(1800), date(2023, 12, 29)),
        ];
        for draft in drafts {
            storage.transactions.create(draft).unwrap();
        }
        storage
    }

    #[test]
    fn test_breakdown_top_and_other() {
        let breakdown = CategoryBreakdown::generate(&storage(), march(), 2).unwrap();

        assert_eq!(breakdown.total_income, Money::from_dollars(2000));
        assert_eq!(breakdown.total_expenses, Money::from_dollars(1000));

        let names: Vec<_> = breakdown
            .slices
            .iter()
            .map(|s| s.category_name.as_str())
            .collect();
        assert_eq!(names, ["Rent", "Food"]);
        assert_eq!(breakdown.slices[0].percentage, 60.0);
        assert_eq!(breakdown.other, Money::from_dollars(100));
        assert_eq!(breakdown.unmatched, Money::from_dollars(100));
    }

    #[test]
    fn test_breakdown_skips_empty_categories() {
        let breakdown = CategoryBreakdown::generate(&storage(), march(), 8).unwrap();
        assert_eq!(breakdown.slices.len(), 3);
        assert!(breakdown.other.is_zero());

        let output = breakdown.format_terminal(&Settings::default());
        assert!(output.contains("Spending by Category: March 2024"));
        assert!(output.contains("Uncategorized"));
        assert!(!output.contains("Travel"));
    }

    #[test]
    fn test_trend_oldest_first_across_year_boundary() {
        let trend = MonthlyTrend::generate(&storage(), march(), 4).unwrap();
        let months: Vec<_> = trend.points.iter().map(|p| p.month.to_string()).collect();
        assert_eq!(months, ["2023-12", "2024-01", "2024-02", "2024-03"]);

        assert_eq!(trend.points[0].income, Money::from_dollars(1800));
        assert_eq!(trend.points[1].expenses, Money::from_dollars(50));
        assert!(trend.points[2].income.is_zero());
        assert_eq!(trend.points[3].net(), Money::from_dollars(1000));
    }

    #[test]
    fn test_trend_format_terminal() {
        let trend = MonthlyTrend::generate(&storage(), march(), 2).unwrap();
        let output = trend.format_terminal(&Settings::default());
        assert!(output.contains("Feb 2024"));
        assert!(output.contains("Mar 2024"));
        assert!(output.contains("$2000.00"));
    }
}
