//! Budget-versus-actual aggregation
//!
//! The one place where transactions, categories and budgets are folded into
//! per-category totals. Every report goes through these functions.
//!
//! All three operations are total: references that do not resolve (unknown
//! category names, budgets for unknown categories) are skipped, and nothing
//! here divides by zero. Inputs are only borrowed.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{Budget, BudgetMonth, Category, CategoryId, DateRange, Money, Transaction};

/// Find the expense category a transaction belongs to
///
/// A `category_id` that names an expense category wins. Otherwise the
/// transaction's category name is matched exactly against the names of the
/// expense categories, first match first.
pub fn resolve_expense_category<'a>(
    transaction: &Transaction,
    categories: &'a [Category],
) -> Option<&'a Category> {
    let by_id = transaction
        .category_id
        .and_then(|id| categories.iter().find(|c| c.id == id && c.is_expense()));

    by_id.or_else(|| {
        categories
            .iter()
            .find(|c| c.is_expense() && c.name == transaction.category)
    })
}

/// Actual spending per expense category within `range`
///
/// Every expense category is present in the result (zero if nothing was
/// spent) and no other key is.
pub fn compute_actual_spending(
    transactions: &[Transaction],
    categories: &[Category],
    range: DateRange,
) -> HashMap<CategoryId, Money> {
    let mut spending: HashMap<CategoryId, Money> = categories
        .iter()
        .filter(|c| c.is_expense())
        .map(|c| (c.id, Money::zero()))
        .collect();

    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && range.contains(t.date))
    {
        if let Some(category) = resolve_expense_category(txn, categories) {
            if let Some(total) = spending.get_mut(&category.id) {
                *total += txn.amount;
            }
        }
    }

    spending
}

/// Budgeted total per category over the months `range` touches
///
/// Budgets sharing a (category, month) pair are added together.
pub fn compute_budget_totals(budgets: &[Budget], range: DateRange) -> HashMap<CategoryId, Money> {
    let months: HashSet<BudgetMonth> = range.months().into_iter().collect();

    let mut totals: HashMap<CategoryId, Money> = HashMap::new();
    for budget in budgets.iter().filter(|b| months.contains(&b.month)) {
        *totals.entry(budget.category_id).or_default() += budget.amount;
    }

    totals
}

/// Join actual spending and budgeted totals for every expense category with a
/// nonzero budget, largest budget first
///
/// Ties keep the order of `categories`.
pub fn build_comparison(
    transactions: &[Transaction],
    categories: &[Category],
    budgets: &[Budget],
    range: DateRange,
) -> Vec<BudgetComparisonRow> {
    let spending = compute_actual_spending(transactions, categories, range);
    let budgeted = compute_budget_totals(budgets, range);

    let mut rows: Vec<BudgetComparisonRow> = categories
        .iter()
        .filter(|c| c.is_expense())
        .filter_map(|category| {
            let total = budgeted.get(&category.id).copied().unwrap_or_default();
            if total.is_zero() {
                return None;
            }
            Some(BudgetComparisonRow {
                category_id: category.id,
                category_name: category.name.clone(),
                budgeted: total,
                actual: spending.get(&category.id).copied().unwrap_or_default(),
            })
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.budgeted.cmp(&a.budgeted));

    tracing::trace!(%range, rows = rows.len(), "comparison built");
    rows
}

/// One category's budgeted and actual totals over a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetComparisonRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub budgeted: Money,
    pub actual: Money,
}

impl BudgetComparisonRow {
    /// Budgeted minus actual; negative when over budget
    pub fn difference(&self) -> Money {
        self.budgeted - self.actual
    }

    /// Actual as a percentage of budgeted, 0 when nothing is budgeted
    pub fn percentage_used(&self) -> f64 {
        self.actual.percent_of(self.budgeted)
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budgeted
    }

    pub fn usage_level(&self) -> UsageLevel {
        UsageLevel::from_comparison_percentage(self.percentage_used())
    }
}

/// How much of a budget has been used
///
/// Budget progress lines grade on the 60/80 scale of [`from_percentage`];
/// comparison rows grade on the 80/100 scale of
/// [`from_comparison_percentage`], where only spending past the budget is
/// critical.
///
/// [`from_percentage`]: UsageLevel::from_percentage
/// [`from_comparison_percentage`]: UsageLevel::from_comparison_percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    OnTrack,
    Warning,
    Critical,
}

impl UsageLevel {
    /// Up to 60% on track, up to 80% warning, critical above that
    pub fn from_percentage(percentage: f64) -> Self {
        Self::grade(percentage, 60.0, 80.0)
    }

    /// Up to 80% on track, up to 100% warning, critical once over budget
    pub fn from_comparison_percentage(percentage: f64) -> Self {
        Self::grade(percentage, 80.0, 100.0)
    }

    fn grade(percentage: f64, warning_above: f64, critical_above: f64) -> Self {
        if percentage <= warning_above {
            Self::OnTrack
        } else if percentage <= critical_above {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "on track",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Totals across a set of comparison rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComparisonSummary {
    pub total_budgeted: Money,
    pub total_actual: Money,
    pub categories: usize,
}

impl ComparisonSummary {
    pub fn from_rows(rows: &[BudgetComparisonRow]) -> Self {
        Self {
            total_budgeted: rows.iter().map(|r| r.budgeted).sum(),
            total_actual: rows.iter().map(|r| r.actual).sum(),
            categories: rows.len(),
        }
    }

    pub fn percentage_used(&self) -> f64 {
        self.total_actual.percent_of(self.total_budgeted)
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_actual > self.total_budgeted
    }

    pub fn usage_level(&self) -> UsageLevel {
        UsageLevel::from_comparison_percentage(self.percentage_used())
    }
}
