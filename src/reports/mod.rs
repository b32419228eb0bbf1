//! Reports module for the finance dashboard
//!
//! The [`aggregator`] turns transactions, categories and budgets into
//! per-category totals; every other report here is built on top of it.

pub mod aggregator;
pub mod budget_progress;
pub mod charts;
pub mod comparison;
pub mod dashboard;

pub use aggregator::{
    build_comparison, compute_actual_spending, compute_budget_totals, BudgetComparisonRow,
    ComparisonSummary, UsageLevel,
};
pub use budget_progress::{BudgetProgressLine, BudgetProgressReport};
pub use charts::{CategoryBreakdown, CategorySlice, MonthlyTrend, TrendPoint};
pub use comparison::BudgetComparisonReport;
pub use dashboard::DashboardReport;
