//! CLI commands for reports
//!
//! Dashboard, budget-vs-actual comparison and charts.

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::DateRange;
use crate::reports::{BudgetComparisonReport, CategoryBreakdown, DashboardReport, MonthlyTrend};
use crate::storage::Storage;

use super::parse_month;

/// Show the month dashboard
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> FinanceResult<()> {
    let month = parse_month(month.as_deref())?;
    let report = DashboardReport::generate(storage, month, settings.recent_transactions)?;
    println!("{}", report.format_terminal(settings));
    Ok(())
}

/// Compare budgeted and actual spending between two months (inclusive)
///
/// Without `--from`, the window is the configured number of months ending
/// with `--to` (or the current month).
pub fn handle_compare_command(
    storage: &Storage,
    settings: &Settings,
    from: Option<String>,
    to: Option<String>,
) -> FinanceResult<()> {
    let last = parse_month(to.as_deref())?;
    let range = match from {
        Some(from) => {
            let first = parse_month(Some(&from))?;
            if first > last {
                return Err(FinanceError::Validation(format!(
                    "--from {} is after --to {}",
                    first, last
                )));
            }
            DateRange::between_months(first, last)
        }
        None => DateRange::trailing_months(last, settings.comparison_months),
    };

    let report = BudgetComparisonReport::generate(storage, range)?;
    println!("{}", report.format_terminal(settings));
    Ok(())
}

/// Show the category breakdown and the income/expense trend
pub fn handle_charts_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    top: Option<usize>,
    trend: Option<u32>,
) -> FinanceResult<()> {
    let month = parse_month(month.as_deref())?;
    let top = top.unwrap_or(settings.top_categories);
    let trend_months = trend.unwrap_or(settings.trend_months);

    if trend_months == 0 {
        return Err(FinanceError::Validation("--trend must be at least 1".into()));
    }

    let breakdown = CategoryBreakdown::generate(storage, month, top)?;
    let trend = MonthlyTrend::generate(storage, month, trend_months)?;

    println!("{}", breakdown.format_terminal(settings));
    println!("{}", trend.format_terminal(settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_trend_rejected() {
        let err = handle_charts_command(
            &Storage::in_memory(),
            &Settings::default(),
            Some("2024-03".into()),
            None,
            Some(0),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("--trend must be at least 1"));
    }

    #[test]
    fn test_reversed_compare_range_rejected() {
        let err = handle_compare_command(
            &Storage::in_memory(),
            &Settings::default(),
            Some("2024-05".into()),
            Some("2024-03".into()),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
