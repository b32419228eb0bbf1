//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the reports and export layers.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budgets_command, BudgetCommands, BudgetsArgs};

pub use category::handle_categories_command;
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_charts_command, handle_compare_command, handle_dashboard_command};
pub use transaction::{
    handle_transactions_command, FilterArgs, TransactionCommands, TransactionsArgs,
};

use chrono::NaiveDate;

use crate::config::paths::DashboardPaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetMonth, Category, FlowType, Money};
use crate::storage::Storage;

/// Parse an optional `YYYY-MM` argument, defaulting to the current month
pub fn parse_month(arg: Option<&str>) -> FinanceResult<BudgetMonth> {
    match arg {
        Some(s) => BudgetMonth::parse(s).map_err(|e| {
            FinanceError::Validation(format!("{}. Use YYYY-MM (e.g., 2024-03)", e))
        }),
        None => Ok(BudgetMonth::current()),
    }
}

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date(s: &str, what: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid {} date: {}. Use YYYY-MM-DD", what, s))
    })
}

/// Parse an `income`/`expense` argument
pub fn parse_flow_type(s: &str) -> FinanceResult<FlowType> {
    FlowType::parse(s).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid transaction type: {}. Use 'income' or 'expense'",
            s
        ))
    })
}

/// Parse an amount argument; it must be greater than zero
pub fn parse_amount(s: &str) -> FinanceResult<Money> {
    let amount = Money::parse(s)
        .map_err(|e| FinanceError::Validation(format!("{}. Use format like 42.50", e)))?;
    if !amount.is_positive() {
        return Err(FinanceError::Validation(format!(
            "Amount must be greater than 0: {}",
            s.trim()
        )));
    }
    Ok(amount)
}

/// Find the category of `flow_type` named exactly `name`
pub fn find_category(storage: &Storage, name: &str, flow_type: FlowType) -> FinanceResult<Category> {
    storage
        .categories
        .get_all()?
        .into_iter()
        .find(|c| c.flow_type == flow_type && c.name == name)
        .ok_or_else(|| FinanceError::NotFound {
            entity_type: "Category",
            identifier: format!("{} ({})", name, flow_type),
        })
}

/// Write every store back to the data directory
pub fn save_storage(storage: &Storage, paths: &DashboardPaths) -> FinanceResult<()> {
    paths.ensure_directories()?;
    storage.snapshot()?.save(paths)?;
    tracing::info!(dir = %paths.data_dir().display(), "data saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month(Some("2024-03")).unwrap(),
            BudgetMonth::new(2024, 3).unwrap()
        );
        assert_eq!(parse_month(None).unwrap(), BudgetMonth::current());

        let err = parse_month(Some("March")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("YYYY-MM"));
    }

    #[test]
    fn test_parse_date_and_type() {
        assert_eq!(
            parse_date("2024-02-29", "start").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29", "start").is_err());
        assert_eq!(parse_flow_type("Income").unwrap(), FlowType::Income);
        assert!(parse_flow_type("transfer").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42.50").unwrap(), Money::from_cents(4250));
        assert!(parse_amount("0").unwrap_err().is_validation());
        assert!(parse_amount("-5").unwrap_err().is_validation());

        let err = parse_amount("12,50").unwrap_err();
        assert!(err.to_string().contains("42.50"));
    }

    #[test]
    fn test_find_category_matches_type() {
        use crate::models::NewCategory;

        let storage = Storage::in_memory();
        storage.categories.create(NewCategory::expense("Other")).unwrap();
        let income = storage.categories.create(NewCategory::income("Other")).unwrap();

        let found = find_category(&storage, "Other", FlowType::Income).unwrap();
        assert_eq!(found.id, income.id);
        assert!(find_category(&storage, "Travel", FlowType::Expense)
            .unwrap_err()
            .is_not_found());
    }
}
