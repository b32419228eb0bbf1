//! Display formatting for terminal output
//!
//! Helpers shared by the reports, plus list views for transactions,
//! categories and budgets.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::format_budget_table;
pub use category::format_category_list;
pub use report::{format_bar, format_percentage, format_progress, truncate, usage_marker};
pub use transaction::format_transaction_table;
