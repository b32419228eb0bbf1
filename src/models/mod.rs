//! Core data models
//!
//! Transactions, categories and monthly budgets, plus the money, id and
//! calendar-month types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, NewBudget};
pub use category::{Category, CategoryPatch, NewCategory};
pub use ids::{BudgetId, CategoryId, SequentialId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{BudgetMonth, DateRange};
pub use transaction::{FlowType, NewTransaction, Transaction, TransactionPatch};
