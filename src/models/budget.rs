//! Budget model
//!
//! A budget is a planned spending cap for one category in one calendar month.
//! Nothing stops two budgets from sharing a (category, month) pair; consumers
//! add them together.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::month::BudgetMonth;

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// The category this budget caps
    pub category_id: CategoryId,

    /// Budgeted amount (non-negative)
    pub amount: Money,

    /// Calendar month key, e.g. "2024-03"
    pub month: BudgetMonth,

    /// Year of `month`, kept alongside for consumers that group by year
    pub year: i32,
}

impl Budget {
    pub fn from_draft(id: BudgetId, draft: NewBudget) -> Self {
        Self {
            id,
            category_id: draft.category_id,
            amount: draft.amount,
            year: draft.month.year(),
            month: draft.month,
        }
    }

    /// Overwrite every field the patch sets; `year` follows `month`
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(month) = patch.month {
            self.month = month;
            self.year = month.year();
        }
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.amount));
        }

        if self.year != self.month.year() {
            return Err(BudgetValidationError::YearMismatch {
                year: self.year,
                month: self.month,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for category {} in {}",
            self.amount, self.category_id, self.month
        )
    }
}

/// Fields supplied when creating a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category_id: CategoryId,
    pub amount: Money,
    pub month: BudgetMonth,
}

impl NewBudget {
    pub fn new(category_id: CategoryId, amount: Money, month: BudgetMonth) -> Self {
        Self {
            category_id,
            amount,
            month,
        }
    }
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPatch {
    pub category_id: Option<CategoryId>,
    pub amount: Option<Money>,
    pub month: Option<BudgetMonth>,
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount(Money),
    YearMismatch { year: i32, month: BudgetMonth },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Budget amount cannot be negative: {}", amount)
            }
            Self::YearMismatch { year, month } => {
                write!(f, "Budget year {} does not match month {}", year, month)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
