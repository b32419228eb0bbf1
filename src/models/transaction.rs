//! Transaction model
//!
//! A transaction is a single recorded income or expense event. The amount is
//! never negative; direction is carried by [`FlowType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of money flow, shared by transactions and categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Income,
    Expense,
}

impl FlowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse "income" or "expense" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub flow_type: FlowType,

    /// Non-negative amount
    pub amount: Money,

    /// Category name, matched against `Category::name`
    pub category: String,

    /// Optional direct reference to the category; takes precedence over the
    /// name when it resolves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    #[serde(default)]
    pub description: String,

    /// Transaction date
    pub date: NaiveDate,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a stored transaction from a draft
    pub fn from_draft(id: TransactionId, draft: NewTransaction, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            flow_type: draft.flow_type,
            amount: draft.amount,
            category: draft.category,
            category_id: draft.category_id,
            description: draft.description,
            date: draft.date,
            created_at,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.flow_type == FlowType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.flow_type == FlowType::Income
    }

    /// Overwrite every field the patch sets
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(flow_type) = patch.flow_type {
            self.flow_type = flow_type;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() && self.category_id.is_none() {
            return Err(TransactionValidationError::MissingCategory);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount,
            self.category
        )
    }
}

/// Fields supplied when creating a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// A draft whose description starts out as the category name
    pub fn new(flow_type: FlowType, category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        let category = category.into();
        Self {
            flow_type,
            amount,
            description: category.clone(),
            category,
            category_id: None,
            date,
        }
    }

    pub fn expense(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(FlowType::Expense, category, amount, date)
    }

    pub fn income(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(FlowType::Income, category, amount, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(rename = "type")]
    pub flow_type: Option<FlowType>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    /// `Some(None)` clears the id reference
    pub category_id: Option<Option<CategoryId>>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    MissingCategory,
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
            Self::MissingCategory => write!(f, "Transaction must have a category"),
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
