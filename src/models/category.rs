//! Category model
//!
//! Categories classify transactions as income or expense. Transactions refer
//! to a category by its name, so names must be unique within a flow type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::FlowType;

/// A named classification of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Category name; the join key used by transactions
    pub name: String,

    #[serde(rename = "type")]
    pub flow_type: FlowType,

    /// Icon name (presentation only)
    #[serde(default)]
    pub icon: String,

    /// Color class (presentation only)
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn from_draft(id: CategoryId, draft: NewCategory) -> Self {
        Self {
            id,
            name: draft.name,
            flow_type: draft.flow_type,
            icon: draft.icon,
            color: draft.color,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.flow_type == FlowType::Expense
    }

    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(flow_type) = patch.flow_type {
            self.flow_type = flow_type;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Fields supplied when creating a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, flow_type: FlowType) -> Self {
        Self {
            name: name.into(),
            flow_type,
            icon: String::new(),
            color: String::new(),
        }
    }

    pub fn expense(name: impl Into<String>) -> Self {
        Self::new(name, FlowType::Expense)
    }

    pub fn income(name: impl Into<String>) -> Self {
        Self::new(name, FlowType::Income)
    }

    pub fn with_style(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub flow_type: Option<FlowType>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    DuplicateName(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::DuplicateName(name) => {
                write!(f, "A category of this type is already named '{}'", name)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
