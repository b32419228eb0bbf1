//! Category records
//!
//! Names are the join key for transactions, so two categories of the same
//! flow type may not share a name.

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::CategoryValidationError;
use crate::models::{Category, CategoryId, CategoryPatch, NewCategory};

use super::Record;

impl Record for Category {
    type Id = CategoryId;
    type Draft = NewCategory;
    type Patch = CategoryPatch;

    const ENTITY: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn from_draft(id: CategoryId, draft: NewCategory) -> Self {
        Category::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: CategoryPatch) {
        self.apply(patch);
    }

    fn check(&self, others: &[Self]) -> FinanceResult<()> {
        self.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let taken = others
            .iter()
            .any(|c| c.flow_type == self.flow_type && c.name == self.name);
        if taken {
            return Err(FinanceError::Validation(
                CategoryValidationError::DuplicateName(self.name.clone()).to_string(),
            ));
        }

        Ok(())
    }
}
