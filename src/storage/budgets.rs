//! Budget records

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetId, BudgetPatch, NewBudget};

use super::Record;

impl Record for Budget {
    type Id = BudgetId;
    type Draft = NewBudget;
    type Patch = BudgetPatch;

    const ENTITY: &'static str = "Budget";

    fn id(&self) -> BudgetId {
        self.id
    }

    fn from_draft(id: BudgetId, draft: NewBudget) -> Self {
        Budget::from_draft(id, draft)
    }

    fn apply_patch(&mut self, patch: BudgetPatch) {
        self.apply(patch);
    }

    // Several budgets for one (category, month) pair are allowed.
    fn check(&self, _others: &[Self]) -> FinanceResult<()> {
        self.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetMonth, CategoryId, Money};
    use crate::storage::{MemoryRepository, Store};

    fn march() -> BudgetMonth {
        BudgetMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn test_duplicate_pairs_are_stored() {
        let repo = MemoryRepository::<Budget>::new();
        let food = CategoryId::new(1);
        repo.create(NewBudget::new(food, Money::from_dollars(50), march()))
            .unwrap();
        repo.create(NewBudget::new(food, Money::from_dollars(70), march()))
            .unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let repo = MemoryRepository::<Budget>::new();
        let err = repo
            .create(NewBudget::new(
                CategoryId::new(1),
                Money::from_cents(-100),
                march(),
            ))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_month_keeps_year_in_step() {
        let repo = MemoryRepository::<Budget>::new();
        let budget = repo
            .create(NewBudget::new(
                CategoryId::new(1),
                Money::from_dollars(50),
                march(),
            ))
            .unwrap();

        let moved = repo
            .update(
                budget.id,
                BudgetPatch {
                    month: Some(BudgetMonth::new(2025, 2).unwrap()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.year, 2025);
    }
}
