//! Transaction records
//!
//! Transactions are stamped with `created_at` when the store accepts them.

use chrono::Utc;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};

use super::Record;

impl Record for Transaction {
    type Id = TransactionId;
    type Draft = NewTransaction;
    type Patch = TransactionPatch;

    const ENTITY: &'static str = "Transaction";

    fn id(&self) -> TransactionId {
        self.id
    }

    fn from_draft(id: TransactionId, draft: NewTransaction) -> Self {
        Transaction::from_draft(id, draft, Utc::now())
    }

    fn apply_patch(&mut self, patch: TransactionPatch) {
        self.apply(patch);
    }

    fn check(&self, _others: &[Self]) -> FinanceResult<()> {
        self.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))
    }
}
