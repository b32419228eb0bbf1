//! In-memory repository
//!
//! Holds records in insertion order behind an `RwLock`. New ids are one past
//! the highest id currently stored (the first record gets 1).

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FinanceError, FinanceResult};
use crate::models::SequentialId;

use super::{Record, Store};

/// Repository keeping records of one type in memory
pub struct MemoryRepository<R: Record> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> MemoryRepository<R> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository holding existing records
    ///
    /// Every record is validated against the ones before it, and ids must be
    /// unique.
    pub fn from_records(records: Vec<R>) -> FinanceResult<Self> {
        for (index, record) in records.iter().enumerate() {
            let earlier = &records[..index];
            if earlier.iter().any(|r| r.id() == record.id()) {
                return Err(FinanceError::Storage(format!(
                    "Duplicate {} id: {}",
                    R::ENTITY,
                    record.id()
                )));
            }
            record.check(earlier)?;
        }

        tracing::debug!(entity = R::ENTITY, count = records.len(), "repository loaded");

        Ok(Self {
            records: RwLock::new(records),
        })
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Vec<R>>> {
        self.records
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Vec<R>>> {
        self.records
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn position(records: &[R], id: R::Id) -> FinanceResult<usize> {
        records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| FinanceError::not_found(R::ENTITY, id))
    }
}

impl<R: Record> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> for MemoryRepository<R> {
    fn get_all(&self) -> FinanceResult<Vec<R>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: R::Id) -> FinanceResult<R> {
        let records = self.read()?;
        let index = Self::position(&records, id)?;
        Ok(records[index].clone())
    }

    fn create(&self, draft: R::Draft) -> FinanceResult<R> {
        let mut records = self.write()?;

        let id = records
            .iter()
            .map(|r| r.id())
            .max()
            .map(|max| max.next())
            .unwrap_or_else(R::Id::first);

        let record = R::from_draft(id, draft);
        record.check(&records)?;
        records.push(record.clone());

        tracing::debug!(entity = R::ENTITY, %id, "record created");
        Ok(record)
    }

    fn update(&self, id: R::Id, patch: R::Patch) -> FinanceResult<R> {
        let mut records = self.write()?;
        let index = Self::position(&records, id)?;

        let mut updated = records[index].clone();
        updated.apply_patch(patch);

        let others: Vec<R> = records
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        updated.check(&others)?;

        records[index] = updated.clone();

        tracing::debug!(entity = R::ENTITY, %id, "record updated");
        Ok(updated)
    }

    fn delete(&self, id: R::Id) -> FinanceResult<()> {
        let mut records = self.write()?;
        let index = Self::position(&records, id)?;
        records.remove(index);

        tracing::debug!(entity = R::ENTITY, %id, "record deleted");
        Ok(())
    }

    fn count(&self) -> FinanceResult<usize> {
        Ok(self.read()?.len())
    }
}
