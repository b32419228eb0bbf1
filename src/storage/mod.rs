//! Storage layer
//!
//! Every entity lives behind the [`Store`] trait: `get_all`, `get`, `create`,
//! `update` and `delete`. The only implementation shipped is the in-memory
//! [`MemoryRepository`], but reports and tests only ever see the trait, so any
//! fixture or backend can be injected through [`Storage::new`].

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod memory;
pub mod seed;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryRepository;
pub use seed::Dataset;

use crate::config::paths::DashboardPaths;
use crate::error::FinanceResult;
use crate::models::{Budget, Category, SequentialId, Transaction};

/// A record a store can hold
pub trait Record: Clone + Send + Sync + 'static {
    type Id: SequentialId;
    /// Fields supplied on create
    type Draft;
    /// Partial update applied on update
    type Patch;

    /// Entity name used in error messages and logs
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    /// Build a record from a draft and a freshly allocated id
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Validate the record against the other records in the store
    fn check(&self, others: &[Self]) -> FinanceResult<()>;
}

/// Data-access abstraction over one entity type
pub trait Store<R: Record>: Send + Sync {
    /// All records, in insertion order
    fn get_all(&self) -> FinanceResult<Vec<R>>;

    /// One record by id; `NotFound` if absent
    fn get(&self, id: R::Id) -> FinanceResult<R>;

    /// Insert a record with the next sequential id
    fn create(&self, draft: R::Draft) -> FinanceResult<R>;

    /// Merge a patch into an existing record; `NotFound` if absent
    fn update(&self, id: R::Id, patch: R::Patch) -> FinanceResult<R>;

    /// Remove a record; `NotFound` if absent
    fn delete(&self, id: R::Id) -> FinanceResult<()>;

    fn count(&self) -> FinanceResult<usize> {
        Ok(self.get_all()?.len())
    }
}

/// Bundles the three stores the dashboard reads from
pub struct Storage {
    pub transactions: Box<dyn Store<Transaction>>,
    pub categories: Box<dyn Store<Category>>,
    pub budgets: Box<dyn Store<Budget>>,
}

impl Storage {
    /// Assemble storage from any store implementations
    pub fn new(
        transactions: impl Store<Transaction> + 'static,
        categories: impl Store<Category> + 'static,
        budgets: impl Store<Budget> + 'static,
    ) -> Self {
        Self {
            transactions: Box::new(transactions),
            categories: Box::new(categories),
            budgets: Box::new(budgets),
        }
    }

    /// Empty in-memory storage
    pub fn in_memory() -> Self {
        Self::new(
            MemoryRepository::<Transaction>::new(),
            MemoryRepository::<Category>::new(),
            MemoryRepository::<Budget>::new(),
        )
    }

    /// In-memory storage pre-filled with a dataset
    pub fn from_dataset(dataset: Dataset) -> FinanceResult<Self> {
        Ok(Self::new(
            MemoryRepository::from_records(dataset.transactions)?,
            MemoryRepository::from_records(dataset.categories)?,
            MemoryRepository::from_records(dataset.budgets)?,
        ))
    }

    /// Load seed files from the data directory if any exist, otherwise fall
    /// back to the built-in demo data for the current month
    pub fn open(paths: &DashboardPaths) -> FinanceResult<Self> {
        let dataset = if paths.has_seed_data() {
            tracing::info!(dir = %paths.data_dir().display(), "loading seed data");
            Dataset::load(paths)?
        } else {
            tracing::info!("no seed data found, using demo data");
            Dataset::demo(crate::models::BudgetMonth::current())
        };
        Self::from_dataset(dataset)
    }

    /// Read all three collections at once
    pub fn snapshot(&self) -> FinanceResult<Dataset> {
        Ok(Dataset {
            transactions: self.transactions.get_all()?,
            categories: self.categories.get_all()?,
            budgets: self.budgets.get_all()?,
        })
    }
}
