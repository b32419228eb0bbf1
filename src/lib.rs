//! finance-dashboard - personal finance dashboard core
//!
//! This library holds transactions, categories and monthly budgets, and
//! turns them into the reports a personal finance dashboard shows: the month
//! summary, budget progress, budget-vs-actual comparison and spending charts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, money, months)
//! - `storage`: In-memory stores behind the `Store` trait, plus JSON seed data
//! - `reports`: The shared aggregator and the reports built on it
//! - `export`: CSV, JSON and text export of transactions
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `findash` binary
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_dashboard::models::{BudgetMonth, DateRange};
//! use finance_dashboard::reports::BudgetComparisonReport;
//! use finance_dashboard::storage::{Dataset, Storage};
//!
//! let month = BudgetMonth::current();
//! let storage = Storage::from_dataset(Dataset::demo(month))?;
//! let report = BudgetComparisonReport::generate(&storage, DateRange::for_month(month))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
