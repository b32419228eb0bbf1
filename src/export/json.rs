//! JSON export
//!
//! Writes the selected transactions together with a little metadata so an
//! export file can be recognised later.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Transaction export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transaction_count: usize,

    /// Earliest transaction date, if any
    pub earliest_transaction: Option<String>,

    /// Latest transaction date, if any
    pub latest_transaction: Option<String>,

    pub transactions: Vec<Transaction>,
}

impl TransactionExport {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
            transactions,
        }
    }

    /// Parse an export document and check its schema version
    pub fn from_json(json: &str) -> FinanceResult<Self> {
        let export: Self = serde_json::from_str(json)?;

        if export.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(FinanceError::Export(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, export.schema_version
            )));
        }

        Ok(export)
    }
}

/// Write transactions as a JSON export document
pub fn write_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = TransactionExport::new(transactions.to_vec());

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    writeln!(writer)?;
    Ok(())
}
