//! User settings for the finance dashboard
//!
//! Display preferences and the default windows used by the reports.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::paths::DashboardPaths;
use crate::error::FinanceError;
use crate::models::Money;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of months (ending with the current one) in the default
    /// budget-vs-actual comparison window
    #[serde(default = "default_comparison_months")]
    pub comparison_months: u32,

    /// Number of recent transactions shown on the dashboard
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Number of categories shown in the spending breakdown
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of months in the income/expense trend
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_comparison_months() -> u32 {
    3
}

fn default_recent_transactions() -> usize {
    5
}

fn default_top_categories() -> usize {
    8
}

fn default_trend_months() -> u32 {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            comparison_months: default_comparison_months(),
            recent_transactions: default_recent_transactions(),
            top_categories: default_top_categories(),
            trend_months: default_trend_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &DashboardPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Reject windows that would produce empty reports
    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.comparison_months == 0 {
            return Err(FinanceError::Config("comparison_months must be at least 1".into()));
        }
        if self.trend_months == 0 {
            return Err(FinanceError::Config("trend_months must be at least 1".into()));
        }
        Ok(())
    }
}
