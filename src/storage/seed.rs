//! Seed data
//!
//! A [`Dataset`] is the full contents of the three stores. It is loaded from
//! the JSON files in the data directory, or generated as a demo set anchored
//! on a reference month so the dashboard always has something recent to show.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::DashboardPaths;
use crate::error::FinanceResult;
use crate::models::{
    Budget, BudgetId, BudgetMonth, Category, CategoryId, FlowType, Money, NewBudget,
    NewCategory, NewTransaction, Transaction, TransactionId,
};

use super::file_io::{read_json, write_json_atomic};

/// Everything the stores hold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
}

impl Dataset {
    /// Read the seed files; a missing file yields an empty collection
    pub fn load(paths: &DashboardPaths) -> FinanceResult<Self> {
        let dataset = Self {
            transactions: read_json(paths.transactions_file())?,
            categories: read_json(paths.categories_file())?,
            budgets: read_json(paths.budgets_file())?,
        };

        tracing::debug!(
            transactions = dataset.transactions.len(),
            categories = dataset.categories.len(),
            budgets = dataset.budgets.len(),
            "seed files read"
        );

        Ok(dataset)
    }

    /// Write the three seed files
    pub fn save(&self, paths: &DashboardPaths) -> FinanceResult<()> {
        write_json_atomic(paths.transactions_file(), &self.transactions)?;
        write_json_atomic(paths.categories_file(), &self.categories)?;
        write_json_atomic(paths.budgets_file(), &self.budgets)?;
        Ok(())
    }

    /// Demo data covering the reference month and the two months before it
    pub fn demo(reference: BudgetMonth) -> Self {
        let categories: Vec<Category> = DEMO_CATEGORIES
            .iter()
            .enumerate()
            .map(|(index, (name, flow_type, icon, color))| {
                Category::from_draft(
                    CategoryId::new(index as u32 + 1),
                    NewCategory::new(*name, *flow_type).with_style(*icon, *color),
                )
            })
            .collect();

        let months = [reference.minus_months(2), reference.prev(), reference];

        let mut budgets = Vec::new();
        for month in months {
            for (category, dollars) in DEMO_BUDGETS {
                let Some(category) = categories.iter().find(|c| c.name == *category) else {
                    continue;
                };
                let id = BudgetId::new(budgets.len() as u32 + 1);
                budgets.push(Budget::from_draft(
                    id,
                    NewBudget::new(category.id, Money::from_dollars(*dollars), month),
                ));
            }
        }

        let mut transactions = Vec::new();
        for (offset, month) in months.iter().enumerate() {
            for (day, flow_type, category, cents, description) in DEMO_TRANSACTIONS {
                let Some(date) = NaiveDate::from_ymd_opt(month.year(), month.month(), *day) else {
                    continue;
                };
                // Vary amounts a little from month to month
                let amount = Money::from_cents(cents + (offset as i64) * cents / 10);
                let id = TransactionId::new(transactions.len() as u32 + 1);
                let draft = NewTransaction::new(*flow_type, *category, amount, date)
                    .with_description(*description);
                transactions.push(Transaction::from_draft(id, draft, noon_utc(date)));
            }
        }

        Self {
            transactions,
            categories,
            budgets,
        }
    }
}

fn noon_utc(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&naive)
}

const DEMO_CATEGORIES: &[(&str, FlowType, &str, &str)] = &[
    ("Food & Dining", FlowType::Expense, "Utensils", "text-orange-500"),
    ("Transportation", FlowType::Expense, "Car", "text-blue-500"),
    ("Shopping", FlowType::Expense, "ShoppingBag", "text-pink-500"),
    ("Entertainment", FlowType::Expense, "Film", "text-purple-500"),
    ("Bills & Utilities", FlowType::Expense, "Receipt", "text-red-500"),
    ("Healthcare", FlowType::Expense, "Heart", "text-green-500"),
    ("Salary", FlowType::Income, "Briefcase", "text-emerald-500"),
    ("Freelance", FlowType::Income, "Laptop", "text-teal-500"),
];

const DEMO_BUDGETS: &[(&str, i64)] = &[
    ("Food & Dining", 600),
    ("Transportation", 250),
    ("Shopping", 300),
    ("Entertainment", 150),
    ("Bills & Utilities", 400),
];

const DEMO_TRANSACTIONS: &[(u32, FlowType, &str, i64, &str)] = &[
    (1, FlowType::Income, "Salary", 450_000, "Monthly salary"),
    (3, FlowType::Expense, "Bills & Utilities", 12_500, "Electricity bill"),
    (5, FlowType::Expense, "Food & Dining", 8_540, "Grocery run"),
    (8, FlowType::Expense, "Transportation", 4_500, "Fuel"),
    (11, FlowType::Expense, "Entertainment", 3_200, "Cinema tickets"),
    (14, FlowType::Income, "Freelance", 80_000, "Website project"),
    (15, FlowType::Expense, "Shopping", 15_999, "New shoes"),
    (18, FlowType::Expense, "Food & Dining", 6_275, "Dinner out"),
    (21, FlowType::Expense, "Healthcare", 4_000, "Pharmacy"),
    (24, FlowType::Expense, "Bills & Utilities", 7_999, "Internet"),
    (27, FlowType::Expense, "Food & Dining", 11_020, "Grocery run"),
];
