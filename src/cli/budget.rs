//! CLI commands for budgets
//!
//! Without a subcommand, `budgets` shows progress for a month. The
//! subcommands manage the budget records themselves.

use clap::{Args, Subcommand};

use crate::config::paths::DashboardPaths;
use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetId, BudgetPatch, FlowType, NewBudget};
use crate::reports::BudgetProgressReport;
use crate::storage::Storage;

use super::{find_category, parse_amount, parse_month, save_storage};

/// `budgets`: progress by default, or list, set, edit and delete
#[derive(Args, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct BudgetsArgs {
    #[command(subcommand)]
    pub command: Option<BudgetCommands>,

    /// Month to show (YYYY-MM, default: current)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Budget subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum BudgetCommands {
    /// List budget records with their IDs
    List {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the budget for an expense category in a month
    Set {
        /// Expense category name
        category: String,

        /// Amount to budget (e.g., "400" or "250.50")
        amount: String,

        /// Month (YYYY-MM, default: current)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change an existing budget
    Edit {
        /// Budget ID
        id: BudgetId,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New expense category name
        #[arg(short, long)]
        category: Option<String>,

        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: BudgetId,
    },
}

/// Handle a `budgets` command; changes are written back to `paths`
pub fn handle_budgets_command(
    storage: &Storage,
    settings: &Settings,
    paths: &DashboardPaths,
    args: BudgetsArgs,
) -> FinanceResult<()> {
    let Some(command) = args.command else {
        let month = parse_month(args.month.as_deref())?;
        let report = BudgetProgressReport::generate(storage, month)?;
        println!("{}", report.format_terminal(settings));
        return Ok(());
    };

    match command {
        BudgetCommands::List { month } => {
            let month = month.as_deref().map(|m| parse_month(Some(m))).transpose()?;
            let budgets: Vec<_> = storage
                .budgets
                .get_all()?
                .into_iter()
                .filter(|b| month.map_or(true, |m| b.month == m))
                .collect();
            let categories = storage.categories.get_all()?;
            print!("{}", format_budget_table(&budgets, &categories, settings));
        }

        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let category = find_category(storage, &category, FlowType::Expense)?;
            let amount = parse_amount(&amount)?;
            let month = parse_month(month.as_deref())?;

            let existing: Vec<_> = storage
                .budgets
                .get_all()?
                .into_iter()
                .filter(|b| b.category_id == category.id && b.month == month)
                .collect();

            // Several records for one pair add up, so there is no single amount to replace
            let budget = match existing.as_slice() {
                [] => storage
                    .budgets
                    .create(NewBudget::new(category.id, amount, month))?,
                [only] => storage.budgets.update(
                    only.id,
                    BudgetPatch {
                        amount: Some(amount),
                        ..Default::default()
                    },
                )?,
                several => {
                    let ids: Vec<String> = several.iter().map(|b| b.id.to_string()).collect();
                    return Err(FinanceError::Validation(format!(
                        "{} has {} budgets in {} (IDs {}). Use 'budgets edit <ID>' instead",
                        category.name,
                        several.len(),
                        month,
                        ids.join(", ")
                    )));
                }
            };
            save_storage(storage, paths)?;

            println!(
                "Set {} budget for {} to {} (budget #{})",
                category.name,
                month,
                settings.format_money(budget.amount),
                budget.id
            );
        }

        BudgetCommands::Edit {
            id,
            amount,
            category,
            month,
        } => {
            let patch = BudgetPatch {
                category_id: category
                    .as_deref()
                    .map(|name| find_category(storage, name, FlowType::Expense).map(|c| c.id))
                    .transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                month: month.as_deref().map(|m| parse_month(Some(m))).transpose()?,
            };

            if patch == BudgetPatch::default() {
                println!("No changes specified.");
                return Ok(());
            }

            let budget = storage.budgets.update(id, patch)?;
            save_storage(storage, paths)?;

            println!("Updated budget #{}: {}", budget.id, budget);
        }

        BudgetCommands::Delete { id } => {
            let budget = storage.budgets.get(id)?;
            storage.budgets.delete(id)?;
            save_storage(storage, paths)?;

            println!("Deleted budget #{}: {}", budget.id, budget);
        }
    }

    Ok(())
}
