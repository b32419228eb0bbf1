//! CLI commands for listing and editing transactions

use clap::{Args, Subcommand};

use crate::config::paths::DashboardPaths;
use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::FinanceResult;
use crate::export::TransactionFilter;
use crate::models::{NewTransaction, TransactionId, TransactionPatch};
use crate::storage::Storage;

use super::{find_category, parse_amount, parse_date, parse_flow_type, save_storage};

/// `transactions`: list by default, or add, edit and delete
#[derive(Args, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct TransactionsArgs {
    #[command(subcommand)]
    pub command: Option<TransactionCommands>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of transactions to show
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
}

/// Transaction subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// "income" or "expense"
        flow_type: String,

        /// Amount (e.g., "42.50")
        amount: String,

        /// Category name (must exist for the given type)
        category: String,

        /// What the money was for
        description: String,

        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Change fields of an existing transaction
    Edit {
        /// Transaction ID
        id: TransactionId,

        /// New type ("income" or "expense")
        #[arg(long = "type")]
        flow_type: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category name
        #[arg(short, long)]
        category: Option<String>,

        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
}

/// Transaction filter flags shared by `transactions` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only "income" or "expense" transactions
    #[arg(long = "type")]
    pub flow_type: Option<String>,

    /// Exact category name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Earliest date (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Latest date (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub end: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FinanceResult<TransactionFilter> {
        Ok(TransactionFilter {
            flow_type: self.flow_type.as_deref().map(parse_flow_type).transpose()?,
            category: self.category.clone(),
            start: self
                .start
                .as_deref()
                .map(|s| parse_date(s, "start"))
                .transpose()?,
            end: self
                .end
                .as_deref()
                .map(|s| parse_date(s, "end"))
                .transpose()?,
        })
    }
}

/// Handle a `transactions` command; changes are written back to `paths`
pub fn handle_transactions_command(
    storage: &Storage,
    settings: &Settings,
    paths: &DashboardPaths,
    args: TransactionsArgs,
) -> FinanceResult<()> {
    let Some(command) = args.command else {
        let filter = args.filter.to_filter()?;
        let mut transactions = filter.apply(&storage.transactions.get_all()?);
        transactions.truncate(args.limit);

        print!("{}", format_transaction_table(&transactions, settings));
        return Ok(());
    };

    match command {
        TransactionCommands::Add {
            flow_type,
            amount,
            category,
            description,
            date,
        } => {
            let flow_type = parse_flow_type(&flow_type)?;
            let amount = parse_amount(&amount)?;
            let category = find_category(storage, &category, flow_type)?;
            let date = match date {
                Some(d) => parse_date(&d, "transaction")?,
                None => chrono::Local::now().date_naive(),
            };

            let draft = NewTransaction::new(flow_type, category.name.clone(), amount, date)
                .with_category_id(category.id)
                .with_description(description);
            let txn = storage.transactions.create(draft)?;
            save_storage(storage, paths)?;

            println!("Added transaction #{}: {}", txn.id, txn);
        }

        TransactionCommands::Edit {
            id,
            flow_type,
            amount,
            category,
            description,
            date,
        } => {
            let current = storage.transactions.get(id)?;
            let mut patch = TransactionPatch {
                flow_type: flow_type.as_deref().map(parse_flow_type).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                date: date
                    .as_deref()
                    .map(|d| parse_date(d, "transaction"))
                    .transpose()?,
                ..Default::default()
            };

            // The category has to exist for the type the transaction ends up with
            if patch.flow_type.is_some() || category.is_some() {
                let flow_type = patch.flow_type.unwrap_or(current.flow_type);
                let name = category.as_deref().unwrap_or(current.category.as_str());
                let category = find_category(storage, name, flow_type)?;
                patch.category = Some(category.name);
                patch.category_id = Some(Some(category.id));
            }

            if patch == TransactionPatch::default() {
                println!("No changes specified.");
                return Ok(());
            }

            let txn = storage.transactions.update(id, patch)?;
            save_storage(storage, paths)?;

            println!("Updated transaction #{}: {}", txn.id, txn);
        }

        TransactionCommands::Delete { id } => {
            let txn = storage.transactions.get(id)?;
            storage.transactions.delete(id)?;
            save_storage(storage, paths)?;

            println!("Deleted transaction #{}: {}", txn.id, txn);
        }
    }

    Ok(())
}
