use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use finance_dashboard::cli::{
    handle_budgets_command, handle_categories_command, handle_charts_command,
    handle_compare_command, handle_dashboard_command, handle_export_command,
    handle_transactions_command, BudgetsArgs, ExportArgs, TransactionsArgs,
};
use finance_dashboard::config::{paths::DashboardPaths, settings::Settings};
use finance_dashboard::models::BudgetMonth;
use finance_dashboard::storage::{Dataset, Storage};

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Personal finance dashboard",
    long_about = "findash summarizes income and expenses, tracks monthly budgets per \
                  category and compares budgeted against actual spending."
)]
struct Cli {
    /// Base directory holding config.json and data/ (overrides FINDASH_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month summary with recent transactions
    Dashboard {
        /// Month to show (YYYY-MM, default: current)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget progress for a month, or manage budgets
    Budgets(BudgetsArgs),

    /// Budgeted versus actual spending per category
    Compare {
        /// First month (YYYY-MM)
        #[arg(long)]
        from: Option<String>,

        /// Last month (YYYY-MM, default: current)
        #[arg(long)]
        to: Option<String>,
    },

    /// Spending breakdown and income/expense trend
    Charts {
        /// Month to break down (YYYY-MM, default: current)
        #[arg(short, long)]
        month: Option<String>,

        /// Number of categories in the breakdown
        #[arg(long)]
        top: Option<usize>,

        /// Number of months in the trend
        #[arg(long)]
        trend: Option<u32>,
    },

    /// List transactions newest first, or add, edit and delete them
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// List categories
    Categories,

    /// Export transactions as csv, json or text
    Export(ExportArgs),

    /// Write the demo data set and default settings to the data directory
    Init {
        /// Overwrite existing seed files
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    finance_dashboard::logging::init(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => DashboardPaths::with_base_dir(dir),
        None => DashboardPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    let Some(command) = cli.command else {
        println!("findash - personal finance dashboard");
        println!();
        println!("Run 'findash --help' for usage information.");
        println!("Run 'findash dashboard' for this month's summary.");
        return Ok(());
    };

    match command {
        Commands::Init { force } => return handle_init(&paths, &settings, force),
        Commands::Config => {
            print_config(&paths, &settings);
            return Ok(());
        }
        _ => {}
    }

    let storage = Storage::open(&paths)?;

    match command {
        Commands::Dashboard { month } => handle_dashboard_command(&storage, &settings, month)?,
        Commands::Budgets(args) => handle_budgets_command(&storage, &settings, &paths, args)?,
        Commands::Compare { from, to } => handle_compare_command(&storage, &settings, from, to)?,
        Commands::Charts { month, top, trend } => {
            handle_charts_command(&storage, &settings, month, top, trend)?
        }
        Commands::Transactions(args) => {
            handle_transactions_command(&storage, &settings, &paths, args)?
        }
        Commands::Categories => handle_categories_command(&storage)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Init { .. } | Commands::Config => {}
    }

    Ok(())
}

fn handle_init(paths: &DashboardPaths, settings: &Settings, force: bool) -> Result<()> {
    if paths.has_seed_data() && !force {
        anyhow::bail!(
            "Seed data already exists in {}. Use --force to overwrite it.",
            paths.data_dir().display()
        );
    }

    println!("Initializing findash at: {}", paths.base_dir().display());
    paths.ensure_directories()?;

    let dataset = Dataset::demo(BudgetMonth::current());
    dataset.save(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    println!(
        "Wrote {} transactions, {} categories and {} budgets.",
        dataset.transactions.len(),
        dataset.categories.len(),
        dataset.budgets.len()
    );
    println!("Run 'findash dashboard' to see this month's summary.");
    Ok(())
}

fn print_config(paths: &DashboardPaths, settings: &Settings) {
    println!("findash Configuration");
    println!("=====================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!(
        "Seed data:        {}",
        if paths.has_seed_data() { "present" } else { "none (demo data in use)" }
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Date format:          {}", settings.date_format);
    println!("  Comparison months:    {}", settings.comparison_months);
    println!("  Recent transactions:  {}", settings.recent_transactions);
    println!("  Top categories:       {}", settings.top_categories);
    println!("  Trend months:         {}", settings.trend_months);
}
