use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use spendlog::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_import_command,
    handle_report_command,
};
use spendlog::config::{paths::DATA_DIR_ENV, Settings, SpendlogPaths};
use spendlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "spendlog records everyday expenses, keeps a monthly budget and \
                  per-category budgets, and shows where the money went: totals, \
                  top categories and a spending trend, all from the command line."
)]
struct Cli {
    /// Base directory for settings and data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(spendlog::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(spendlog::cli::BudgetCommands),

    /// Dashboard and spending reports
    #[command(subcommand)]
    Report(spendlog::cli::ReportCommands),

    /// Export data to CSV or JSON
    #[command(subcommand)]
    Export(spendlog::cli::ExportCommands),

    /// Replace all data with the contents of a JSON export
    Import {
        /// Path to a file written by 'spendlog export json'
        file: PathBuf,

        /// Skip the confirmation step
        #[arg(short, long)]
        force: bool,
    },

    /// Create the data directory and a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    spendlog::logging::init_tracing();

    let paths = match cli.data_dir {
        Some(dir) => SpendlogPaths::with_base_dir(dir),
        None => SpendlogPaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut storage = Storage::open(&paths, &settings)?;
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut storage = Storage::open(&paths, &settings)?;
            handle_budget_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file, force }) => {
            let mut storage = Storage::open(&paths, &settings)?;
            handle_import_command(&mut storage, &file, force)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized spendlog at: {}", paths.base_dir().display());
            if settings.seed_sample_data {
                println!("Sample expenses and budgets are shown until you record your own.");
                println!("Set \"seed_sample_data\": false in config.json to start empty.");
            }
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Seed sample data:  {}", settings.seed_sample_data);
            println!("  Recent limit:      {}", settings.recent_limit);
            println!("  Top categories:    {}", settings.top_categories);
            println!("  Budget preview:    {}", settings.budget_preview);
            println!("  Default range:     {}", settings.default_range);
        }
        None => {
            println!("spendlog - expense and budget tracking");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog report dashboard' for an overview.");
        }
    }

    Ok(())
}
