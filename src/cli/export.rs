//! CLI commands for data export and import
//!
//! Exports write to a file when `--output` is given, otherwise to stdout.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{csv, json};
use crate::storage::Storage;

use super::settle;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export expenses (or category budgets) to CSV
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export category budgets instead of expenses
        #[arg(long)]
        budgets: bool,
    },

    /// Export everything to one JSON document
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendlogResult<()> {
    match cmd {
        ExportCommands::Csv { output, budgets } => {
            let writer = open_output(output.as_deref())?;
            if budgets {
                csv::export_category_budgets_csv(storage.budgets.list(), writer)?;
            } else {
                csv::export_expenses_csv(storage.expenses.list(), writer)?;
            }

            if let Some(path) = output {
                let (count, what) = if budgets {
                    (storage.budgets.list().len(), "category budgets")
                } else {
                    (storage.expenses.len(), "expenses")
                };
                println!("Exported {} {} to: {}", count, what, path.display());
            }
        }

        ExportCommands::Json { output, compact } => {
            let mut writer = open_output(output.as_deref())?;
            json::export_full_json(storage, &mut writer, !compact)?;
            writeln!(writer)?;
            writer.flush()?;

            if let Some(path) = output {
                println!("Full data exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Restore a JSON export over the current data
///
/// Without `force` only the file summary is printed.
pub fn handle_import_command(storage: &mut Storage, file: &Path, force: bool) -> SpendlogResult<()> {
    let contents = fs::read_to_string(file).map_err(|e| {
        SpendlogError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let export = json::import_from_json(&contents)?;

    println!("Export file: {}", file.display());
    println!(
        "Exported:    {}",
        export.exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Contents:    {} expenses, {} category budgets",
        export.expenses.len(),
        export.category_budgets.len()
    );
    println!();

    if !force {
        println!("WARNING: This will replace ALL current expenses and budgets!");
        println!("To proceed, run again with --force:");
        println!("  spendlog import {} --force", file.display());
        return Ok(());
    }

    let summary = settle(export.restore_into(storage));
    println!(
        "Imported {} expenses and {} category budgets",
        summary.expenses, summary.category_budgets
    );
    Ok(())
}

fn open_output(path: Option<&Path>) -> SpendlogResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendlogError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
