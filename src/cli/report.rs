//! CLI commands for reports
//!
//! Dashboard, spending breakdown and trend views over the current ledger.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_date, today};
use crate::config::Settings;
use crate::display::{format_dashboard, format_spending_report, format_trend, DisplayStyle};
use crate::error::{SpendlogError, SpendlogResult};
use crate::reports::{time_series, Dashboard, DashboardLimits, SpendingReport, TimeRange};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Budget summary, trend, top categories and recent expenses
    Dashboard {
        /// Trend range: week, month or year
        #[arg(short, long)]
        range: Option<TimeRange>,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Spending by category
    Spending {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending trend as a bar chart
    Trend {
        /// Trend range: week, month or year
        #[arg(short, long)]
        range: Option<TimeRange>,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        as_of: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendlogResult<()> {
    let style = DisplayStyle::from(settings);
    let expenses = storage.expenses.snapshot();

    match cmd {
        ReportCommands::Dashboard { range, as_of } => {
            let dashboard = Dashboard::generate(
                &expenses,
                storage.budgets.monthly_budget(),
                storage.budgets.list(),
                range.unwrap_or(settings.default_range),
                reference_date(as_of.as_deref())?,
                DashboardLimits::from(settings),
            );
            print!("{}", format_dashboard(&dashboard, &style));
        }

        ReportCommands::Spending { top, output } => {
            let report = SpendingReport::generate(&expenses);

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        SpendlogError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    report.export_csv(BufWriter::new(file))?;
                    println!("Spending report exported to: {}", path.display());
                }
                None => print!("{}", format_spending_report(&report, top, &style)),
            }
        }

        ReportCommands::Trend { range, as_of } => {
            let series = time_series(
                &expenses,
                range.unwrap_or(settings.default_range),
                reference_date(as_of.as_deref())?,
            );
            print!("{}", format_trend(&series, &style));
        }
    }

    Ok(())
}

fn reference_date(as_of: Option<&str>) -> SpendlogResult<chrono::NaiveDate> {
    as_of.map_or_else(|| Ok(today()), parse_date)
}
