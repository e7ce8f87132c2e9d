//! Expense CLI commands
//!
//! Implements CLI commands for expense management.

use clap::Subcommand;

use super::{parse_date, settle, today};
use crate::config::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_list, DisplayStyle};
use crate::error::{SpendlogError, SpendlogResult};
use crate::reports::spending_by_category;
use crate::services::{ExpenseForm, ExpensePatch, ExpenseService, DATE_FORMAT};
use crate::storage::{ExpenseFilter, Storage};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "45.99")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List expenses, newest recorded first
    #[command(alias = "ls")]
    List {
        /// Only this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID or unique ID prefix
        id: String,
    },
    /// Edit an expense; omitted fields keep their value
    Edit {
        /// Expense ID or unique ID prefix
        id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique ID prefix
        id: String,
    },
    /// List suggested categories and those in use
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendlogResult<()> {
    let style = DisplayStyle::from(settings);
    let mut service = ExpenseService::new(&mut storage.expenses);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let form = ExpenseForm {
                amount,
                category,
                description,
                date: date.unwrap_or_else(|| today().format(DATE_FORMAT).to_string()),
            };
            let expense = settle(service.create(&form)?);

            println!("Recorded expense:");
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(from) = from {
                filter = filter.from(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to(parse_date(&to)?);
            }

            let expenses = service.list(&filter, limit);
            print!("{}", format_expense_list(&expenses, &style));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let patch = ExpensePatch {
                amount,
                category,
                description,
                date,
            };
            if patch.is_empty() {
                return Err(SpendlogError::Validation(
                    "Nothing to change; pass at least one of --amount, --category, --description, --date".into(),
                ));
            }

            let existing = service.find(&id)?;
            let expense = settle(service.patch(&existing.id, patch)?);

            println!("Updated expense:");
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Delete { id } => {
            let existing = service.find(&id)?;
            let removed = settle(service.delete(&existing.id)?);
            println!(
                "Deleted expense {} ({}, {})",
                removed.id,
                removed.description,
                style.money(removed.amount)
            );
        }

        ExpenseCommands::Categories => {
            let in_use = spending_by_category(storage.expenses.list());
            print!("{}", format_category_list(&in_use, &style));
        }
    }

    Ok(())
}
