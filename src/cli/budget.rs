//! Budget CLI commands

use clap::Subcommand;

use super::settle;
use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_overview, DisplayStyle};
use crate::error::SpendlogResult;
use crate::reports::BudgetOverview;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against the monthly and category budgets
    Show,
    /// Set the monthly budget
    SetMonthly {
        /// Amount (e.g., "2000")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Set or overwrite a category budget
    Set {
        /// Category label
        category: String,
        /// Amount (e.g., "250")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Remove a category budget
    #[command(alias = "rm")]
    Remove {
        /// Category label
        category: String,
    },
    /// List the monthly budget and every category budget
    #[command(alias = "ls")]
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendlogResult<()> {
    let style = DisplayStyle::from(settings);

    match cmd {
        BudgetCommands::Show => {
            let overview = BudgetOverview::generate(
                storage.expenses.list(),
                storage.budgets.monthly_budget(),
                storage.budgets.list(),
            );
            print!("{}", format_budget_overview(&overview, &style));
        }

        BudgetCommands::SetMonthly { amount } => {
            let mut service = BudgetService::new(&mut storage.budgets);
            let amount = settle(service.set_monthly(&amount)?);
            println!("Monthly budget set to {}", style.money(amount));
        }

        BudgetCommands::Set { category, amount } => {
            let mut service = BudgetService::new(&mut storage.budgets);
            let budget = settle(service.set_category(&category, &amount)?);
            println!(
                "Budget for {} set to {}",
                budget.category,
                style.money(budget.amount)
            );
        }

        BudgetCommands::Remove { category } => {
            let mut service = BudgetService::new(&mut storage.budgets);
            settle(service.remove_category(&category)?);
            println!("Removed budget for {}", category.trim());
        }

        BudgetCommands::List => {
            println!(
                "Monthly budget: {}",
                style.money(storage.budgets.monthly_budget())
            );
            println!(
                "Allocated:      {}",
                style.money(storage.budgets.total_allocated())
            );
            println!();
            print!("{}", format_budget_list(storage.budgets.list(), &style));
        }
    }

    Ok(())
}
