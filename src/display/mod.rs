//! Display formatting for terminal output
//!
//! Turns expenses, budgets and reports into plain-text tables. Every
//! formatter takes a [`DisplayStyle`] so the currency symbol and date format
//! from the settings file apply everywhere.

pub mod budget;
pub mod expense;
pub mod report;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

pub use budget::{format_budget_list, format_budget_overview, format_progress_row};
pub use expense::{format_category_list, format_expense_details, format_expense_list};
pub use report::{format_dashboard, format_spending_report, format_trend};

/// Currency and date formatting shared by every formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayStyle {
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}
