//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::services::DATE_FORMAT;
use crate::storage::Persisted;

/// Unwrap a mutation outcome, telling the user when it was not saved
///
/// The change has already been applied for the rest of this run either way.
pub(crate) fn settle<T>(outcome: Persisted<T>) -> T {
    if let Some(warning) = outcome.warning() {
        eprintln!("Warning: change applied but not saved: {}", warning);
    }
    outcome.into_value()
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(text: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        SpendlogError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", text))
    })
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::test_support::FailingStore;
    use crate::storage::BudgetRegistry;
    use std::sync::Arc;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2025-05-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
        );
        assert!(parse_date("15/05/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_settle_keeps_value_of_stale_write() {
        let mut registry = BudgetRegistry::load(Arc::new(FailingStore::new()), false).unwrap();
        settle(registry.set_monthly_budget(Money::from_cents(500)));
        assert_eq!(registry.monthly_budget(), Money::from_cents(500));
    }
}
