//! JSON Export functionality
//!
//! Exports every stored key to one JSON document with schema versioning, and
//! restores such a document over the current data.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryBudget, Expense, Money};
use crate::storage::{Persisted, Storage};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub monthly_budget: Money,

    pub category_budgets: Vec<CategoryBudget>,

    pub metadata: ExportMetadata,
}

/// Summary figures for a reader skimming the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub category_budget_count: usize,
    /// Decimal text; a sum may exceed the range of a single amount
    pub total_spent: String,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Snapshot the ledger and registry
    pub fn from_storage(storage: &Storage) -> Self {
        let expenses = storage.expenses.snapshot();
        let category_budgets = storage.budgets.list().to_vec();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_budget_count: category_budgets.len(),
            total_spent: expenses
                .iter()
                .map(|e| e.amount)
                .sum::<Money>()
                .format_with_symbol(""),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            monthly_budget: storage.budgets.monthly_budget(),
            category_budgets,
            metadata,
        }
    }

    /// Check the schema version, unique expense ids and amount signs
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut ids = HashSet::new();
        for expense in &self.expenses {
            if !ids.insert(expense.id.as_str()) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            if !expense.amount.is_positive() {
                return Err(format!("Expense {} has a non-positive amount", expense.id));
            }
        }

        if self.monthly_budget.is_negative() {
            return Err("Monthly budget cannot be negative".to_string());
        }
        if let Some(budget) = self.category_budgets.iter().find(|b| b.amount.is_negative()) {
            return Err(format!("Budget for {} cannot be negative", budget.category));
        }

        Ok(())
    }

    /// Replace the ledger and registry contents with this export
    ///
    /// Every key is written even if an earlier write fails; the first failure
    /// is reported.
    pub fn restore_into(self, storage: &mut Storage) -> Persisted<RestoreSummary> {
        let summary = RestoreSummary {
            expenses: self.expenses.len(),
            category_budgets: self.category_budgets.len(),
            exported_at: self.exported_at,
        };

        let expenses = storage.expenses.replace_all(self.expenses);
        let budgets = storage
            .budgets
            .replace(self.monthly_budget, self.category_budgets);

        let warning = expenses.warning.or(budgets.warning);
        Persisted {
            value: summary,
            warning,
        }
    }
}

/// What a restore put in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreSummary {
    pub expenses: usize,
    pub category_budgets: usize,
    pub exported_at: DateTime<Utc>,
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> SpendlogResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> SpendlogResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| SpendlogError::Export(format!("Invalid export file: {}", e)))?;
    export.validate().map_err(SpendlogError::Export)?;
    Ok(export)
}
