//! Export module for spendlog
//!
//! Writes the stored data out in two formats:
//! - CSV: expenses or category budgets, one row each (spreadsheet-compatible)
//! - JSON: every stored key in one versioned document, which can also be
//!   restored with [`FullExport::restore_into`]

pub mod csv;
pub mod json;

pub use self::csv::{export_category_budgets_csv, export_expenses_csv};
pub use self::json::{
    export_full_json, import_from_json, FullExport, RestoreSummary, EXPORT_SCHEMA_VERSION,
};
