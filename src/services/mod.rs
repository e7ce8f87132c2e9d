//! Service layer for spendlog
//!
//! The service layer sits between user input and the storage layer: it parses
//! and validates typed values and turns unknown ids into NotFound errors.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{ExpenseForm, ExpensePatch, ExpenseService, DATE_FORMAT};
