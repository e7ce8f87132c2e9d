//! Core data models for spendlog
//!
//! Expenses, category budgets, and the money and id types they are built on.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::CategoryBudget;
pub use category::SUGGESTED_CATEGORIES;
pub use expense::{Expense, ExpenseDraft};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
