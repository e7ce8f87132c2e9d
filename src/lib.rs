//! spendlog - a personal expense and budget tracker
//!
//! This library records spending events, keeps a monthly budget and
//! per-category budgets, and derives totals, category breakdowns and spending
//! trends from them. Data lives in a small key/value store backed by one JSON
//! file per key.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, money, ids)
//! - `storage`: Key/value store adapter, the expense ledger and budget registry
//! - `services`: Input validation on top of the storage layer
//! - `reports`: Pure aggregation over a snapshot of the ledger
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use spendlog::models::Money;
//! use spendlog::reports::{spending_by_category, top_categories};
//! use spendlog::services::{ExpenseForm, ExpenseService};
//! use spendlog::storage::Storage;
//!
//! let mut storage = Storage::in_memory(false)?;
//! let form = ExpenseForm {
//!     amount: "45.99".into(),
//!     category: "Groceries".into(),
//!     description: "Weekly shopping".into(),
//!     date: "2025-05-15".into(),
//! };
//! ExpenseService::new(&mut storage.expenses).create(&form)?.into_result()?;
//!
//! let expenses = storage.expenses.snapshot();
//! assert_eq!(spending_by_category(&expenses)["Groceries"], Money::from_cents(4599));
//! assert_eq!(top_categories(&expenses, 1)[0].0, "Groceries");
//! # Ok::<(), spendlog::SpendlogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
