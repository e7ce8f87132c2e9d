//! Expense ledger
//!
//! Owns the expense collection in insertion order (newest first) and writes
//! the whole collection through to the store under `expenses` after every
//! mutation. The ledger does no validation; see `services::expense`.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

use super::init::sample_expenses;
use super::kv::{keys, write_through, KeyValueStore, Persisted};

/// Predicates for [`ExpenseLedger::filter`]; an unset predicate matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower date bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by date range (inclusive on both ends)
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| expense.category == c);
        let start_ok = self.start_date.map_or(true, |start| expense.date >= start);
        let end_ok = self.end_date.map_or(true, |end| expense.date <= end);
        category_ok && start_ok && end_ok
    }
}

/// The authoritative expense collection
pub struct ExpenseLedger {
    store: Arc<dyn KeyValueStore>,
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Load the ledger from `store`
    ///
    /// A key that was never written yields the sample dataset when
    /// `seed_samples` is set and an empty ledger otherwise. A stored value
    /// that does not parse is an error.
    pub fn load(store: Arc<dyn KeyValueStore>, seed_samples: bool) -> SpendlogResult<Self> {
        let expenses = match store.get(keys::EXPENSES)? {
            Some(value) => serde_json::from_value::<Vec<Expense>>(value).map_err(|e| {
                SpendlogError::Storage(format!("Failed to parse stored expenses: {}", e))
            })?,
            None if seed_samples => {
                info!("no stored expenses; starting from sample data");
                sample_expenses()
            }
            None => Vec::new(),
        };

        debug!(count = expenses.len(), "expense ledger loaded");
        Ok(Self { store, expenses })
    }

    /// Record a new expense at the front of the ledger
    pub fn add(&mut self, draft: ExpenseDraft) -> Persisted<Expense> {
        let mut id = ExpenseId::new();
        while self.get(&id).is_some() {
            id = ExpenseId::new();
        }

        let expense = Expense::from_draft(id, draft);
        self.expenses.insert(0, expense.clone());
        debug!(id = %expense.id, "expense added");

        Persisted::new(expense, self.persist())
    }

    /// Replace every field but the id of the matching expense
    ///
    /// An unknown id leaves the ledger unchanged. The value reports whether
    /// a record matched.
    pub fn update(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> Persisted<bool> {
        let matched = match self.expenses.iter_mut().find(|e| &e.id == id) {
            Some(expense) => {
                expense.apply(draft);
                true
            }
            None => false,
        };
        debug!(%id, matched, "expense update");

        Persisted::new(matched, self.persist())
    }

    /// Remove the matching expense; an unknown id is a no-op
    pub fn delete(&mut self, id: &ExpenseId) -> Persisted<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| &e.id != id);
        let removed = self.expenses.len() != before;
        debug!(%id, removed, "expense delete");

        Persisted::new(removed, self.persist())
    }

    /// Swap in a whole new collection, as when restoring an export
    pub fn replace_all(&mut self, expenses: Vec<Expense>) -> Persisted<()> {
        debug!(count = expenses.len(), "expense ledger replaced");
        self.expenses = expenses;
        Persisted::new((), self.persist())
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Expenses whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.id.as_str().starts_with(prefix))
            .collect()
    }

    /// Expenses matching every set predicate, in ledger order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// The full collection in ledger order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// An owned copy of the collection for aggregation
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn persist(&self) -> SpendlogResult<()> {
        write_through(self.store.as_ref(), keys::EXPENSES, &self.expenses)
    }
}
