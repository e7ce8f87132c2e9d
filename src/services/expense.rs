//! Expense service
//!
//! Validates entry-form input and resolves user-typed ids before handing
//! off to the ledger. Unknown ids are reported here; the ledger itself treats
//! them as no-ops.

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult, ValidationErrors};
use crate::models::{Expense, ExpenseDraft, ExpenseId, Money, MoneyParseError};
use crate::storage::{ExpenseFilter, ExpenseLedger, Persisted};

/// Date format accepted by the entry form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw entry-form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl ExpenseForm {
    /// An empty form dated `today`
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// A form pre-filled from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.format_with_symbol(""),
            category: expense.category.clone(),
            description: expense.description.clone(),
            date: expense.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Check every field, collecting one message per failing field
    pub fn validate(&self) -> Result<ExpenseDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = match Money::parse(&self.amount) {
            Ok(amount) if amount.is_positive() => Some(amount),
            Err(MoneyParseError::OutOfRange(_)) => {
                errors.add("amount", "Amount is too large");
                None
            }
            _ => {
                errors.add("amount", "Please enter a valid amount");
                None
            }
        };

        let category = self.category.trim();
        if category.is_empty() {
            errors.add("category", "Please select a category");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.add("description", "Please enter a description");
        }

        let date_text = self.date.trim();
        let date = if date_text.is_empty() {
            errors.add("date", "Please select a date");
            None
        } else {
            match NaiveDate::parse_from_str(date_text, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("date", "Please enter a valid date (YYYY-MM-DD)");
                    None
                }
            }
        };

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => {
                Ok(ExpenseDraft::new(amount, category, description, date))
            }
            _ => Err(errors),
        }
    }
}

/// Partial edit: unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }

    fn apply_to(self, mut form: ExpenseForm) -> ExpenseForm {
        if let Some(amount) = self.amount {
            form.amount = amount;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(date) = self.date {
            form.date = date;
        }
        form
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut ExpenseLedger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(ledger: &'a mut ExpenseLedger) -> Self {
        Self { ledger }
    }

    /// Validate and record a new expense
    pub fn create(&mut self, form: &ExpenseForm) -> SpendlogResult<Persisted<Expense>> {
        let draft = form.validate()?;
        Ok(self.ledger.add(draft))
    }

    /// Validate and replace an existing expense
    pub fn update(&mut self, id: &ExpenseId, form: &ExpenseForm) -> SpendlogResult<Persisted<Expense>> {
        if self.ledger.get(id).is_none() {
            return Err(SpendlogError::expense_not_found(id.as_str()));
        }

        let draft = form.validate()?;
        let outcome = self.ledger.update(id, draft.clone());
        Ok(outcome.map(|_| Expense::from_draft(id.clone(), draft)))
    }

    /// Apply a partial edit on top of the stored values
    pub fn patch(&mut self, id: &ExpenseId, patch: ExpensePatch) -> SpendlogResult<Persisted<Expense>> {
        let current = self
            .ledger
            .get(id)
            .ok_or_else(|| SpendlogError::expense_not_found(id.as_str()))?;

        let form = patch.apply_to(ExpenseForm::from_expense(current));
        self.update(id, &form)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&mut self, id: &ExpenseId) -> SpendlogResult<Persisted<Expense>> {
        let expense = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| SpendlogError::expense_not_found(id.as_str()))?;

        Ok(self.ledger.delete(id).map(|_| expense))
    }

    /// Resolve a full id or a unique id prefix
    pub fn find(&self, identifier: &str) -> SpendlogResult<Expense> {
        resolve(self.ledger, identifier)
    }

    /// Matching expenses in ledger order, optionally capped
    pub fn list(&self, filter: &ExpenseFilter, limit: Option<usize>) -> Vec<Expense> {
        let mut expenses = self.ledger.filter(filter);
        if let Some(limit) = limit {
            expenses.truncate(limit);
        }
        expenses
    }
}

/// Resolve `identifier` against `ledger`: exact id first, then unique prefix
pub fn resolve(ledger: &ExpenseLedger, identifier: &str) -> SpendlogResult<Expense> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(SpendlogError::Validation("Expense id cannot be empty".into()));
    }

    if let Some(expense) = ledger.get(&ExpenseId::from_string(identifier)) {
        return Ok(expense.clone());
    }

    match ledger.find_by_prefix(identifier).as_slice() {
        [] => Err(SpendlogError::expense_not_found(identifier)),
        [only] => Ok((*only).clone()),
        many => Err(SpendlogError::Validation(format!(
            "Id prefix '{}' matches {} expenses; use more characters",
            identifier,
            many.len()
        ))),
    }
}
