//! Expense model
//!
//! One spending event. Stored as `{id, amount, category, description, date}`
//! with the date in `YYYY-MM-DD` form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// The caller-supplied part of an expense: everything except the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned once at creation
    pub id: ExpenseId,

    /// Amount spent; positive for every well-formed record
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    pub description: String,

    pub date: NaiveDate,
}

impl Expense {
    /// Build a stored record from a draft and its id
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        }
    }

    /// Everything but the id
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.amount = draft.amount;
        self.category = draft.category;
        self.description = draft.description;
        self.date = draft.date;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> ExpenseDraft {
        ExpenseDraft::new(
            Money::from_cents(4599),
            "Groceries",
            "Weekly shopping",
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
        )
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let id = ExpenseId::new();
        let expense = Expense::from_draft(id.clone(), groceries());

        assert_eq!(expense.id, id);
        assert_eq!(expense.to_draft(), groceries());
    }

    #[test]
    fn test_apply_preserves_id() {
        let id = ExpenseId::from_string("1");
        let mut expense = Expense::from_draft(id.clone(), groceries());

        let replacement = ExpenseDraft::new(
            Money::from_cents(999),
            "Entertainment",
            "Movie subscription",
            NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
        );
        expense.apply(replacement.clone());

        assert_eq!(expense.id, id);
        assert_eq!(expense.to_draft(), replacement);
    }

    #[test]
    fn test_stored_shape() {
        let expense = Expense::from_draft(ExpenseId::from_string("1"), groceries());
        let json = serde_json::to_value(&expense).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "amount": 45.99,
                "category": "Groceries",
                "description": "Weekly shopping",
                "date": "2025-05-15"
            })
        );
    }

    #[test]
    fn test_rejects_invalid_calendar_date() {
        let raw = r#"{"id":"1","amount":5,"category":"Dining","description":"x","date":"2025-02-30"}"#;
        assert!(serde_json::from_str::<Expense>(raw).is_err());
    }

    #[test]
    fn test_display() {
        let expense = Expense::from_draft(ExpenseId::from_string("1"), groceries());
        assert_eq!(
            expense.to_string(),
            "2025-05-15 Weekly shopping [Groceries] $45.99"
        );
    }
}
