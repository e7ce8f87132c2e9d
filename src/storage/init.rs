//! Starter data
//!
//! Used when a store key has never been written and sample seeding is on.

use chrono::NaiveDate;

use crate::models::{CategoryBudget, Expense, ExpenseDraft, ExpenseId, Money};

/// Monthly budget used when none has been stored
pub const SAMPLE_MONTHLY_BUDGET: Money = Money::from_cents(200_000);

/// The five starter expenses, newest first
pub fn sample_expenses() -> Vec<Expense> {
    let rows: [(&str, i64, &str, &str, (i32, u32, u32)); 5] = [
        ("1", 4599, "Groceries", "Weekly grocery shopping", (2025, 5, 15)),
        ("2", 999, "Entertainment", "Movie subscription", (2025, 5, 14)),
        ("3", 3250, "Transportation", "Fuel", (2025, 5, 12)),
        ("4", 12000, "Utilities", "Electricity bill", (2025, 5, 10)),
        ("5", 7525, "Dining", "Dinner with friends", (2025, 5, 8)),
    ];

    rows.iter()
        .filter_map(|&(id, cents, category, description, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Expense::from_draft(
                ExpenseId::from_string(id),
                ExpenseDraft::new(Money::from_cents(cents), category, description, date),
            ))
        })
        .collect()
}

/// Starter allocations for the sample categories
pub fn sample_category_budgets() -> Vec<CategoryBudget> {
    [
        ("Groceries", 40_000),
        ("Entertainment", 15_000),
        ("Transportation", 20_000),
        ("Utilities", 30_000),
        ("Dining", 25_000),
    ]
    .into_iter()
    .map(|(category, cents)| CategoryBudget::new(category, Money::from_cents(cents)))
    .collect()
}
