//! Expense display formatting
//!
//! List and detail views for expenses.

use std::collections::BTreeMap;

use super::report::truncate;
use super::DisplayStyle;
use crate::models::category::is_suggested;
use crate::models::{Expense, Money, SUGGESTED_CATEGORIES};

const ID_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 15;
const DESCRIPTION_WIDTH: usize = 30;

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, style: &DisplayStyle) -> String {
    format!(
        "{:<id$}  {:<10}  {:<cat$}  {:<desc$}  {:>12}",
        expense.id.short(),
        style.date(expense.date),
        truncate(&expense.category, CATEGORY_WIDTH),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        style.money(expense.amount),
        id = ID_WIDTH,
        cat = CATEGORY_WIDTH,
        desc = DESCRIPTION_WIDTH,
    )
}

/// Format expenses as a table with a total line
pub fn format_expense_list(expenses: &[Expense], style: &DisplayStyle) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id$}  {:<10}  {:<cat$}  {:<desc$}  {:>12}\n",
        "ID",
        "Date",
        "Category",
        "Description",
        "Amount",
        id = ID_WIDTH,
        cat = CATEGORY_WIDTH,
        desc = DESCRIPTION_WIDTH,
    ));
    output.push_str(&"-".repeat(ID_WIDTH + 10 + CATEGORY_WIDTH + DESCRIPTION_WIDTH + 12 + 8));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, style));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        style.money(total)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, style: &DisplayStyle) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", style.date(expense.date)));
    output.push_str(&format!("Amount:      {}\n", style.money(expense.amount)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));

    output
}

/// Suggested categories followed by any other category in use
///
/// `in_use` maps each category present in the ledger to its total.
pub fn format_category_list(in_use: &BTreeMap<String, Money>, style: &DisplayStyle) -> String {
    let mut output = String::from("Suggested categories:\n");

    for category in SUGGESTED_CATEGORIES {
        match in_use.get(*category) {
            Some(total) => output.push_str(&format!("  {:<20} {:>12}\n", category, style.money(*total))),
            None => output.push_str(&format!("  {}\n", category)),
        }
    }

    let custom: Vec<_> = in_use.iter().filter(|(c, _)| !is_suggested(c)).collect();
    if !custom.is_empty() {
        output.push_str("\nOther categories in use:\n");
        for (category, total) in custom {
            output.push_str(&format!("  {:<20} {:>12}\n", category, style.money(*total)));
        }
    }

    output
}
