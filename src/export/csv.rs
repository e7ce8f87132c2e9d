//! CSV Export functionality
//!
//! Amounts are written as plain decimals with two places so spreadsheets
//! read them as numbers.

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryBudget, Expense, Money};

fn export_err(e: csv::Error) -> SpendlogError {
    SpendlogError::Export(e.to_string())
}

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

/// Export expenses in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["id", "date", "category", "description", "amount"])
        .map_err(export_err)?;

    for expense in expenses {
        csv.write_record([
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.description.clone(),
            decimal(expense.amount),
        ])
        .map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// Export category budgets in registry order
pub fn export_category_budgets_csv<W: Write>(
    budgets: &[CategoryBudget],
    writer: W,
) -> SpendlogResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["category", "amount"]).map_err(export_err)?;

    for budget in budgets {
        csv.write_record([budget.category.clone(), decimal(budget.amount)])
            .map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init::{sample_category_budgets, sample_expenses};

    #[test]
    fn test_export_expenses_csv() {
        let mut buffer = Vec::new();
        export_expenses_csv(&sample_expenses(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "id,date,category,description,amount");
        assert_eq!(lines[1], "1,2025-05-15,Groceries,Weekly grocery shopping,45.99");
        assert_eq!(lines[4], "4,2025-05-10,Utilities,Electricity bill,120.00");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut expenses = sample_expenses();
        expenses.truncate(1);
        expenses[0].description = "Milk, eggs".into();

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Milk, eggs\""));
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "id,date,category,description,amount\n");
    }

    #[test]
    fn test_export_category_budgets_csv() {
        let mut buffer = Vec::new();
        export_category_budgets_csv(&sample_category_budgets(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("category,amount\nGroceries,400.00\n"));
    }
}
