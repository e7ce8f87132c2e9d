//! Spending Report
//!
//! Totals and per-category sums over a snapshot of expenses.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money};

/// Sum of every amount; zero for an empty slice
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Amounts summed per category string
///
/// Keys are whatever categories appear in `expenses`; categories with no
/// expenses are absent rather than zero.
pub fn spending_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(expense.category.clone())
            .or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// The `n` categories with the largest totals
///
/// Ordered by amount descending; equal amounts fall back to category name
/// ascending.
pub fn top_categories(expenses: &[Expense], n: usize) -> Vec<(String, Money)> {
    let mut ranked: Vec<(String, Money)> = spending_by_category(expenses).into_iter().collect();
    // Stable sort over name-ordered keys keeps the name tie-break
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// The `limit` most recent expenses, newest date first
///
/// Expenses sharing a date keep their ledger order.
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// One category's share of spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of overall spending, 0..=100
    pub percentage: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Total spending across all categories
    pub total: Money,
    /// Total expense count
    pub expense_count: usize,
    /// Rows in top-categories order
    pub categories: Vec<CategorySpending>,
}

impl SpendingReport {
    /// Generate the report from a snapshot
    pub fn generate(expenses: &[Expense]) -> Self {
        let total = total_spent(expenses);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for expense in expenses {
            *counts.entry(expense.category.as_str()).or_default() += 1;
        }

        let categories = top_categories(expenses, usize::MAX)
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                count: counts.get(category.as_str()).copied().unwrap_or(0),
                percentage: amount.percent_of(total),
                total: amount,
                category,
            })
            .collect();

        Self {
            total,
            expense_count: expenses.len(),
            categories,
        }
    }

    /// The first `n` rows
    pub fn top(&self, n: usize) -> &[CategorySpending] {
        &self.categories[..n.min(self.categories.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendlogResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| SpendlogError::Export(e.to_string());

        csv.write_record(["category", "amount", "count", "percentage"])
            .map_err(export_err)?;
        for row in &self.categories {
            csv.write_record([
                row.category.clone(),
                row.total.format_with_symbol(""),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(export_err)?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.total.format_with_symbol(""),
            self.expense_count.to_string(),
            if self.is_empty() { "0.00" } else { "100.00" }.to_string(),
        ])
        .map_err(export_err)?;

        csv.flush()?;
        Ok(())
    }
}
