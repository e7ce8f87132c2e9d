//! Budget Overview Report
//!
//! Compares spending against the monthly budget and each category budget.
//! Category budgets and expenses are joined by category string equality only,
//! so a budget for a category nobody spends in simply shows zero spent.

use std::collections::HashSet;

use super::spending::{spending_by_category, total_spent};
use crate::models::{CategoryBudget, Expense, Money};

/// Progress above this percentage is a warning
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Overall spending above this percentage of the monthly budget is flagged
pub const NEAR_LIMIT_THRESHOLD: f64 = 90.0;

/// Where a category stands against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At most 80% used
    OnTrack,
    /// Over 80%, up to and including 100%
    Warning,
    /// Over 100%
    OverBudget,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            BudgetStatus::OverBudget
        } else if percentage > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }
}

/// Spending against a single category budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: Money,
    pub budget: Money,
    /// spent / budget * 100; 0 when the budget is zero
    pub percentage: f64,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    pub fn new(category: impl Into<String>, spent: Money, budget: Money) -> Self {
        let percentage = spent.percent_of(budget);
        Self {
            category: category.into(),
            spent,
            budget,
            percentage,
            status: BudgetStatus::from_percentage(percentage),
        }
    }

    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.status == BudgetStatus::OverBudget
    }
}

/// Categories that appear in `expenses` but have no budget, first-seen order
pub fn categories_without_budget(expenses: &[Expense], budgets: &[CategoryBudget]) -> Vec<String> {
    let budgeted: HashSet<&str> = budgets.iter().map(|b| b.category.as_str()).collect();
    let mut seen = HashSet::new();

    expenses
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !budgeted.contains(c) && seen.insert(*c))
        .map(str::to_string)
        .collect()
}

/// Monthly and per-category budget standing
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub monthly_budget: Money,
    pub total_spent: Money,
    /// One row per category budget, in registry order
    pub categories: Vec<BudgetProgress>,
    pub unbudgeted_categories: Vec<String>,
}

impl BudgetOverview {
    pub fn generate(expenses: &[Expense], monthly_budget: Money, budgets: &[CategoryBudget]) -> Self {
        let by_category = spending_by_category(expenses);

        let categories = budgets
            .iter()
            .map(|b| {
                let spent = by_category.get(&b.category).copied().unwrap_or_default();
                BudgetProgress::new(b.category.clone(), spent, b.amount)
            })
            .collect();

        Self {
            monthly_budget,
            total_spent: total_spent(expenses),
            categories,
            unbudgeted_categories: categories_without_budget(expenses, budgets),
        }
    }

    /// Monthly budget minus total spent; negative when over
    pub fn remaining(&self) -> Money {
        self.monthly_budget - self.total_spent
    }

    /// Total spent as a percentage of the monthly budget
    pub fn percent_spent(&self) -> f64 {
        self.total_spent.percent_of(self.monthly_budget)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }

    pub fn is_near_limit(&self) -> bool {
        self.percent_spent() > NEAR_LIMIT_THRESHOLD
    }

    /// Sum of every category budget
    pub fn total_allocated(&self) -> Money {
        self.categories.iter().map(|c| c.budget).sum()
    }

    /// The first `n` progress rows
    pub fn preview(&self, n: usize) -> &[BudgetProgress] {
        &self.categories[..n.min(self.categories.len())]
    }

    pub fn over_budget_categories(&self) -> impl Iterator<Item = &BudgetProgress> {
        self.categories.iter().filter(|c| c.is_over_budget())
    }
}
