//! Budget service
//!
//! Parses and checks budget figures typed by the user before they reach the
//! registry.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryBudget, Money};
use crate::storage::{BudgetRegistry, Persisted};

/// Service for budget management
pub struct BudgetService<'a> {
    registry: &'a mut BudgetRegistry,
}

impl<'a> BudgetService<'a> {
    pub fn new(registry: &'a mut BudgetRegistry) -> Self {
        Self { registry }
    }

    /// Set the monthly budget; it must be a positive amount
    pub fn set_monthly(&mut self, amount: &str) -> SpendlogResult<Persisted<Money>> {
        let amount = parse_amount(amount)?;
        if !amount.is_positive() {
            return Err(SpendlogError::Validation(
                "Monthly budget must be greater than zero".into(),
            ));
        }

        Ok(self.registry.set_monthly_budget(amount).map(|_| amount))
    }

    /// Set or overwrite a category budget; zero is allowed, negative is not
    pub fn set_category(&mut self, category: &str, amount: &str) -> SpendlogResult<Persisted<CategoryBudget>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(SpendlogError::Validation("Please select a category".into()));
        }

        let amount = parse_amount(amount)?;
        if amount.is_negative() {
            return Err(SpendlogError::Validation(
                "Category budget cannot be negative".into(),
            ));
        }

        Ok(self
            .registry
            .set_category_budget(category, amount)
            .map(|_| CategoryBudget::new(category, amount)))
    }

    /// Remove a category budget, reporting unknown categories
    pub fn remove_category(&mut self, category: &str) -> SpendlogResult<Persisted<usize>> {
        let category = category.trim();
        if self.registry.get(category).is_none() {
            return Err(SpendlogError::category_budget_not_found(category));
        }

        Ok(self.registry.remove_category_budget(category))
    }
}

fn parse_amount(text: &str) -> SpendlogResult<Money> {
    Money::parse(text)
        .map_err(|e| SpendlogError::Validation(format!("Invalid amount '{}': {}", text.trim(), e)))
}
