//! Budget models
//!
//! A category budget is a monthly allocation keyed by category label. The
//! overall monthly budget is a bare [`Money`] and is not derived from these.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Monthly allocation for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Category label; unique within the registry
    pub category: String,

    /// Allocated amount, never negative
    pub amount: Money,
}

impl CategoryBudget {
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

impl fmt::Display for CategoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}
