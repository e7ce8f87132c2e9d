//! Budget registry
//!
//! Holds the monthly budget and the per-category budgets. Each is persisted
//! under its own key (`monthlyBudget`, `categoryBudgets`) and written
//! independently; there is no transaction spanning both.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryBudget, Money};

use super::init::{sample_category_budgets, SAMPLE_MONTHLY_BUDGET};
use super::kv::{keys, write_through, KeyValueStore, Persisted};

/// The authoritative budget figures
pub struct BudgetRegistry {
    store: Arc<dyn KeyValueStore>,
    monthly: Money,
    categories: Vec<CategoryBudget>,
}

impl BudgetRegistry {
    /// Load both budget keys from `store`
    ///
    /// Keys that were never written fall back to the sample figures when
    /// `seed_samples` is set, otherwise to zero and an empty list. The monthly
    /// budget may be stored as a number or as a string holding a decimal.
    pub fn load(store: Arc<dyn KeyValueStore>, seed_samples: bool) -> SpendlogResult<Self> {
        let monthly = match store.get(keys::MONTHLY_BUDGET)? {
            Some(value) => serde_json::from_value::<Money>(value).map_err(|e| {
                SpendlogError::Storage(format!("Failed to parse stored monthly budget: {}", e))
            })?,
            None if seed_samples => SAMPLE_MONTHLY_BUDGET,
            None => Money::zero(),
        };

        let categories = match store.get(keys::CATEGORY_BUDGETS)? {
            Some(value) => serde_json::from_value::<Vec<CategoryBudget>>(value).map_err(|e| {
                SpendlogError::Storage(format!("Failed to parse stored category budgets: {}", e))
            })?,
            None if seed_samples => {
                info!("no stored category budgets; starting from sample data");
                sample_category_budgets()
            }
            None => Vec::new(),
        };

        debug!(monthly = %monthly, categories = categories.len(), "budget registry loaded");
        Ok(Self {
            store,
            monthly,
            categories,
        })
    }

    pub fn monthly_budget(&self) -> Money {
        self.monthly
    }

    pub fn set_monthly_budget(&mut self, amount: Money) -> Persisted<()> {
        self.monthly = amount;
        debug!(monthly = %amount, "monthly budget set");
        Persisted::new((), write_through(self.store.as_ref(), keys::MONTHLY_BUDGET, &self.monthly))
    }

    /// Insert or overwrite the budget for `category`
    ///
    /// Replaces the first entry with an equal category, otherwise appends.
    pub fn set_category_budget(&mut self, category: &str, amount: Money) -> Persisted<()> {
        match self.categories.iter_mut().find(|b| b.category == category) {
            Some(existing) => existing.amount = amount,
            None => self.categories.push(CategoryBudget::new(category, amount)),
        }
        debug!(category, amount = %amount, "category budget set");
        Persisted::new((), self.persist_categories())
    }

    /// Remove every entry for `category`; the value is how many were removed
    pub fn remove_category_budget(&mut self, category: &str) -> Persisted<usize> {
        let before = self.categories.len();
        self.categories.retain(|b| b.category != category);
        let removed = before - self.categories.len();
        debug!(category, removed, "category budget removed");
        Persisted::new(removed, self.persist_categories())
    }

    /// Overwrite both keys at once, as when restoring an export
    ///
    /// The two writes are independent; the first failure is reported.
    pub fn replace(&mut self, monthly: Money, categories: Vec<CategoryBudget>) -> Persisted<()> {
        self.monthly = monthly;
        self.categories = categories;
        debug!(monthly = %monthly, categories = self.categories.len(), "budget registry replaced");

        let monthly_write = write_through(self.store.as_ref(), keys::MONTHLY_BUDGET, &self.monthly);
        let categories_write = self.persist_categories();
        Persisted::new((), monthly_write.and(categories_write))
    }

    /// The budget for `category`, zero if none is set
    pub fn budget_for_category(&self, category: &str) -> Money {
        self.get(category).map_or(Money::zero(), |b| b.amount)
    }

    pub fn get(&self, category: &str) -> Option<&CategoryBudget> {
        self.categories.iter().find(|b| b.category == category)
    }

    pub fn list(&self) -> &[CategoryBudget] {
        &self.categories
    }

    /// Sum of all category budgets; may differ from the monthly budget
    pub fn total_allocated(&self) -> Money {
        self.categories.iter().map(|b| b.amount).sum()
    }

    fn persist_categories(&self) -> SpendlogResult<()> {
        write_through(self.store.as_ref(), keys::CATEGORY_BUDGETS, &self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{JsonFileStore, MemoryStore};
    use crate::storage::test_support::FailingStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn empty_registry() -> (Arc<MemoryStore>, BudgetRegistry) {
        let store = Arc::new(MemoryStore::new());
        let registry = BudgetRegistry::load(store.clone(), false).unwrap();
        (store, registry)
    }

    #[test]
    fn test_unset_category_is_zero() {
        let (_store, registry) = empty_registry();
        assert_eq!(registry.budget_for_category("Groceries"), Money::zero());
        assert_eq!(registry.monthly_budget(), Money::zero());
    }

    #[test]
    fn test_set_category_budget_overwrites() {
        let (_store, mut registry) = empty_registry();

        registry
            .set_category_budget("Groceries", Money::from_cents(5000))
            .into_value();
        assert_eq!(registry.budget_for_category("Groceries"), Money::from_cents(5000));

        registry
            .set_category_budget("Groceries", Money::from_cents(7500))
            .into_value();
        assert_eq!(registry.budget_for_category("Groceries"), Money::from_cents(7500));
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_new_categories_append_in_order() {
        let (_store, mut registry) = empty_registry();
        for category in ["Dining", "Travel", "Gifts"] {
            registry
                .set_category_budget(category, Money::from_cents(100))
                .into_value();
        }
        let order: Vec<_> = registry.list().iter().map(|b| b.category.as_str()).collect();
        assert_eq!(order, vec!["Dining", "Travel", "Gifts"]);
    }

    #[test]
    fn test_remove_category_budget() {
        let (_store, mut registry) = empty_registry();
        registry
            .set_category_budget("Dining", Money::from_cents(100))
            .into_value();

        assert_eq!(registry.remove_category_budget("Dining").into_value(), 1);
        assert_eq!(registry.budget_for_category("Dining"), Money::zero());
        assert_eq!(registry.remove_category_budget("Dining").into_value(), 0);
    }

    #[test]
    fn test_remove_drops_duplicate_entries() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                keys::CATEGORY_BUDGETS,
                &json!([
                    {"category": "Dining", "amount": 100},
                    {"category": "Dining", "amount": 200}
                ]),
            )
            .unwrap();
        let mut registry = BudgetRegistry::load(store, false).unwrap();

        assert_eq!(registry.budget_for_category("Dining"), Money::from_cents(10000));
        assert_eq!(registry.remove_category_budget("Dining").into_value(), 2);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_monthly_budget_is_independent_of_categories() {
        let (_store, mut registry) = empty_registry();
        registry.set_monthly_budget(Money::from_cents(100_000)).into_value();
        registry
            .set_category_budget("Housing", Money::from_cents(150_000))
            .into_value();

        assert_eq!(registry.monthly_budget(), Money::from_cents(100_000));
        assert_eq!(registry.total_allocated(), Money::from_cents(150_000));
    }

    #[test]
    fn test_samples_when_unset() {
        let store = Arc::new(MemoryStore::new());
        let registry = BudgetRegistry::load(store, true).unwrap();

        assert_eq!(registry.monthly_budget(), Money::from_cents(200_000));
        assert_eq!(registry.list().len(), 5);
        assert_eq!(registry.budget_for_category("Utilities"), Money::from_cents(30_000));
    }

    #[test]
    fn test_monthly_budget_accepts_text_encoding() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::MONTHLY_BUDGET, &json!("1850.5")).unwrap();

        let registry = BudgetRegistry::load(store, true).unwrap();
        assert_eq!(registry.monthly_budget(), Money::from_cents(185_050));
    }

    #[test]
    fn test_each_key_written_separately() {
        let (store, mut registry) = empty_registry();

        registry.set_monthly_budget(Money::from_cents(50_000)).into_value();
        assert_eq!(store.get(keys::MONTHLY_BUDGET).unwrap(), Some(json!(500)));
        assert!(store.get(keys::CATEGORY_BUDGETS).unwrap().is_none());

        registry
            .set_category_budget("Dining", Money::from_cents(2550))
            .into_value();
        assert_eq!(
            store.get(keys::CATEGORY_BUDGETS).unwrap(),
            Some(json!([{"category": "Dining", "amount": 25.5}]))
        );
    }

    #[test]
    fn test_reload_from_disk_matches_memory() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(temp_dir.path().to_path_buf()));

        let mut registry = BudgetRegistry::load(store.clone(), true).unwrap();
        registry.set_monthly_budget(Money::from_cents(300_000)).into_value();
        registry
            .set_category_budget("Travel", Money::from_cents(60_000))
            .into_value();
        registry.remove_category_budget("Dining").into_value();

        let reloaded = BudgetRegistry::load(store, false).unwrap();
        assert_eq!(reloaded.monthly_budget(), registry.monthly_budget());
        assert_eq!(reloaded.list(), registry.list());
    }

    #[test]
    fn test_replace_writes_both_keys() {
        let (store, mut registry) = empty_registry();

        let outcome = registry.replace(
            Money::from_cents(150_000),
            vec![CategoryBudget::new("Pets", Money::from_cents(6_000))],
        );

        assert!(!outcome.is_stale());
        assert_eq!(store.get(keys::MONTHLY_BUDGET).unwrap(), Some(json!(1500)));
        assert_eq!(
            store.get(keys::CATEGORY_BUDGETS).unwrap(),
            Some(json!([{"category": "Pets", "amount": 60}]))
        );
        assert_eq!(registry.budget_for_category("Pets"), Money::from_cents(6_000));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let store = Arc::new(FailingStore::new());
        let mut registry = BudgetRegistry::load(store, false).unwrap();

        let outcome = registry.set_monthly_budget(Money::from_cents(1000));
        assert!(outcome.is_stale());
        assert_eq!(registry.monthly_budget(), Money::from_cents(1000));
    }
}
