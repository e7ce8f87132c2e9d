//! Dashboard
//!
//! Everything the overview screen shows, computed in one pass from a snapshot.

use chrono::NaiveDate;

use super::budget_overview::{BudgetOverview, BudgetProgress};
use super::spending::{recent_expenses, top_categories};
use super::trend::{time_series, TrendSeries};
use super::TimeRange;
use crate::config::Settings;
use crate::models::{CategoryBudget, Expense, Money};

/// How many rows each dashboard panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub top_categories: usize,
    pub budget_preview: usize,
    pub recent: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            top_categories: 3,
            budget_preview: 3,
            recent: 5,
        }
    }
}

impl From<&Settings> for DashboardLimits {
    fn from(settings: &Settings) -> Self {
        Self {
            top_categories: settings.top_categories,
            budget_preview: settings.budget_preview,
            recent: settings.recent_limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub overview: BudgetOverview,
    pub trend: TrendSeries,
    pub top_categories: Vec<(String, Money)>,
    pub recent: Vec<Expense>,
    limits: DashboardLimits,
}

impl Dashboard {
    pub fn generate(
        expenses: &[Expense],
        monthly_budget: Money,
        budgets: &[CategoryBudget],
        range: TimeRange,
        today: NaiveDate,
        limits: DashboardLimits,
    ) -> Self {
        Self {
            overview: BudgetOverview::generate(expenses, monthly_budget, budgets),
            trend: time_series(expenses, range, today),
            top_categories: top_categories(expenses, limits.top_categories),
            recent: recent_expenses(expenses, limits.recent),
            limits,
        }
    }

    /// The budget progress rows shown on the dashboard
    pub fn budget_preview(&self) -> &[BudgetProgress] {
        self.overview.preview(self.limits.budget_preview)
    }

    pub fn limits(&self) -> DashboardLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init::{sample_category_budgets, sample_expenses, SAMPLE_MONTHLY_BUDGET};

    #[test]
    fn test_dashboard_from_sample_data() {
        let expenses = sample_expenses();
        let budgets = sample_category_budgets();
        let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();

        let dashboard = Dashboard::generate(
            &expenses,
            SAMPLE_MONTHLY_BUDGET,
            &budgets,
            TimeRange::Week,
            today,
            DashboardLimits::default(),
        );

        assert_eq!(dashboard.overview.total_spent, Money::from_cents(28_373));
        assert_eq!(dashboard.overview.remaining(), Money::from_cents(171_627));

        let top: Vec<_> = dashboard.top_categories.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(top, vec!["Utilities", "Dining", "Groceries"]);

        assert_eq!(dashboard.budget_preview().len(), 3);
        assert_eq!(dashboard.budget_preview()[0].category, "Groceries");
        assert_eq!(dashboard.recent.len(), 5);
        assert_eq!(dashboard.recent[0].id.as_str(), "1");

        // 2025-05-09..=2025-05-15 holds four of the five samples
        assert_eq!(dashboard.trend.total(), Money::from_cents(20_848));
    }

    #[test]
    fn test_limits_follow_settings() {
        let mut settings = Settings::default();
        settings.recent_limit = 2;
        settings.top_categories = 1;

        let dashboard = Dashboard::generate(
            &sample_expenses(),
            Money::zero(),
            &[],
            TimeRange::Month,
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            DashboardLimits::from(&settings),
        );

        assert_eq!(dashboard.recent.len(), 2);
        assert_eq!(dashboard.top_categories.len(), 1);
        assert!(dashboard.budget_preview().is_empty());
    }
}
