//! Reports module for spendlog
//!
//! The aggregation engine: pure functions over a snapshot of the ledger
//! (totals, per-category sums, trend buckets) and the derived views built on
//! them (spending breakdown, budget overview, dashboard). Nothing here is
//! cached; every call recomputes from the expenses it is handed.

pub mod budget_overview;
pub mod dashboard;
pub mod spending;
pub mod trend;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use budget_overview::{categories_without_budget, BudgetOverview, BudgetProgress, BudgetStatus};
pub use dashboard::{Dashboard, DashboardLimits};
pub use spending::{
    recent_expenses, spending_by_category, top_categories, total_spent, CategorySpending,
    SpendingReport,
};
pub use trend::{time_series, TrendBucket, TrendSeries};

/// Bucketing for the spending trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Seven daily buckets ending today
    Week,
    /// Four seven-day buckets covering the trailing 28 days
    #[default]
    Month,
    /// Twelve calendar months including the current one
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Month, TimeRange::Year];

    /// Number of buckets this range produces
    pub const fn bucket_count(&self) -> usize {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 4,
            TimeRange::Year => 12,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "w" => Ok(TimeRange::Week),
            "month" | "m" => Ok(TimeRange::Month),
            "year" | "y" => Ok(TimeRange::Year),
            other => Err(format!(
                "Unknown time range '{}'. Use week, month or year",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_month() {
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }

    #[test]
    fn test_parse_and_display() {
        for range in TimeRange::ALL {
            assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), range);
        }
        assert_eq!("Y".parse::<TimeRange>().unwrap(), TimeRange::Year);
        assert!("fortnight".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"week\"");
        let range: TimeRange = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(range, TimeRange::Year);
    }
}
