//! Report formatting utilities for terminal output
//!
//! Text renderings of the spending breakdown, the trend chart and the
//! dashboard, plus the small layout helpers they share.

use super::budget::format_progress_section;
use super::expense::format_expense_list;
use super::DisplayStyle;
use crate::reports::{Dashboard, SpendingReport, TimeRange, TrendSeries};

const REPORT_WIDTH: usize = 72;
const CHART_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
///
/// Any positive value gets at least one filled cell.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.clamp(1, width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

fn range_title(range: TimeRange) -> &'static str {
    match range {
        TimeRange::Week => "This Week",
        TimeRange::Month => "This Month",
        TimeRange::Year => "This Year",
    }
}

/// Spending by category, optionally limited to the top `limit` rows
pub fn format_spending_report(report: &SpendingReport, limit: Option<usize>, style: &DisplayStyle) -> String {
    let mut output = String::new();

    output.push_str("Spending by Category\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<24} {:>12} {:>7} {:>8}\n",
        "Category", "Amount", "Count", "%"
    ));

    let rows = match limit {
        Some(n) => report.top(n),
        None => &report.categories[..],
    };
    for row in rows {
        output.push_str(&format!(
            "{:<24} {:>12} {:>7} {:>8}\n",
            truncate(&row.category, 24),
            style.money(row.total),
            row.count,
            format_percentage(row.percentage)
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>12} {:>7}\n",
        "TOTAL",
        style.money(report.total),
        report.expense_count
    ));

    output
}

/// Horizontal bar chart of a trend, scaled to its largest bucket
pub fn format_trend(series: &TrendSeries, style: &DisplayStyle) -> String {
    let mut output = format!("Spending trend ({})\n", range_title(series.range));
    let max = series.max_value().to_decimal();

    for bucket in &series.buckets {
        output.push_str(&format!(
            "{:<7} {} {:>11}\n",
            bucket.label,
            format_bar(bucket.total.to_decimal(), max, CHART_WIDTH),
            style.money(bucket.total)
        ));
    }

    output
}

/// The full dashboard: summary, trend, top categories, budgets, recent expenses
pub fn format_dashboard(dashboard: &Dashboard, style: &DisplayStyle) -> String {
    let overview = &dashboard.overview;
    let mut output = String::new();

    output.push_str(&format!("Financial Overview ({})\n", range_title(dashboard.trend.range)));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total budget: {}   Total spent: {} ({:.0}%)   Remaining: {}\n",
        style.money(overview.monthly_budget),
        style.money(overview.total_spent),
        overview.percent_spent(),
        style.money(overview.remaining())
    ));
    if overview.is_near_limit() {
        output.push_str("Warning: over 90% of the monthly budget is spent\n");
    }

    output.push('\n');
    output.push_str(&format_trend(&dashboard.trend, style));

    output.push_str("\nTop categories\n");
    if dashboard.top_categories.is_empty() {
        output.push_str("  (none)\n");
    }
    for (category, amount) in &dashboard.top_categories {
        output.push_str(&format!(
            "  {:<20} {:>12} {:>6}\n",
            truncate(category, 20),
            style.money(*amount),
            format_percentage(amount.percent_of(overview.total_spent))
        ));
    }

    output.push('\n');
    output.push_str(&format_progress_section(dashboard.budget_preview(), style));

    output.push_str("\nRecent transactions\n");
    output.push_str(&format_expense_list(&dashboard.recent, style));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{time_series, DashboardLimits};
    use crate::storage::init::{sample_category_budgets, sample_expenses, SAMPLE_MONTHLY_BUDGET};
    use chrono::NaiveDate;

    fn may_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 1.0, 4), "░░░░");
        assert_eq!(format_bar(0.01, 100.0, 4).chars().filter(|c| *c == '█').count(), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_trend_chart_on_empty_ledger() {
        let series = time_series(&[], TimeRange::Week, may_15());
        let output = format_trend(&series, &DisplayStyle::default());

        assert_eq!(output.lines().count(), 8);
        assert!(output.contains("Thu"));
        assert!(!output.contains('█'));
    }

    #[test]
    fn test_spending_report_limit() {
        let report = SpendingReport::generate(&sample_expenses());
        let output = format_spending_report(&report, Some(2), &DisplayStyle::default());

        assert!(output.contains("Utilities"));
        assert!(output.contains("Dining"));
        assert!(!output.contains("Groceries"));
        assert!(output.contains("$283.73"));
    }

    #[test]
    fn test_dashboard_sections() {
        let dashboard = Dashboard::generate(
            &sample_expenses(),
            SAMPLE_MONTHLY_BUDGET,
            &sample_category_budgets(),
            TimeRange::Month,
            may_15(),
            DashboardLimits::default(),
        );
        let output = format_dashboard(&dashboard, &DisplayStyle::default());

        assert!(output.starts_with("Financial Overview (This Month)"));
        assert!(output.contains("Remaining: $1716.27"));
        assert!(output.contains("Week 4"));
        assert!(output.contains("Top categories"));
        assert!(output.contains("Recent transactions"));
        assert!(output.contains("Weekly grocery shopping"));
        assert!(!output.contains("Warning: over 90%"));
    }
}
