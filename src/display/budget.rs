//! Budget display formatting

use super::report::{format_bar, separator, truncate};
use super::DisplayStyle;
use crate::models::CategoryBudget;
use crate::reports::{BudgetOverview, BudgetProgress, BudgetStatus};

const BAR_WIDTH: usize = 20;

/// One progress line: spent against budget with a bar capped at 100%
pub fn format_progress_row(progress: &BudgetProgress, style: &DisplayStyle) -> String {
    let bar = format_bar(progress.percentage.min(100.0), 100.0, BAR_WIDTH);
    let note = match progress.status {
        BudgetStatus::OverBudget => "Over budget".to_string(),
        BudgetStatus::Warning => format!("{:.0}% used !", progress.percentage),
        BudgetStatus::OnTrack => format!("{:.0}% used", progress.percentage),
    };

    format!(
        "{:<16} {:>11} / {:<11} {} {}",
        truncate(&progress.category, 16),
        style.money(progress.spent),
        style.money(progress.budget),
        bar,
        note
    )
}

/// Monthly summary, per-category progress, and unbudgeted categories
pub fn format_budget_overview(overview: &BudgetOverview, style: &DisplayStyle) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly budget:  {}\n", style.money(overview.monthly_budget)));
    output.push_str(&format!(
        "Total spent:     {} ({:.0}% of budget)\n",
        style.money(overview.total_spent),
        overview.percent_spent()
    ));
    if overview.is_over_budget() {
        output.push_str(&format!(
            "Over budget by:  {}\n",
            style.money(overview.remaining().abs())
        ));
    } else {
        output.push_str(&format!("Remaining:       {}\n", style.money(overview.remaining())));
    }

    output.push('\n');
    output.push_str(&format_progress_section(&overview.categories, style));

    if !overview.unbudgeted_categories.is_empty() {
        output.push_str(&format!(
            "\nCategories without a budget: {}\n",
            overview.unbudgeted_categories.join(", ")
        ));
    }

    output
}

pub(crate) fn format_progress_section(rows: &[BudgetProgress], style: &DisplayStyle) -> String {
    if rows.is_empty() {
        return "No category budgets set.\n".to_string();
    }

    let mut output = String::from("Category budgets\n");
    output.push_str(&separator(72));
    output.push('\n');
    for row in rows {
        output.push_str(&format_progress_row(row, style));
        output.push('\n');
    }
    output
}

/// Plain list of category budgets in registry order
pub fn format_budget_list(budgets: &[CategoryBudget], style: &DisplayStyle) -> String {
    if budgets.is_empty() {
        return "No category budgets set.\n".to_string();
    }

    let mut output = String::new();
    for budget in budgets {
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            budget.category,
            style.money(budget.amount)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_progress_row_notes() {
        let style = DisplayStyle::default();

        let on_track = BudgetProgress::new("Dining", Money::from_cents(5000), Money::from_cents(25_000));
        assert!(format_progress_row(&on_track, &style).ends_with("20% used"));

        let warning = BudgetProgress::new("Dining", Money::from_cents(22_500), Money::from_cents(25_000));
        assert!(format_progress_row(&warning, &style).ends_with("90% used !"));

        let over = BudgetProgress::new("Dining", Money::from_cents(30_000), Money::from_cents(25_000));
        let row = format_progress_row(&over, &style);
        assert!(row.ends_with("Over budget"));
        assert!(row.contains("$300.00 / $250.00"));
        assert_eq!(row.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_overview_over_budget() {
        let overview = BudgetOverview {
            monthly_budget: Money::from_cents(1000),
            total_spent: Money::from_cents(1500),
            categories: Vec::new(),
            unbudgeted_categories: vec!["Pets".into()],
        };

        let output = format_budget_overview(&overview, &DisplayStyle::default());
        assert!(output.contains("Over budget by:  $5.00"));
        assert!(output.contains("No category budgets set."));
        assert!(output.contains("Categories without a budget: Pets"));
    }

    #[test]
    fn test_budget_list() {
        let budgets = vec![CategoryBudget::new("Dining", Money::from_cents(25_000))];
        let output = format_budget_list(&budgets, &DisplayStyle::default());
        assert!(output.starts_with("Dining"));
        assert!(output.contains("$250.00"));
        assert_eq!(format_budget_list(&[], &DisplayStyle::default()), "No category budgets set.\n");
    }
}
