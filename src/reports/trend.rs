//! Spending trend
//!
//! Buckets expense amounts into consecutive date windows ending at a given
//! day. Bucket windows are inclusive at both ends and listed oldest first.

use chrono::{Datelike, Duration, NaiveDate};

use super::TimeRange;
use crate::models::{Expense, Money};

/// One window of the trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: Money,
}

impl TrendBucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Spending over a range, oldest bucket first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendSeries {
    pub range: TimeRange,
    pub buckets: Vec<TrendBucket>,
}

impl TrendSeries {
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Money> {
        self.buckets.iter().map(|b| b.total).collect()
    }

    /// Largest bucket total, never below one currency unit
    ///
    /// Used as the scale for proportional rendering.
    pub fn max_value(&self) -> Money {
        self.buckets
            .iter()
            .map(|b| b.total)
            .max()
            .unwrap_or_default()
            .max(Money::from_cents(100))
    }

    pub fn total(&self) -> Money {
        self.buckets.iter().map(|b| b.total).sum()
    }
}

/// Bucket `expenses` for `range`, ending on `today`
///
/// - week: seven single-day buckets, `today - 6` through `today`
/// - month: four seven-day buckets covering `today - 27` through `today`
/// - year: twelve calendar months, eleven months back through the current one
///
/// An expense dated outside every window is ignored.
pub fn time_series(expenses: &[Expense], range: TimeRange, today: NaiveDate) -> TrendSeries {
    let mut buckets = windows(range, today);
    for bucket in &mut buckets {
        bucket.total = expenses
            .iter()
            .filter(|e| bucket.contains(e.date))
            .map(|e| e.amount)
            .sum();
    }

    TrendSeries { range, buckets }
}

fn windows(range: TimeRange, today: NaiveDate) -> Vec<TrendBucket> {
    match range {
        TimeRange::Week => (0..7)
            .map(|i| {
                let day = today - Duration::days(6 - i);
                bucket(day.format("%a").to_string(), day, day)
            })
            .collect(),
        TimeRange::Month => (0..4)
            .map(|i| {
                let start = today - Duration::days(27 - 7 * i);
                let end = start + Duration::days(6);
                bucket(format!("Week {}", i + 1), start, end)
            })
            .collect(),
        TimeRange::Year => (0..12)
            .map(|i| {
                let (start, end) = month_bounds(today, 11 - i);
                bucket(start.format("%b").to_string(), start, end)
            })
            .collect(),
    }
}

fn bucket(label: String, start: NaiveDate, end: NaiveDate) -> TrendBucket {
    TrendBucket {
        label,
        start,
        end,
        total: Money::zero(),
    }
}

/// First and last day of the calendar month `months_back` before `today`'s
fn month_bounds(today: NaiveDate, months_back: i64) -> (NaiveDate, NaiveDate) {
    let index = today.year() as i64 * 12 + today.month0() as i64 - months_back;
    let (year, month0) = (index.div_euclid(12) as i32, index.rem_euclid(12) as u32);

    let start = first_of_month(year, month0);
    let next = if month0 == 11 {
        first_of_month(year + 1, 0)
    } else {
        first_of_month(year, month0 + 1)
    };
    (start, next - Duration::days(1))
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    // Day 1 exists for every month chrono can represent
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(NaiveDate::MIN)
}
