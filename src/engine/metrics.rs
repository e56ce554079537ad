//! Money-derived trip metrics
//!
//! Pure functions over a trip snapshot. Nothing here validates the
//! snapshot: zero budgets, negative amounts, and out-of-range expense
//! dates all produce defined output instead of errors, so the rendering
//! layer never has to branch on failure.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ExpenseCategory, Money, Trip};

use super::schedule::{enumerate_date_range, trip_duration_days};

/// Sum of all expense amounts; zero for a trip with no expenses
pub fn total_expenses(trip: &Trip) -> Money {
    trip.expenses.iter().map(|e| e.amount).sum()
}

/// Budget minus total expenses; negative when over budget
pub fn remaining_budget(trip: &Trip) -> Money {
    trip.budget - total_expenses(trip)
}

/// Whether the trip has spent past its budget
pub fn is_over_budget(trip: &Trip) -> bool {
    remaining_budget(trip).is_negative()
}

/// Remaining budget spread evenly across the trip's duration
///
/// When the duration is zero or negative (inverted range), the remaining
/// budget is returned unchanged rather than dividing by it.
pub fn daily_budget(trip: &Trip) -> Money {
    let duration = trip_duration_days(trip);
    let remaining = remaining_budget(trip);

    if duration <= 0 {
        return remaining;
    }

    remaining.divide_evenly(duration)
}

/// Share of the budget consumed, as a percentage capped at 100
///
/// A zero or negative budget yields 0 rather than a division error.
pub fn budget_progress_percent(trip: &Trip) -> f64 {
    if !trip.budget.is_positive() {
        return 0.0;
    }

    let percent = total_expenses(trip).minor() as f64 / trip.budget.minor() as f64 * 100.0;
    percent.min(100.0)
}

/// Expense totals per category bucket
///
/// All six buckets are always present, zero-filled; expenses with
/// unrecognized labels land in `Other`.
pub fn expenses_by_category(trip: &Trip) -> BTreeMap<ExpenseCategory, Money> {
    let mut totals: BTreeMap<ExpenseCategory, Money> = ExpenseCategory::ALL
        .iter()
        .map(|c| (*c, Money::zero()))
        .collect();

    for expense in &trip.expenses {
        if let Some(total) = totals.get_mut(&expense.bucket()) {
            *total += expense.amount;
        }
    }

    totals
}

/// Each bucket's share of total expenses, in percent
///
/// All six buckets map to 0 when total expenses are zero or negative.
pub fn category_percentages(trip: &Trip) -> BTreeMap<ExpenseCategory, f64> {
    let totals = expenses_by_category(trip);
    let overall = total_expenses(trip);

    if !overall.is_positive() {
        return totals.into_keys().map(|c| (c, 0.0)).collect();
    }

    totals
        .into_iter()
        .map(|(category, amount)| {
            (
                category,
                amount.minor() as f64 / overall.minor() as f64 * 100.0,
            )
        })
        .collect()
}

/// Spend per calendar day across the trip's date range, zero-filled
///
/// The series covers every day from start to end; expenses dated outside
/// the range are ignored. This feeds daily-spending line charts directly.
pub fn daily_spending(trip: &Trip) -> BTreeMap<NaiveDate, Money> {
    let mut by_date: BTreeMap<NaiveDate, Money> =
        enumerate_date_range(trip.start_date, trip.end_date)
            .into_iter()
            .map(|d| (d, Money::zero()))
            .collect();

    for expense in &trip.expenses {
        if let Some(total) = by_date.get_mut(&expense.date) {
            *total += expense.amount;
        }
    }

    by_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Expense, ExpenseId, TripId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip_with_budget(budget: Money) -> Trip {
        Trip::new(
            TripId::new("t1"),
            "Trip",
            "Somewhere",
            date(2024, 6, 1),
            date(2024, 6, 5),
            Currency::Usd,
            budget,
        )
    }

    fn add(trip: &mut Trip, id: &str, category: &str, minor: i64, d: NaiveDate) {
        trip.expenses.push(Expense::new(
            ExpenseId::new(id),
            "Expense",
            category,
            Money::from_minor(minor),
            d,
        ));
    }

    #[test]
    fn test_totals_for_empty_trip() {
        let trip = trip_with_budget(Money::from_major(1000));
        assert_eq!(total_expenses(&trip), Money::zero());
        assert_eq!(remaining_budget(&trip), Money::from_major(1000));
        assert!(!is_over_budget(&trip));
    }

    #[test]
    fn test_remaining_is_budget_minus_total_exactly() {
        let mut trip = trip_with_budget(Money::from_minor(100_000));
        add(&mut trip, "e1", "food", 19_999, date(2024, 6, 1));
        add(&mut trip, "e2", "shopping", 55_001, date(2024, 6, 2));

        assert_eq!(total_expenses(&trip), Money::from_minor(75_000));
        assert_eq!(
            remaining_budget(&trip),
            trip.budget - total_expenses(&trip)
        );
        assert_eq!(remaining_budget(&trip), Money::from_minor(25_000));
    }

    #[test]
    fn test_over_budget_goes_negative() {
        let mut trip = trip_with_budget(Money::from_minor(10_000));
        add(&mut trip, "e1", "food", 15_000, date(2024, 6, 1));

        assert_eq!(remaining_budget(&trip), Money::from_minor(-5_000));
        assert!(is_over_budget(&trip));
    }

    #[test]
    fn test_daily_budget_divides_remaining_over_duration() {
        // 5-day trip, 400.00 remaining of 500.00
        let mut trip = trip_with_budget(Money::from_minor(50_000));
        add(&mut trip, "e1", "food", 10_000, date(2024, 6, 1));

        assert_eq!(daily_budget(&trip), Money::from_minor(8_000));
    }

    #[test]
    fn test_daily_budget_guards_inverted_range() {
        let mut trip = trip_with_budget(Money::from_minor(50_000));
        trip.start_date = date(2024, 6, 5);
        trip.end_date = date(2024, 6, 1);

        // Duration is non-positive: remaining comes back unchanged
        assert_eq!(daily_budget(&trip), Money::from_minor(50_000));
    }

    #[test]
    fn test_progress_percent() {
        let mut trip = trip_with_budget(Money::from_minor(100_000));
        add(&mut trip, "e1", "food", 25_000, date(2024, 6, 1));

        assert!((budget_progress_percent(&trip) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_percent_caps_at_100() {
        let mut trip = trip_with_budget(Money::from_minor(10_000));
        add(&mut trip, "e1", "food", 99_000, date(2024, 6, 1));

        assert_eq!(budget_progress_percent(&trip), 100.0);
    }

    #[test]
    fn test_progress_percent_zero_budget_is_zero() {
        let mut trip = trip_with_budget(Money::zero());
        add(&mut trip, "e1", "food", 5_000, date(2024, 6, 1));

        assert_eq!(budget_progress_percent(&trip), 0.0);

        let negative = trip_with_budget(Money::from_minor(-100));
        assert_eq!(budget_progress_percent(&negative), 0.0);
    }

    #[test]
    fn test_category_breakdown_always_has_six_buckets() {
        let trip = trip_with_budget(Money::from_major(1000));
        let breakdown = expenses_by_category(&trip);

        assert_eq!(breakdown.len(), 6);
        for category in ExpenseCategory::ALL {
            assert_eq!(breakdown[&category], Money::zero());
        }
    }

    #[test]
    fn test_category_breakdown_folds_unknown_into_other() {
        let mut trip = trip_with_budget(Money::from_major(1000));
        add(&mut trip, "e1", "food", 1_000, date(2024, 6, 1));
        add(&mut trip, "e2", "food", 2_000, date(2024, 6, 2));
        add(&mut trip, "e3", "scuba", 4_000, date(2024, 6, 3));
        add(&mut trip, "e4", "other", 500, date(2024, 6, 3));

        let breakdown = expenses_by_category(&trip);
        assert_eq!(breakdown[&ExpenseCategory::Food], Money::from_minor(3_000));
        assert_eq!(breakdown[&ExpenseCategory::Other], Money::from_minor(4_500));
        assert_eq!(breakdown[&ExpenseCategory::Shopping], Money::zero());
    }

    #[test]
    fn test_category_percentages() {
        let mut trip = trip_with_budget(Money::from_major(1000));
        add(&mut trip, "e1", "food", 7_500, date(2024, 6, 1));
        add(&mut trip, "e2", "shopping", 2_500, date(2024, 6, 2));

        let percentages = category_percentages(&trip);
        assert!((percentages[&ExpenseCategory::Food] - 75.0).abs() < f64::EPSILON);
        assert!((percentages[&ExpenseCategory::Shopping] - 25.0).abs() < f64::EPSILON);
        assert_eq!(percentages[&ExpenseCategory::Activities], 0.0);
    }

    #[test]
    fn test_category_percentages_no_spend_is_all_zero() {
        let trip = trip_with_budget(Money::from_major(1000));
        let percentages = category_percentages(&trip);

        assert_eq!(percentages.len(), 6);
        assert!(percentages.values().all(|&p| p == 0.0));
    }

    #[test]
    fn test_daily_spending_zero_fills_the_range() {
        let mut trip = trip_with_budget(Money::from_major(1000));
        add(&mut trip, "e1", "food", 1_000, date(2024, 6, 2));
        add(&mut trip, "e2", "food", 2_000, date(2024, 6, 2));
        add(&mut trip, "e3", "activities", 4_000, date(2024, 6, 4));

        let series = daily_spending(&trip);
        assert_eq!(series.len(), 5);
        assert_eq!(series[&date(2024, 6, 1)], Money::zero());
        assert_eq!(series[&date(2024, 6, 2)], Money::from_minor(3_000));
        assert_eq!(series[&date(2024, 6, 3)], Money::zero());
        assert_eq!(series[&date(2024, 6, 4)], Money::from_minor(4_000));
    }

    #[test]
    fn test_daily_spending_ignores_out_of_range_dates() {
        let mut trip = trip_with_budget(Money::from_major(1000));
        add(&mut trip, "e1", "food", 1_000, date(2024, 5, 20));
        add(&mut trip, "e2", "food", 2_000, date(2024, 7, 1));

        let series = daily_spending(&trip);
        assert_eq!(series.len(), 5);
        assert!(series.values().all(|&m| m.is_zero()));
    }
}
