//! Date-derived trip metrics
//!
//! Duration, temporal status, range enumeration, and range labels. All
//! arithmetic is calendar-day based (`NaiveDate`), so results never shift
//! with daylight-saving transitions or the wall clock's time of day.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Trip;

/// Where a trip sits relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Starts after the given day
    Upcoming,
    /// The given day falls within the trip, endpoints included
    Ongoing,
    /// Ended before the given day
    Past,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Past => write!(f, "past"),
        }
    }
}

/// Inclusive day count of a trip
///
/// A trip starting and ending on the same day has duration 1. An inverted
/// range (end before start) yields zero or negative; consumers guard on
/// `<= 0` rather than this function rejecting it.
pub fn trip_duration_days(trip: &Trip) -> i64 {
    (trip.end_date - trip.start_date).num_days() + 1
}

/// Classify a trip against a specific day
///
/// Both the first and last calendar day count as ongoing.
pub fn trip_status_on(trip: &Trip, today: NaiveDate) -> TripStatus {
    if today < trip.start_date {
        TripStatus::Upcoming
    } else if today > trip.end_date {
        TripStatus::Past
    } else {
        TripStatus::Ongoing
    }
}

/// Classify a trip against the local calendar date
pub fn trip_status(trip: &Trip) -> TripStatus {
    trip_status_on(trip, Local::now().date_naive())
}

/// Every calendar date from start to end inclusive, ascending
///
/// Empty when end precedes start. This is the x-axis for zero-filled
/// daily-spending series.
pub fn enumerate_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Human label for a trip's date range, relative to a reference year
///
/// "Mar 1 - Mar 5" style. Both ends carry their year when the trip spans
/// a year boundary; the end also carries its year whenever it differs
/// from the reference year.
pub fn date_range_label_at(trip: &Trip, current_year: i32) -> String {
    let spans_years = trip.start_date.year() != trip.end_date.year();

    let start = format_end(trip.start_date, spans_years);
    let end = format_end(
        trip.end_date,
        spans_years || trip.end_date.year() != current_year,
    );

    format!("{} - {}", start, end)
}

/// Human label for a trip's date range, relative to the current local year
pub fn date_range_label(trip: &Trip) -> String {
    date_range_label_at(trip, Local::now().year())
}

fn format_end(date: NaiveDate, with_year: bool) -> String {
    if with_year {
        date.format("%b %-d, %Y").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}
