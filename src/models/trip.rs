//! Trip model
//!
//! A planned journey with a budget, date range, and currency, owning a
//! collection of expenses. Trips are the unit of persistence: every
//! mutation stores the whole record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::expense::Expense;
use super::ids::{ExpenseId, TripId};
use super::money::Money;

/// A trip with its budget and owned expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Identifier, unique across the store; uniqueness is a caller
    /// precondition and is not checked on insert
    pub id: TripId,

    /// Display name
    pub name: String,

    /// Destination display string
    pub destination: String,

    /// First calendar day of the trip
    pub start_date: NaiveDate,

    /// Last calendar day of the trip; intended to be >= `start_date`,
    /// never validated
    pub end_date: NaiveDate,

    /// The single currency all of this trip's amounts are in
    pub currency: Currency,

    /// Total budget in major-unit-agnostic money
    pub budget: Money,

    /// When the trip was created; immutable
    pub created_at: DateTime<Utc>,

    /// Owned expenses in insertion order; records stored without this
    /// field load as an empty collection
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Trip {
    /// Create a new trip with no expenses, stamping the creation time
    pub fn new(
        id: TripId,
        name: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        currency: Currency,
        budget: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            destination: destination.into(),
            start_date,
            end_date,
            currency,
            budget,
            created_at: Utc::now(),
            expenses: Vec::new(),
        }
    }

    /// Find an expense by ID (first match)
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }
}
