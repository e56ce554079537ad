//! Expense model
//!
//! A single categorized spend entry owned by exactly one trip.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A categorized spend entry belonging to a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier, unique within the owning trip
    pub id: ExpenseId,

    /// Display name
    pub name: String,

    /// Category label, stored verbatim
    ///
    /// Values outside the six known buckets aggregate as `other` but are
    /// never rewritten here.
    pub category: String,

    /// Spend amount; the sign is not constrained by the model
    pub amount: Money,

    /// Calendar date of the spend, not checked against the trip's range
    pub date: NaiveDate,

    /// When the expense was recorded; immutable
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense, stamping the creation time
    pub fn new(
        id: ExpenseId,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            amount,
            date,
            created_at: Utc::now(),
        }
    }

    /// The aggregation bucket for this expense's stored label
    pub fn bucket(&self) -> ExpenseCategory {
        ExpenseCategory::from_label(&self.category)
    }
}
