//! Trip repository for JSON storage
//!
//! The whole trip collection lives as one serialized array in trips.json.
//! Every mutation rewrites the full document before returning, so callers
//! never observe a partial write. Not-found outcomes are reported through
//! return values; an `Err` means the backing file itself failed.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SortOrder;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId, Trip, TripId};

use super::file_io::{read_json, write_json_atomic};

/// Expense listing filter: everything, or one category label exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    All,
    /// Exact match against the stored category label
    Matching(String),
}

impl CategoryFilter {
    /// Build a filter from a selection string, where `"all"` means no filter
    pub fn from_selection(selection: &str) -> Self {
        if selection == "all" {
            Self::All
        } else {
            Self::Matching(selection.to_string())
        }
    }

    fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Matching(label) => expense.category == *label,
        }
    }
}

/// Repository for the trip collection
///
/// Trip IDs are assumed unique by the caller; inserts perform no duplicate
/// check and lookups return the first match.
pub struct TripRepository {
    path: PathBuf,
    trips: RwLock<Vec<Trip>>,
}

impl TripRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            trips: RwLock::new(Vec::new()),
        }
    }

    /// Load the trip collection from disk (missing file means empty)
    pub fn load(&self) -> LedgerResult<()> {
        let loaded: Vec<Trip> = read_json(&self.path)?;
        *self.write_guard()? = loaded;
        Ok(())
    }

    /// Number of trips currently held
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_guard()?.len())
    }

    /// All trips, in stored (insertion) order
    pub fn list(&self) -> LedgerResult<Vec<Trip>> {
        Ok(self.read_guard()?.clone())
    }

    /// Append a trip and persist
    pub fn add(&self, trip: Trip) -> LedgerResult<()> {
        let mut trips = self.write_guard()?;
        trips.push(trip);
        self.persist(&trips)
    }

    /// Look up a trip by ID
    pub fn get(&self, id: &TripId) -> LedgerResult<Option<Trip>> {
        Ok(self.read_guard()?.iter().find(|t| &t.id == id).cloned())
    }

    /// Overwrite the trip with the given ID; false if no trip matches
    pub fn replace(&self, id: &TripId, trip: Trip) -> LedgerResult<bool> {
        let mut trips = self.write_guard()?;
        match trips.iter().position(|t| &t.id == id) {
            Some(index) => {
                trips[index] = trip;
                self.persist(&trips)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the trip with the given ID and all its expenses
    pub fn delete(&self, id: &TripId) -> LedgerResult<bool> {
        let mut trips = self.write_guard()?;
        let before = trips.len();
        trips.retain(|t| &t.id != id);

        if trips.len() == before {
            return Ok(false);
        }

        self.persist(&trips)?;
        Ok(true)
    }

    /// Append an expense to a trip; false if the trip is absent
    ///
    /// The expense itself is never validated.
    pub fn add_expense(&self, trip_id: &TripId, expense: Expense) -> LedgerResult<bool> {
        let mut trips = self.write_guard()?;
        match trips.iter_mut().find(|t| &t.id == trip_id) {
            Some(trip) => {
                trip.expenses.push(expense);
                self.persist(&trips)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace an expense by ID within a trip; false if either ID is absent
    pub fn update_expense(
        &self,
        trip_id: &TripId,
        expense_id: &ExpenseId,
        expense: Expense,
    ) -> LedgerResult<bool> {
        let mut trips = self.write_guard()?;
        let trip = match trips.iter_mut().find(|t| &t.id == trip_id) {
            Some(trip) => trip,
            None => return Ok(false),
        };

        match trip.expenses.iter().position(|e| &e.id == expense_id) {
            Some(index) => {
                trip.expenses[index] = expense;
                self.persist(&trips)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an expense by ID within a trip; false if either ID is absent
    pub fn delete_expense(&self, trip_id: &TripId, expense_id: &ExpenseId) -> LedgerResult<bool> {
        let mut trips = self.write_guard()?;
        let trip = match trips.iter_mut().find(|t| &t.id == trip_id) {
            Some(trip) => trip,
            None => return Ok(false),
        };

        let before = trip.expenses.len();
        trip.expenses.retain(|e| &e.id != expense_id);

        if trip.expenses.len() == before {
            return Ok(false);
        }

        self.persist(&trips)?;
        Ok(true)
    }

    /// List a trip's expenses, optionally filtered to one category
    ///
    /// An absent trip yields an empty list, matching the no-op error model.
    pub fn expenses(&self, trip_id: &TripId, filter: &CategoryFilter) -> LedgerResult<Vec<Expense>> {
        let trips = self.read_guard()?;
        let expenses = trips
            .iter()
            .find(|t| &t.id == trip_id)
            .map(|t| {
                t.expenses
                    .iter()
                    .filter(|e| filter.matches(e))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(expenses)
    }

    fn persist(&self, trips: &[Trip]) -> LedgerResult<()> {
        write_json_atomic(&self.path, &trips)
    }

    fn read_guard(&self) -> LedgerResult<RwLockReadGuard<'_, Vec<Trip>>> {
        self.trips
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> LedgerResult<RwLockWriteGuard<'_, Vec<Trip>>> {
        self.trips
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Sort trips by creation timestamp; the sort is stable
pub fn sort_trips_by_creation(mut trips: Vec<Trip>, order: SortOrder) -> Vec<Trip> {
    match order {
        SortOrder::Newest => trips.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => trips.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    trips
}

/// Sort expenses by their spend date (not creation time); the sort is stable
pub fn sort_expenses_by_date(mut expenses: Vec<Expense>, order: SortOrder) -> Vec<Expense> {
    match order {
        SortOrder::Newest => expenses.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => expenses.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    expenses
}
