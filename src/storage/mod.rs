//! Storage layer for trip-ledger
//!
//! Two durable documents: the trip collection and the current-trip
//! pointer, plus an append-only audit log of mutations. [`LedgerStore`]
//! coordinates them and is the single entry point the presentation layer
//! talks to. It derives nothing: metrics over the records it returns live
//! in [`crate::engine`].

pub mod file_io;
pub mod session;
pub mod trips;

pub use file_io::{read_json, write_json_atomic};
pub use session::SessionStore;
pub use trips::{sort_expenses_by_date, sort_trips_by_creation, CategoryFilter, TripRepository};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{
    Currency, Expense, ExpenseId, IdSource, Money, Trip, TripId, UuidSource,
};

/// Main storage coordinator
///
/// Owns the trip collection, the current-trip pointer, the audit log, and
/// the identifier source used when building new records. Every mutating
/// operation persists the full updated state before returning; not-found
/// outcomes are return values, never errors.
pub struct LedgerStore {
    paths: LedgerPaths,
    trips: TripRepository,
    session: SessionStore,
    audit: AuditLogger,
    ids: Box<dyn IdSource>,
}

impl LedgerStore {
    /// Open a store at the given paths, minting UUIDs for new records
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        Self::open_with_ids(paths, Box::new(UuidSource))
    }

    /// Open a store with a custom identifier source
    ///
    /// Tests inject a [`SequenceSource`] here for deterministic IDs.
    ///
    /// [`SequenceSource`]: crate::models::SequenceSource
    pub fn open_with_ids(paths: LedgerPaths, ids: Box<dyn IdSource>) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let store = Self {
            trips: TripRepository::new(paths.trips_file()),
            session: SessionStore::new(paths.session_file()),
            audit: AuditLogger::new(paths.audit_log()),
            ids,
            paths,
        };
        store.trips.load()?;
        store.session.load()?;
        Ok(store)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The audit log, for change-history inspection
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    // --- Trips ---

    /// All trips, in unspecified order (callers sort)
    pub fn list_trips(&self) -> LedgerResult<Vec<Trip>> {
        self.trips.list()
    }

    /// Append a trip
    ///
    /// ID uniqueness is the caller's responsibility; duplicates are not
    /// detected and later lookups resolve to the first match.
    pub fn add_trip(&self, trip: Trip) -> LedgerResult<()> {
        let entry = AuditEntry::create(
            EntityType::Trip,
            trip.id.as_str(),
            Some(trip.name.clone()),
            &trip,
        );
        self.trips.add(trip)?;
        self.audit.log(&entry)
    }

    /// Look up a trip by ID
    pub fn get_trip(&self, id: &TripId) -> LedgerResult<Option<Trip>> {
        self.trips.get(id)
    }

    /// Overwrite a whole trip record; false if the ID is absent
    pub fn replace_trip(&self, id: &TripId, trip: Trip) -> LedgerResult<bool> {
        let entry = AuditEntry::update(
            EntityType::Trip,
            id.as_str(),
            Some(trip.name.clone()),
            &trip,
        );
        if !self.trips.replace(id, trip)? {
            return Ok(false);
        }
        self.audit.log(&entry)?;
        Ok(true)
    }

    /// Delete a trip and all its expenses; false if the ID is absent
    ///
    /// Clears the current-trip pointer when it referenced the deleted
    /// trip; any other selection is left untouched.
    pub fn delete_trip(&self, id: &TripId) -> LedgerResult<bool> {
        let removed = match self.trips.get(id)? {
            Some(trip) => trip,
            None => return Ok(false),
        };

        if !self.trips.delete(id)? {
            return Ok(false);
        }

        if self.session.current_trip_id()?.as_ref() == Some(id) {
            self.session.clear_current_trip()?;
        }

        self.audit.log(&AuditEntry::delete(
            EntityType::Trip,
            id.as_str(),
            Some(removed.name.clone()),
            &removed,
        ))?;
        Ok(true)
    }

    /// Build a trip with a minted ID and insert it
    pub fn create_trip(
        &self,
        name: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        currency: Currency,
        budget: Money,
    ) -> LedgerResult<Trip> {
        let trip = Trip::new(
            TripId::mint(self.ids.as_ref()),
            name,
            destination,
            start_date,
            end_date,
            currency,
            budget,
        );
        self.add_trip(trip.clone())?;
        Ok(trip)
    }

    // --- Expenses ---

    /// Append an expense to a trip; false if the trip is absent
    pub fn add_expense(&self, trip_id: &TripId, expense: Expense) -> LedgerResult<bool> {
        let entry = AuditEntry::create(
            EntityType::Expense,
            expense.id.as_str(),
            Some(expense.name.clone()),
            &expense,
        );
        if !self.trips.add_expense(trip_id, expense)? {
            return Ok(false);
        }
        self.audit.log(&entry)?;
        Ok(true)
    }

    /// Replace an expense by ID within a trip; false if either ID is absent
    pub fn update_expense(
        &self,
        trip_id: &TripId,
        expense_id: &ExpenseId,
        expense: Expense,
    ) -> LedgerResult<bool> {
        let entry = AuditEntry::update(
            EntityType::Expense,
            expense_id.as_str(),
            Some(expense.name.clone()),
            &expense,
        );
        if !self.trips.update_expense(trip_id, expense_id, expense)? {
            return Ok(false);
        }
        self.audit.log(&entry)?;
        Ok(true)
    }

    /// Remove an expense by ID within a trip; false if either ID is absent
    pub fn delete_expense(&self, trip_id: &TripId, expense_id: &ExpenseId) -> LedgerResult<bool> {
        let removed = self
            .trips
            .get(trip_id)?
            .and_then(|t| t.expense(expense_id).cloned());

        if !self.trips.delete_expense(trip_id, expense_id)? {
            return Ok(false);
        }

        if let Some(expense) = removed {
            self.audit.log(&AuditEntry::delete(
                EntityType::Expense,
                expense_id.as_str(),
                Some(expense.name.clone()),
                &expense,
            ))?;
        }
        Ok(true)
    }

    /// List a trip's expenses, optionally filtered to one category label
    pub fn list_expenses(
        &self,
        trip_id: &TripId,
        filter: &CategoryFilter,
    ) -> LedgerResult<Vec<Expense>> {
        self.trips.expenses(trip_id, filter)
    }

    /// Build an expense with a minted ID and append it to a trip
    ///
    /// Returns the new record, or `None` when the trip is absent (in which
    /// case nothing is inserted anywhere).
    pub fn create_expense(
        &self,
        trip_id: &TripId,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<Option<Expense>> {
        let expense = Expense::new(
            ExpenseId::mint(self.ids.as_ref()),
            name,
            category,
            amount,
            date,
        );
        if self.add_expense(trip_id, expense.clone())? {
            Ok(Some(expense))
        } else {
            Ok(None)
        }
    }

    // --- Session ---

    /// Select the trip being viewed
    pub fn set_current_trip(&self, id: TripId) -> LedgerResult<()> {
        self.session.set_current_trip(id)
    }

    /// The trip currently selected for viewing, if any
    pub fn current_trip_id(&self) -> LedgerResult<Option<TripId>> {
        self.session.current_trip_id()
    }

    /// Clear the viewing selection
    pub fn clear_current_trip(&self) -> LedgerResult<()> {
        self.session.clear_current_trip()
    }
}
