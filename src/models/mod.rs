//! Core data models for trip-ledger
//!
//! This module contains the data structures that represent the travel
//! budgeting domain: trips, expenses, money amounts, currencies, and
//! category buckets.

pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;
pub mod trip;

pub use category::ExpenseCategory;
pub use currency::Currency;
pub use expense::Expense;
pub use ids::{ExpenseId, IdSource, SequenceSource, TripId, UuidSource};
pub use money::Money;
pub use trip::Trip;
