//! trip-ledger - Core library for a personal travel budget tracker
//!
//! This library owns the durable state and the derived numbers of a
//! travel budget tracker: users create trips with a budget and date
//! range, log categorized expenses against them, and view aggregate
//! spending statistics. Rendering is somebody else's job; a presentation
//! layer reads and writes through the store and asks the engine for
//! metrics to display.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (trips, expenses, money, currencies)
//! - `storage`: JSON file storage layer and the [`LedgerStore`] coordinator
//! - `audit`: Append-only change log for store mutations
//! - `engine`: Pure derived-metric functions over trip snapshots
//!
//! The engine depends only on `models`; the store never computes derived
//! metrics. Mutations persist the full updated state before returning,
//! and "not found" is always a return value, never an error.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trip_ledger::config::LedgerPaths;
//! use trip_ledger::engine;
//! use trip_ledger::models::{Currency, Money};
//! use trip_ledger::storage::LedgerStore;
//!
//! # fn main() -> Result<(), trip_ledger::LedgerError> {
//! let store = LedgerStore::open(LedgerPaths::new()?)?;
//! let trip = store.create_trip(
//!     "Tokyo",
//!     "Tokyo, Japan",
//!     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
//!     Currency::Jpy,
//!     Money::from_major(200_000),
//! )?;
//!
//! let remaining = engine::remaining_budget(&trip);
//! println!("{}", engine::format_currency(remaining, &trip.currency));
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
