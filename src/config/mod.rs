//! Configuration and path management for trip-ledger

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, SortOrder};
