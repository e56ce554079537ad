//! Audit logging for store mutations
//!
//! Every mutation that goes through the [`LedgerStore`] appends an entry
//! here, giving a durable change history alongside the current state.
//!
//! [`LedgerStore`]: crate::storage::LedgerStore

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
