//! Session state: the current-trip pointer
//!
//! Which trip is being viewed is kept out of the trip records themselves,
//! in its own small document, and handed to the presentation layer as
//! explicit state rather than read from ambient globals. The pointer is
//! cleared when its referenced trip is deleted.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::TripId;

use super::file_io::{read_json, write_json_atomic};

/// Serializable session document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    /// ID of the trip currently selected for viewing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_trip_id: Option<TripId>,
}

/// Store for the current-trip pointer
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<TripId>>,
}

impl SessionStore {
    /// Create a session store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            current: RwLock::new(None),
        }
    }

    /// Load the pointer from disk (missing file means no selection)
    pub fn load(&self) -> LedgerResult<()> {
        let data: SessionData = read_json(&self.path)?;
        *self
            .current
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))? =
            data.current_trip_id;
        Ok(())
    }

    /// The currently selected trip ID, if any
    pub fn current_trip_id(&self) -> LedgerResult<Option<TripId>> {
        Ok(self
            .current
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?
            .clone())
    }

    /// Select a trip and persist the pointer
    pub fn set_current_trip(&self, id: TripId) -> LedgerResult<()> {
        self.store(Some(id))
    }

    /// Clear the selection and persist
    pub fn clear_current_trip(&self) -> LedgerResult<()> {
        self.store(None)
    }

    fn store(&self, id: Option<TripId>) -> LedgerResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *current = id.clone();
        write_json_atomic(
            &self.path,
            &SessionData {
                current_trip_id: id,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SessionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        store.load().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_starts_with_no_selection() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.current_trip_id().unwrap().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let (_temp_dir, store) = create_test_store();

        store.set_current_trip(TripId::new("t1")).unwrap();
        assert_eq!(store.current_trip_id().unwrap(), Some(TripId::new("t1")));

        store.clear_current_trip().unwrap();
        assert!(store.current_trip_id().unwrap().is_none());
    }

    #[test]
    fn test_pointer_survives_reload() {
        let (temp_dir, store) = create_test_store();
        store.set_current_trip(TripId::new("t1")).unwrap();

        let store2 = SessionStore::new(temp_dir.path().join("session.json"));
        store2.load().unwrap();
        assert_eq!(store2.current_trip_id().unwrap(), Some(TripId::new("t1")));
    }
}
