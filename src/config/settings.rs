//! User settings for trip-ledger
//!
//! Persisted preferences consumed by whichever presentation layer sits on
//! top of the store: default currency for new trips and preferred list
//! orderings. The schema version field exists for forward migrations.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Ordering preference for trip and expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

/// User settings for trip-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code preselected when creating a trip
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Preferred ordering for the trip list
    #[serde(default)]
    pub trip_sort: SortOrder,

    /// Preferred ordering for expense listings
    #[serde(default)]
    pub expense_sort: SortOrder,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            trip_sort: SortOrder::default(),
            expense_sort: SortOrder::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Defaults are not persisted here; the caller decides when to save
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_currency, "USD");
        assert_eq!(settings.trip_sort, SortOrder::Newest);
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_currency, "USD");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_currency: "EUR".to_string(),
            expense_sort: SortOrder::Oldest,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, "EUR");
        assert_eq!(loaded.expense_sort, SortOrder::Oldest);
        assert_eq!(loaded.trip_sort, SortOrder::Newest);
    }

    #[test]
    fn test_sort_order_serde() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Newest).unwrap(),
            "\"newest\""
        );
        let back: SortOrder = serde_json::from_str("\"oldest\"").unwrap();
        assert_eq!(back, SortOrder::Oldest);
    }
}
