//! Preference manager that merges config.toml defaults with DB overrides.
//!
//! Config values serve as defaults; DB values (user_preferences table) override them.
//! Writes always go to the DB, never to the config file.
use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::storage::Database;

// ============================================================================
// PreferenceManager
// ============================================================================

/// Merged preference store: config.toml defaults + DB overrides.
///
/// On load, config values are flattened into a `HashMap<String, String>`, then
/// all DB preferences are layered on top. Reads are in-memory O(1). Writes
/// persist to the DB and update the in-memory map atomically.
pub struct PreferenceManager {
    prefs: HashMap<String, String>,
}

impl PreferenceManager {
    /// Load preferences by merging config defaults with DB overrides.
    ///
    /// 1. Flatten `Config` fields into dotted key-value pairs
    /// 2. Query all rows from `user_preferences` table
    /// 3. DB values overwrite config values for matching keys
    pub async fn load(config: &Config, db: &Database) -> Result<Self> {
        let mut prefs = Self::flatten_config(config);

        // Layer DB preferences on top (DB wins over config)
        let db_prefs = db.get_preferences_by_prefix("").await?;
        for (key, value) in db_prefs {
            prefs.insert(key, value);
        }

        Ok(Self { prefs })
    }

    /// Create from config only (no DB). Fallback for when DB load fails.
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefs: Self::flatten_config(config),
        }
    }

    /// Get a preference value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.prefs.get(key).map(String::as_str)
    }

    /// Set a preference: writes to DB and updates in-memory map.
    pub async fn set(&mut self, db: &Database, key: &str, value: &str) -> Result<()> {
        db.set_preference(key, value).await?;
        self.prefs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    // ========================================================================
    // Type-safe Accessors
    // ========================================================================

    /// Stored theme preference name: "light", "dark" or "system".
    pub fn theme_preference(&self) -> &str {
        self.get("theme").unwrap_or("system")
    }

    /// Number of entries shown in the popular listing.
    pub fn popular_limit(&self) -> usize {
        self.get("popular_limit")
            .and_then(|v| v.parse().ok())
            .unwrap_or(crate::catalog::DEFAULT_POPULAR_LIMIT)
    }

    /// Optional catalog file replacing the built-in data.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.get("catalog_path").map(PathBuf::from)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Flatten Config struct into key-value pairs.
    fn flatten_config(config: &Config) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("theme".to_string(), config.theme.clone());
        map.insert(
            "popular_limit".to_string(),
            config.popular_limit.to_string(),
        );
        if let Some(path) = &config.catalog_path {
            map.insert(
                "catalog_path".to_string(),
                path.to_string_lossy().into_owned(),
            );
        }

        map
    }
}

// ============================================================================
// Tests
// ============================================================================
