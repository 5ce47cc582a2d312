//! JSON configuration file holding database aliases.
//!
//! ```json
//! {
//!   "default_timezone": "Europe/Berlin",
//!   "databases": {
//!     "dwh": { "type": "postgresql", "host": "localhost", "database": "dwh" },
//!     "shop": "mysql://reader@shop-db:3306/shop",
//!     "legacy": { "type": "sqlite", "file_name": "/srv/legacy.db" }
//!   }
//! }
//! ```
//!
//! Entries are either tagged descriptor objects or connection URLs.

use super::catalog::DatabaseCatalog;
use crate::error::DbPipeError;
use crate::models::Database;
use crate::security::parse_database_url;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Timezone handed to clients when neither the caller nor the config sets one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatabaseEntry {
    Url(String),
    Descriptor(Database),
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_timezone")]
    default_timezone: String,
    #[serde(default)]
    databases: BTreeMap<String, DatabaseEntry>,
}

/// Database aliases and process-wide defaults.
///
/// # Example
/// ```rust
/// use dbpipe_core::config::{Config, DatabaseCatalog};
/// use dbpipe_core::models::DatabaseType;
///
/// let config = Config::from_json(r#"{"databases": {"dwh": "postgres://localhost/dwh"}}"#)?;
/// assert_eq!(config.database("dwh")?.database_type(), DatabaseType::PostgreSQL);
/// assert_eq!(config.default_timezone(), "Europe/Berlin");
/// # Ok::<(), dbpipe_core::DbPipeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    default_timezone: String,
    databases: BTreeMap<String, Database>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            databases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Creates an empty configuration with the default timezone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or holds
    /// an invalid descriptor
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DbPipeError::Io {
            context: format!("Failed to read config file {}", path.display()),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or a descriptor is invalid
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let file: ConfigFile = serde_json::from_str(json).map_err(|e| DbPipeError::Serialization {
            context: "Failed to parse database configuration".to_string(),
            source: e,
        })?;

        let mut databases = BTreeMap::new();
        for (alias, entry) in file.databases {
            let database = match entry {
                DatabaseEntry::Url(url) => parse_database_url(&url).map_err(|e| {
                    DbPipeError::configuration(format!("database '{}': {}", alias, e))
                })?,
                DatabaseEntry::Descriptor(database) => database,
            };
            database.validate().map_err(|e| {
                DbPipeError::configuration(format!("database '{}': {}", alias, e))
            })?;
            databases.insert(alias, database);
        }

        let config = Self {
            default_timezone: file.default_timezone,
            databases,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates process-wide settings.
    ///
    /// # Errors
    /// Returns error if the default timezone is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.default_timezone.trim().is_empty() {
            return Err(DbPipeError::configuration(
                "default_timezone cannot be empty",
            ));
        }
        Ok(())
    }

    /// Builder method to register a database under an alias.
    pub fn with_database(mut self, alias: impl Into<String>, database: impl Into<Database>) -> Self {
        self.databases.insert(alias.into(), database.into());
        self
    }

    /// Builder method to set the default timezone.
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }

    /// Iterates over configured aliases in sorted order.
    pub fn databases(&self) -> impl Iterator<Item = (&str, &Database)> {
        self.databases.iter().map(|(alias, db)| (alias.as_str(), db))
    }
}

impl DatabaseCatalog for Config {
    fn database(&self, alias: &str) -> crate::Result<&Database> {
        self.databases
            .get(alias)
            .ok_or_else(|| DbPipeError::alias_not_found(alias))
    }

    fn default_timezone(&self) -> &str {
        &self.default_timezone
    }
}
