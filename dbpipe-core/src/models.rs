//! Database descriptors.
//!
//! A descriptor holds the connection parameters of one database and is
//! immutable once built. [`Database`] is the closed set of supported kinds;
//! every builder in [`crate::shell`] matches on it exhaustively.

use crate::error::DbPipeError;
use crate::security::Password;
use serde::Deserialize;
use std::path::PathBuf;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatabaseType {
    /// PostgreSQL, queried with `psql`
    PostgreSQL,
    /// MySQL or MariaDB, queried with `mysql`
    MySQL,
    /// Microsoft SQL Server, queried with `sqsh`
    SqlServer,
    /// SQLite file, queried with `sqlite3`
    SQLite,
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseType::PostgreSQL => write!(f, "PostgreSQL"),
            DatabaseType::MySQL => write!(f, "MySQL"),
            DatabaseType::SqlServer => write!(f, "SQL Server"),
            DatabaseType::SQLite => write!(f, "SQLite"),
        }
    }
}

/// Connection parameters for a PostgreSQL database (`psql`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostgresDb {
    /// Server hostname or socket directory
    pub host: Option<String>,
    /// Server port
    pub port: Option<u16>,
    /// Database name
    pub database: Option<String>,
    /// Login user
    pub user: Option<String>,
    /// Login password
    pub password: Option<Password>,
}

/// Connection parameters for a MySQL database (`mysql`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MysqlDb {
    /// Server hostname or socket directory
    pub host: Option<String>,
    /// Server port
    pub port: Option<u16>,
    /// Database name
    pub database: Option<String>,
    /// Login user
    pub user: Option<String>,
    /// Login password
    pub password: Option<Password>,
    /// Require an encrypted connection
    #[serde(default)]
    pub ssl: bool,
}

/// Connection parameters for a SQL Server database (`sqsh`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SqlServerDb {
    /// Server hostname
    pub host: Option<String>,
    /// Database name
    pub database: Option<String>,
    /// Login user
    pub user: Option<String>,
    /// Login password
    pub password: Option<Password>,
}

/// A SQLite database file (`sqlite3`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SqliteDb {
    /// Path of the database file
    pub file_name: PathBuf,
}

/// A database descriptor of any supported kind.
///
/// Deserializes from an object tagged with `"type"`:
///
/// ```rust
/// use dbpipe_core::models::{Database, DatabaseType};
///
/// let db: Database = serde_json::from_str(
///     r#"{"type": "postgresql", "host": "localhost", "database": "dwh"}"#,
/// )?;
/// assert_eq!(db.database_type(), DatabaseType::PostgreSQL);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Database {
    /// PostgreSQL server
    #[serde(rename = "postgresql", alias = "postgres")]
    Postgres(PostgresDb),
    /// MySQL server
    #[serde(rename = "mysql", alias = "mariadb")]
    Mysql(MysqlDb),
    /// SQL Server instance
    #[serde(rename = "sqlserver", alias = "mssql")]
    SqlServer(SqlServerDb),
    /// SQLite file
    #[serde(rename = "sqlite")]
    Sqlite(SqliteDb),
}

impl Database {
    /// Returns the kind of this descriptor.
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Database::Postgres(_) => DatabaseType::PostgreSQL,
            Database::Mysql(_) => DatabaseType::MySQL,
            Database::SqlServer(_) => DatabaseType::SqlServer,
            Database::Sqlite(_) => DatabaseType::SQLite,
        }
    }

    /// Validates descriptor parameters.
    ///
    /// # Errors
    /// Returns error if a port is zero, a present text field is empty, or a
    /// SQLite descriptor has no file name or a non-UTF-8 one
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Database::Postgres(db) => {
                validate_port(db.port)?;
                validate_text("host", db.host.as_deref())?;
                validate_text("database", db.database.as_deref())?;
                validate_text("user", db.user.as_deref())
            }
            Database::Mysql(db) => {
                validate_port(db.port)?;
                validate_text("host", db.host.as_deref())?;
                validate_text("database", db.database.as_deref())?;
                validate_text("user", db.user.as_deref())
            }
            Database::SqlServer(db) => {
                validate_text("host", db.host.as_deref())?;
                validate_text("database", db.database.as_deref())?;
                validate_text("user", db.user.as_deref())
            }
            Database::Sqlite(db) => {
                if db.file_name.as_os_str().is_empty() {
                    return Err(DbPipeError::configuration(
                        "SQLite file_name cannot be empty",
                    ));
                }
                db.path().map(|_| ())
            }
        }
    }
}

fn validate_port(port: Option<u16>) -> crate::Result<()> {
    if port == Some(0) {
        return Err(DbPipeError::configuration("port must be greater than 0"));
    }
    Ok(())
}

fn validate_text(field: &str, value: Option<&str>) -> crate::Result<()> {
    if value.is_some_and(str::is_empty) {
        return Err(DbPipeError::configuration(format!(
            "{field} cannot be empty when given"
        )));
    }
    Ok(())
}

/// Writes `scheme://host:port/database` without user or password.
fn write_location(
    f: &mut std::fmt::Formatter<'_>,
    scheme: &str,
    host: Option<&str>,
    port: Option<u16>,
    database: Option<&str>,
) -> std::fmt::Result {
    write!(f, "{}://{}", scheme, host.unwrap_or_default())?;
    if let Some(port) = port {
        write!(f, ":{}", port)?;
    }
    if let Some(database) = database {
        write!(f, "/{}", database)?;
    }
    Ok(())
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Intentionally omit user and never include credentials
        match self {
            Database::Postgres(db) => write_location(
                f,
                "postgres",
                db.host.as_deref(),
                db.port,
                db.database.as_deref(),
            ),
            Database::Mysql(db) => write_location(
                f,
                "mysql",
                db.host.as_deref(),
                db.port,
                db.database.as_deref(),
            ),
            Database::SqlServer(db) => write_location(
                f,
                "mssql",
                db.host.as_deref(),
                None,
                db.database.as_deref(),
            ),
            Database::Sqlite(db) => write!(f, "sqlite://{}", db.file_name.display()),
        }
    }
}

impl PostgresDb {
    /// Creates an empty descriptor; absent parameters fall back to psql's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builder method to set port.
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Builder method to set user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Builder method to set password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }
}

impl MysqlDb {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builder method to set port.
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Builder method to set user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Builder method to set password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }

    /// Builder method to require SSL.
    pub const fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }
}

impl SqlServerDb {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Builder method to set user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Builder method to set password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }
}

impl SqliteDb {
    /// Creates a descriptor for the given database file.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Returns the file name as text.
    ///
    /// # Errors
    /// Returns a configuration error if the path is not valid UTF-8, since a
    /// lossy conversion would point the command at a different file
    pub fn path(&self) -> crate::Result<&str> {
        self.file_name.to_str().ok_or_else(|| {
            DbPipeError::configuration(format!(
                "SQLite file_name {} is not valid UTF-8",
                self.file_name.display()
            ))
        })
    }
}

impl From<PostgresDb> for Database {
    fn from(db: PostgresDb) -> Self {
        Self::Postgres(db)
    }
}

impl From<MysqlDb> for Database {
    fn from(db: MysqlDb) -> Self {
        Self::Mysql(db)
    }
}

impl From<SqlServerDb> for Database {
    fn from(db: SqlServerDb) -> Self {
        Self::SqlServer(db)
    }
}

impl From<SqliteDb> for Database {
    fn from(db: SqliteDb) -> Self {
        Self::Sqlite(db)
    }
}
