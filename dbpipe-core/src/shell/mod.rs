//! Shell command generation for native database clients.
//!
//! [`ShellCommands`] builds, for any supported database:
//! - a command that reads SQL from stdin and runs it
//! - a command that runs a query and writes delimited rows to stdout
//! - a command that loads delimited rows from stdin into a table
//! - a pipeline copying query results from one database into another
//!
//! Nothing here runs a process; the caller executes the returned string in
//! a POSIX shell with `psql`, `mysql`, `sqsh`, `sqlite3` and `sed` on the path.
//!
//! # Example
//! ```rust
//! use dbpipe_core::config::Config;
//! use dbpipe_core::models::{MysqlDb, PostgresDb};
//! use dbpipe_core::shell::ShellCommands;
//!
//! let config = Config::new()
//!     .with_database("dwh", PostgresDb::new().with_host("localhost").with_database("dwh"))
//!     .with_database("shop", MysqlDb::new().with_host("localhost").with_database("shop"));
//! let commands = ShellCommands::new(&config);
//!
//! let pipeline = commands.copy_command("shop", "dwh", "staging.orders", None)?;
//! assert!(pipeline.contains("--skip-column-names"));
//! assert!(pipeline.contains("COPY staging.orders FROM STDIN WITH NULL AS"));
//! # Ok::<(), dbpipe_core::DbPipeError>(())
//! ```

mod copy;
mod pipeline;
mod query;
mod quote;

pub use copy::{CopyOptions, MYSQL_NULL, POSTGRES_NULL, SQLITE_NULL};
pub use pipeline::{is_supported, supported_pairs};
pub use quote::quote;

use crate::config::{DatabaseCatalog, DbRef};
use crate::models::Database;
use tracing::debug;

/// Command builder bound to a database catalog.
///
/// Every method accepts either an alias or a descriptor and resolves it
/// against the catalog first. Output depends only on the arguments and the
/// catalog, so repeated calls return identical strings.
#[derive(Clone, Copy)]
pub struct ShellCommands<'c> {
    catalog: &'c dyn DatabaseCatalog,
}

impl std::fmt::Debug for ShellCommands<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellCommands")
            .field("default_timezone", &self.catalog.default_timezone())
            .finish_non_exhaustive()
    }
}

impl<'c> ShellCommands<'c> {
    /// Creates a builder that resolves aliases and defaults through `catalog`.
    pub fn new(catalog: &'c dyn DatabaseCatalog) -> Self {
        Self { catalog }
    }

    fn resolve<'a>(&'a self, db: DbRef<'a>) -> crate::Result<&'a Database> {
        db.resolve(self.catalog)
    }

    /// Creates a shell command that receives a SQL query on stdin and executes it.
    ///
    /// # Arguments
    /// * `db` - Alias or descriptor of the database to run the query in
    /// * `timezone` - Client timezone (PostgreSQL only); catalog default when `None`
    /// * `echo_queries` - Whether the client prints executed queries (PostgreSQL only)
    ///
    /// # Errors
    /// - `AliasNotFound` if `db` is an unknown alias
    /// - `Configuration` if a SQLite path is not valid UTF-8
    ///
    /// # Example
    /// ```rust
    /// use dbpipe_core::config::Config;
    /// use dbpipe_core::models::{Database, MysqlDb};
    /// use dbpipe_core::shell::ShellCommands;
    ///
    /// let config = Config::new();
    /// let db = Database::from(MysqlDb::new().with_host("localhost").with_database("test"));
    /// let command = ShellCommands::new(&config).query_command(&db, None, true)?;
    /// assert_eq!(command, "mysql --default-character-set=utf8mb4 --host=localhost --database=test");
    /// # Ok::<(), dbpipe_core::DbPipeError>(())
    /// ```
    pub fn query_command<'a>(
        &'a self,
        db: impl Into<DbRef<'a>>,
        timezone: Option<&str>,
        echo_queries: bool,
    ) -> crate::Result<String> {
        let db = self.resolve(db.into())?;
        debug!("Building {} query command for {}", db.database_type(), db);

        let timezone = timezone.unwrap_or_else(|| self.catalog.default_timezone());
        query::render(db, timezone, echo_queries)
    }

    /// Creates a shell command that receives a query on stdin, executes it and
    /// writes the result rows to stdout without a header.
    ///
    /// # Errors
    /// Returns `AliasNotFound` if `db` is an unknown alias
    pub fn copy_to_stdout_command<'a>(&'a self, db: impl Into<DbRef<'a>>) -> crate::Result<String> {
        let db = self.resolve(db.into())?;
        debug!("Building {} copy-to-stdout command for {}", db.database_type(), db);

        copy::render_to_stdout(db, self.catalog.default_timezone())
    }

    /// Creates a shell command that reads delimited data from stdin and
    /// writes it to `target_table`.
    ///
    /// Only PostgreSQL targets are supported; the command issues
    /// `COPY <target_table> FROM STDIN WITH ...` built from `options`.
    ///
    /// # Errors
    /// - `AliasNotFound` if `db` is an unknown alias
    /// - `UnsupportedDatabase` if `db` is not PostgreSQL
    /// - `InvalidIdentifier` if `target_table` is not a safe table name
    pub fn copy_from_stdin_command<'a>(
        &'a self,
        db: impl Into<DbRef<'a>>,
        target_table: &str,
        options: &CopyOptions,
    ) -> crate::Result<String> {
        let db = self.resolve(db.into())?;
        debug!(
            "Building {} copy-from-stdin command for {} into {}",
            db.database_type(),
            db,
            target_table
        );

        let timezone = options
            .timezone
            .as_deref()
            .unwrap_or_else(|| self.catalog.default_timezone());
        copy::render_from_stdin(db, target_table, options, timezone)
    }

    /// Creates a shell pipeline that receives a query on stdin, executes it in
    /// `source` and writes the results to `target_table` in `target`.
    ///
    /// # Errors
    /// - `AliasNotFound` if either database is an unknown alias
    /// - `UnsupportedPair` if no pipeline is registered for the two kinds
    /// - `InvalidIdentifier` if `target_table` is not a safe table name
    pub fn copy_command<'a>(
        &'a self,
        source: impl Into<DbRef<'a>>,
        target: impl Into<DbRef<'a>>,
        target_table: &str,
        timezone: Option<&str>,
    ) -> crate::Result<String> {
        let source = self.resolve(source.into())?;
        let target = self.resolve(target.into())?;
        debug!(
            "Building {} -> {} copy pipeline from {} to {} into {}",
            source.database_type(),
            target.database_type(),
            source,
            target,
            target_table
        );

        pipeline::render(
            source,
            target,
            target_table,
            timezone,
            self.catalog.default_timezone(),
        )
    }
}
