//! Shell command generation for native database clients.
//!
//! This crate turns database descriptors into shell commands that run
//! queries through `psql`, `mysql`, `sqsh` or `sqlite3`, dump query results
//! to stdout, load stdin into a table, and pipe data between databases.
//!
//! # Guarantees
//! - Generation is a pure function of its arguments and the catalog
//! - Every interpolated value is shell-quoted
//! - Passwords never appear in logs, `Debug` or `Display` output
//! - Nothing is executed; the caller runs the returned command
//!
//! # Architecture
//! - [`models`]: closed sum type over the four database kinds
//! - [`config`]: alias catalog seam and its JSON-backed implementation
//! - [`shell`]: the builders, each an exhaustive match over the kind
//! - [`security`]: password container and connection URL parsing

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod security;
pub mod shell;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, DatabaseCatalog, DbRef};
pub use error::{DbPipeError, Result};
pub use logging::init_logging;
pub use models::{Database, DatabaseType, MysqlDb, PostgresDb, SqlServerDb, SqliteDb};
pub use security::{Password, parse_database_url};
pub use shell::{CopyOptions, ShellCommands};
