//! Pipelines that copy query results from one database into another.
//!
//! Each supported (source, target) pair maps to the load options that match
//! what the source client writes to stdout. Adding a pair is one more entry
//! in [`PIPELINES`].

use super::copy::{self, CopyOptions, MYSQL_NULL, POSTGRES_NULL, SQLITE_NULL};
use crate::error::DbPipeError;
use crate::models::{Database, DatabaseType};

/// Load options for the target side of a pipeline.
type LoadOptions = fn() -> CopyOptions;

/// Registered source/target pairs.
const PIPELINES: &[((DatabaseType, DatabaseType), LoadOptions)] = &[
    (
        (DatabaseType::PostgreSQL, DatabaseType::PostgreSQL),
        postgres_to_postgres,
    ),
    (
        (DatabaseType::MySQL, DatabaseType::PostgreSQL),
        mysql_to_postgres,
    ),
    (
        (DatabaseType::SqlServer, DatabaseType::PostgreSQL),
        sql_server_to_postgres,
    ),
    (
        (DatabaseType::SQLite, DatabaseType::PostgreSQL),
        sqlite_to_postgres,
    ),
];

fn postgres_to_postgres() -> CopyOptions {
    CopyOptions::new().with_null_value_string(POSTGRES_NULL)
}

fn mysql_to_postgres() -> CopyOptions {
    CopyOptions::new().with_null_value_string(MYSQL_NULL)
}

fn sql_server_to_postgres() -> CopyOptions {
    // sqsh -m csv writes a header row
    CopyOptions::new().with_csv_format(true).with_skip_header(true)
}

fn sqlite_to_postgres() -> CopyOptions {
    // sqlite3 -quote writes comma separated SQL literals
    CopyOptions::new()
        .with_csv_format(true)
        .with_quote_char("'")
        .with_null_value_string(SQLITE_NULL)
}

/// Returns whether a pipeline is registered for the pair.
pub fn is_supported(source_type: DatabaseType, target_type: DatabaseType) -> bool {
    lookup(source_type, target_type).is_some()
}

/// Lists every registered (source, target) pair.
pub fn supported_pairs() -> impl Iterator<Item = (DatabaseType, DatabaseType)> {
    PIPELINES.iter().map(|(pair, _)| *pair)
}

fn lookup(source_type: DatabaseType, target_type: DatabaseType) -> Option<LoadOptions> {
    PIPELINES
        .iter()
        .find(|(pair, _)| *pair == (source_type, target_type))
        .map(|(_, load_options)| *load_options)
}

pub(crate) fn render(
    source: &Database,
    target: &Database,
    target_table: &str,
    timezone: Option<&str>,
    default_timezone: &str,
) -> crate::Result<String> {
    let load_options = lookup(source.database_type(), target.database_type()).ok_or(
        DbPipeError::unsupported_pair(source.database_type(), target.database_type()),
    )?;

    let mut options = load_options();
    if let Some(timezone) = timezone {
        options = options.with_timezone(timezone);
    }
    let load_timezone = options.timezone.as_deref().unwrap_or(default_timezone);

    let load = copy::render_from_stdin(target, target_table, &options, load_timezone)?;
    let dump = copy::render_to_stdout(source, default_timezone)?;
    Ok(format!("{} \\\n  | {}", dump, load))
}
