//! Commands that dump query results to stdout or load stdin into a table.

use super::query;
use super::quote::{quote, sql_literal};
use crate::error::DbPipeError;
use crate::models::Database;
use crate::validation::validate_table_name;

/// How `psql --no-align` prints NULL when no `\pset null` is configured.
pub const POSTGRES_NULL: &str = "";

/// How `mysql` prints NULL in batch (non-tty) mode.
pub const MYSQL_NULL: &str = "NULL";

/// How `sqlite3 -quote` prints NULL.
pub const SQLITE_NULL: &str = "NULL";

/// Formatting options for loading delimited data from stdin.
///
/// Options map onto PostgreSQL `COPY ... FROM STDIN WITH` clauses; `None`
/// leaves the server default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Treat the input as CSV
    pub csv_format: bool,
    /// Skip the first input line
    pub skip_header: bool,
    /// Character separating columns
    pub delimiter_char: Option<String>,
    /// Character quoting values
    pub quote_char: Option<String>,
    /// String that denotes NULL
    pub null_value_string: Option<String>,
    /// Client timezone; the catalog default when absent
    pub timezone: Option<String>,
}

impl CopyOptions {
    /// Creates options with every clause left at the server default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to treat input as CSV.
    pub const fn with_csv_format(mut self, csv_format: bool) -> Self {
        self.csv_format = csv_format;
        self
    }

    /// Builder method to skip a header line.
    pub const fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Builder method to set the column delimiter.
    pub fn with_delimiter_char(mut self, delimiter_char: impl Into<String>) -> Self {
        self.delimiter_char = Some(delimiter_char.into());
        self
    }

    /// Builder method to set the quote character.
    pub fn with_quote_char(mut self, quote_char: impl Into<String>) -> Self {
        self.quote_char = Some(quote_char.into());
        self
    }

    /// Builder method to set the NULL sentinel.
    pub fn with_null_value_string(mut self, null_value_string: impl Into<String>) -> Self {
        self.null_value_string = Some(null_value_string.into());
        self
    }

    /// Builder method to set the client timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

pub(crate) fn render_to_stdout(db: &Database, timezone: &str) -> crate::Result<String> {
    Ok(match db {
        Database::Postgres(_) => format!(
            "{} --tuples-only --no-align --field-separator='\t' \\\n  | sed '/^$/d'",
            query::render(db, timezone, false)?
        ),
        Database::Mysql(_) => format!("{} --skip-column-names", query::render(db, timezone, true)?),
        Database::SqlServer(_) => format!("{} -m csv", query::render(db, timezone, true)?),
        Database::Sqlite(_) => format!(
            "{} -noheader -separator '\t' -quote",
            query::render(db, timezone, true)?
        ),
    })
}

pub(crate) fn render_from_stdin(
    db: &Database,
    target_table: &str,
    options: &CopyOptions,
    timezone: &str,
) -> crate::Result<String> {
    match db {
        Database::Postgres(_) => {
            let sql = copy_statement(target_table, options)?;
            Ok(format!(
                "{} \\\n      --command={}",
                query::render(db, timezone, true)?,
                quote(&sql)
            ))
        }
        Database::Mysql(_) | Database::SqlServer(_) | Database::Sqlite(_) => Err(
            DbPipeError::unsupported_database("copy_from_stdin_command", db.database_type()),
        ),
    }
}

/// Builds `COPY <table> FROM STDIN WITH ...`.
///
/// Clause order is fixed: CSV, HEADER, DELIMITER, NULL, QUOTE.
pub(crate) fn copy_statement(target_table: &str, options: &CopyOptions) -> crate::Result<String> {
    validate_table_name(target_table)?;

    let mut sql = format!("COPY {} FROM STDIN WITH", target_table);
    if options.csv_format {
        sql.push_str(" CSV");
    }
    if options.skip_header {
        sql.push_str(" HEADER");
    }
    if let Some(delimiter) = &options.delimiter_char {
        sql.push_str(&format!(" DELIMITER AS {}", sql_literal(delimiter)));
    }
    if let Some(null_value) = &options.null_value_string {
        sql.push_str(&format!(" NULL AS {}", sql_literal(null_value)));
    }
    if let Some(quote_char) = &options.quote_char {
        sql.push_str(&format!(" QUOTE AS {}", sql_literal(quote_char)));
    }
    Ok(sql)
}
