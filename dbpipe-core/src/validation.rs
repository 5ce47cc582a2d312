//! Validation of SQL identifiers embedded in generated statements.
//!
//! The target table of a load is written into a `COPY` statement, so it is
//! checked against a strict pattern before any command is built.

use crate::error::DbPipeError;
use regex::Regex;
use std::sync::OnceLock;

/// An unquoted name, or a double-quoted name without embedded quotes.
const IDENTIFIER_PART: &str = r#"(?:[A-Za-z_][A-Za-z0-9_$]*|"[^"\x00]+")"#;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Pattern is a compile-time constant
        #[allow(clippy::expect_used)]
        Regex::new(&format!(r"^{0}(?:\.{0}){{0,2}}$", IDENTIFIER_PART))
            .expect("Invalid identifier pattern")
    })
}

/// Checks that a table name is a plain or schema-qualified SQL identifier.
///
/// Accepts `table`, `schema.table` and `catalog.schema.table`, where each part
/// is either unquoted (letters, digits, `_`, `$`) or double-quoted.
///
/// # Errors
/// Returns `InvalidIdentifier` for anything else
///
/// # Example
/// ```rust
/// use dbpipe_core::validation::validate_table_name;
///
/// assert!(validate_table_name("staging.orders").is_ok());
/// assert!(validate_table_name("orders; DROP TABLE users").is_err());
/// ```
pub fn validate_table_name(table: &str) -> crate::Result<()> {
    if identifier_pattern().is_match(table) {
        Ok(())
    } else {
        Err(DbPipeError::invalid_identifier(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        for table in [
            "orders",
            "_tmp",
            "staging.orders",
            "dwh.staging.orders_2024",
            "t$1",
            "\"Order Items\"",
            "public.\"Mixed Case\"",
        ] {
            assert!(validate_table_name(table).is_ok(), "{}", table);
        }
    }

    #[test]
    fn test_invalid_table_names() {
        for table in [
            "",
            "1orders",
            "orders;",
            "orders FROM STDIN; DROP TABLE x",
            "a.b.c.d",
            "\"unterminated",
            "\"\"",
            "orders'",
            "$(id)",
            ".orders",
        ] {
            let result = validate_table_name(table);
            assert!(
                matches!(result, Err(DbPipeError::InvalidIdentifier { .. })),
                "{:?}",
                table
            );
        }
    }
}
