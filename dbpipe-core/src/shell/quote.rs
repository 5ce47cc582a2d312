//! Quoting of values interpolated into generated commands.
//!
//! Every user-, password-, host-, database- or path-derived value goes
//! through [`quote`] before it becomes part of a command, so values with
//! whitespace or shell metacharacters reach the client as a single argument.

use std::borrow::Cow;

/// Quotes a value for a POSIX shell.
///
/// Values made only of safe characters are returned unchanged.
///
/// # Example
/// ```rust
/// use dbpipe_core::shell::quote;
///
/// assert_eq!(quote("localhost"), "localhost");
/// assert_eq!(quote("my host"), "'my host'");
/// ```
pub fn quote(value: &str) -> Cow<'_, str> {
    // shell-words leaves these bare; they trigger tilde, brace or history expansion
    if value.contains(['~', '{', '}', '!', '^']) {
        return Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")));
    }
    shell_words::quote(value)
}

/// Renders `name=value` with the value quoted, for flags and environment assignments.
pub(crate) fn assign(name: &str, value: &str) -> String {
    format!("{}={}", name, quote(value))
}

/// Renders `flag value` as two shell words.
pub(crate) fn option(flag: &str, value: &str) -> String {
    format!("{} {}", flag, quote(value))
}

/// Renders a SQL string literal, doubling embedded single quotes.
pub(crate) fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Returns the value unless it is absent or empty.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_values_unchanged() {
        assert_eq!(quote("localhost"), "localhost");
        assert_eq!(quote("Europe/Berlin"), "Europe/Berlin");
        assert_eq!(quote("db.example.com"), "db.example.com");
    }

    #[test]
    fn test_quote_metacharacters() {
        for value in [
            "a b", "x;rm -rf /", "$(whoami)", "`id`", "it's", "a|b", "", "~/db", "{a,b}", "!x",
            "'~'",
        ] {
            let quoted = quote(value);
            let words = shell_words::split(&quoted).unwrap();
            assert_eq!(words, vec![value.to_string()], "quoting {:?}", value);
        }
    }

    #[test]
    fn test_quote_expansion_characters() {
        assert_eq!(quote("~/app.db"), "'~/app.db'");
        assert_eq!(quote("{a,b}"), "'{a,b}'");
    }

    #[test]
    fn test_assign_is_single_word() {
        let rendered = assign("--host", "my host");
        let words = shell_words::split(&rendered).unwrap();
        assert_eq!(words, vec!["--host=my host".to_string()]);
    }

    #[test]
    fn test_option_is_two_words() {
        let rendered = option("-U", "sa user");
        let words = shell_words::split(&rendered).unwrap();
        assert_eq!(words, vec!["-U".to_string(), "sa user".to_string()]);
    }

    #[test]
    fn test_sql_literal() {
        assert_eq!(sql_literal(","), "','");
        assert_eq!(sql_literal(""), "''");
        assert_eq!(sql_literal("'"), "''''");
        assert_eq!(sql_literal("\""), "'\"'");
    }

    #[test]
    fn test_present() {
        let empty = String::new();
        let value = "x".to_string();
        assert_eq!(present(None), None);
        assert_eq!(present(Some(&empty)), None);
        assert_eq!(present(Some(&value)), Some("x"));
    }
}
