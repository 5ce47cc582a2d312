//! Commands that read SQL from stdin and run it with the native client.

use super::quote::{assign, option, present, quote};
use crate::models::{Database, MysqlDb, PostgresDb, SqlServerDb, SqliteDb};

/// sqsh treats `$` as a variable marker and only passes it through when
/// escaped with two backslashes. The first expression undoes existing
/// escaping, the second applies it.
const SQSH_ESCAPE_DOLLARS: &str = r"sed 's/\\\\$/\$/g;s/\$/\\\\$/g'";

/// sqsh ignores a final statement without `;`, and needs `\go` to run the batch.
const SQSH_TERMINATE_BATCH: &str = "(cat && echo ';') \\\n  | (cat && echo ';\n\\go')";

/// Renders the query command for a resolved descriptor.
///
/// # Errors
/// Returns a configuration error for a SQLite path that is not valid UTF-8
pub(crate) fn render(db: &Database, timezone: &str, echo_queries: bool) -> crate::Result<String> {
    Ok(match db {
        Database::Postgres(db) => postgres(db, timezone, echo_queries),
        Database::Mysql(db) => mysql(db),
        Database::SqlServer(db) => sql_server(db),
        Database::Sqlite(db) => sqlite(db)?,
    })
}

/// A zero port means "not set".
fn port(port: Option<u16>) -> Option<u16> {
    port.filter(|&p| p != 0)
}

fn postgres(db: &PostgresDb, timezone: &str, echo_queries: bool) -> String {
    let mut args = vec![assign("PGTZ", timezone)];
    if let Some(password) = db.password.as_ref().map(|p| p.expose()).filter(|p| !p.is_empty()) {
        args.push(assign("PGPASSWORD", password));
    }
    args.push("PGOPTIONS=--client-min-messages=warning".to_string());
    args.push("psql".to_string());
    if let Some(user) = present(db.user.as_ref()) {
        args.push(assign("--username", user));
    }
    if let Some(host) = present(db.host.as_ref()) {
        args.push(assign("--host", host));
    }
    if let Some(port) = port(db.port) {
        args.push(format!("--port={}", port));
    }
    if echo_queries {
        args.push("--echo-all".to_string());
    }
    args.push("--no-psqlrc --set ON_ERROR_STOP=on".to_string());
    if let Some(database) = present(db.database.as_ref()) {
        args.push(assign("--dbname", database));
    }
    args.join(" ")
}

fn mysql(db: &MysqlDb) -> String {
    let mut args = Vec::new();
    if let Some(password) = db.password.as_ref().map(|p| p.expose()).filter(|p| !p.is_empty()) {
        args.push(assign("MYSQL_PWD", password));
    }
    args.push("mysql --default-character-set=utf8mb4".to_string());
    if let Some(user) = present(db.user.as_ref()) {
        args.push(assign("--user", user));
    }
    if let Some(host) = present(db.host.as_ref()) {
        args.push(assign("--host", host));
    }
    if let Some(port) = port(db.port) {
        args.push(format!("--port={}", port));
    }
    if db.ssl {
        args.push("--ssl".to_string());
    }
    if let Some(database) = present(db.database.as_ref()) {
        args.push(assign("--database", database));
    }
    args.join(" ")
}

fn sql_server(db: &SqlServerDb) -> String {
    let mut args = vec!["sqsh".to_string()];
    if let Some(user) = present(db.user.as_ref()) {
        args.push(option("-U", user));
    }
    if let Some(password) = db.password.as_ref().map(|p| p.expose()).filter(|p| !p.is_empty()) {
        args.push(option("-P", password));
    }
    if let Some(host) = present(db.host.as_ref()) {
        args.push(option("-S", host));
    }
    if let Some(database) = present(db.database.as_ref()) {
        args.push(option("-D", database));
    }
    format!(
        "{} | {} \\\n  | {}",
        SQSH_ESCAPE_DOLLARS,
        SQSH_TERMINATE_BATCH,
        args.join(" ")
    )
}

fn sqlite(db: &SqliteDb) -> crate::Result<String> {
    let path = db.path()?;
    // a leading `-` would be read as an option by test, echo and sqlite3
    let file_name = if path.starts_with('-') {
        quote(&format!("./{}", path)).into_owned()
    } else {
        quote(path).into_owned()
    };
    // sqlite3 silently creates missing files, so check existence first
    Ok(format!(
        "(test -f {0} && cat || >&2 echo {0} not found) \\\n  | sqlite3 -bail {0}",
        file_name
    ))
}
