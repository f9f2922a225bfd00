//! Schema migrations, applied at store initialization (`spec.md` §6).
//!
//! A lightweight `user_version`-gated sequence of `execute_batch` calls
//! stands in for full migration tooling, which `spec.md` §1 scopes out as an
//! external collaborator. Each entry is idempotent and additive; nothing is
//! ever edited in place once shipped.

use rusqlite::Connection;

use crate::error::Result;

const MIGRATIONS: &[&str] = &[
    // v1: users and secrets tables.
    r#"
    CREATE TABLE users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    );

    CREATE TABLE secrets (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES users(id),
        name     TEXT NOT NULL,
        content  BLOB NOT NULL,
        version  TEXT NOT NULL,
        UNIQUE(owner_id, name)
    );
    "#,
];

/// Applies every migration newer than the database's current `user_version`,
/// in order, inside one transaction per migration.
pub fn run(conn: &Connection) -> Result<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for (idx, migration) in MIGRATIONS.iter().enumerate() {
        let version = idx as i64 + 1;
        if version <= current {
            continue;
        }
        conn.execute_batch(migration)?;
        conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
        tracing::info!(version, "applied gophkeeper-db migration");
    }

    Ok(())
}
