//! The shared SQLite handle (`spec.md` §5): a single connection behind a
//! blocking mutex, mirroring the teacher's `Database` wrapper around
//! `Mutex<Connection>`. Every store call runs on a `spawn_blocking` worker so
//! a slow query never stalls the async runtime; SQLite itself serializes
//! writers, so no additional application-level locking is needed.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::migrations;

/// A cloneable handle to the GophKeeper SQLite database.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (creating if absent) the database at `path` and applies any
    /// pending migrations. Pass `:memory:` for an ephemeral, process-local
    /// database (used by tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        migrations::run(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on a blocking-pool thread.
    pub(crate) async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().expect("database mutex poisoned");
            f(&guard).map_err(Error::from)
        })
        .await?
    }
}
