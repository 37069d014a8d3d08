//! Shared SQLite connection and schema.
//!
//! Rules and servers live in one database file. Every access goes through a
//! single mutex-guarded connection, so writers are serialized and each
//! multi-statement change runs inside its own transaction.

use crate::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS import_rules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        element_id INTEGER,
        item_id INTEGER,
        behavior TEXT NOT NULL,
        CHECK (element_id IS NOT NULL OR item_id IS NOT NULL)
    );

    CREATE UNIQUE INDEX IF NOT EXISTS import_rules_scope
        ON import_rules (COALESCE(element_id, -1), COALESCE(item_id, -1));

    CREATE TABLE IF NOT EXISTS servers (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL,
        is_default INTEGER NOT NULL DEFAULT 0
    );

    CREATE UNIQUE INDEX IF NOT EXISTS servers_single_default
        ON servers (is_default) WHERE is_default = 1;
";

/// Handle to the metabridge database. Cheap to clone; clones share the
/// connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened metabridge database");
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub(crate) fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

/// Converts a host id to SQLite's signed integer.
pub(crate) fn to_sql_id(id: u64) -> StoreResult<i64> {
    i64::try_from(id).map_err(|_| StoreError::InvalidData(format!("id {id} out of range")))
}

pub(crate) fn from_sql_id(id: i64) -> StoreResult<u64> {
    u64::try_from(id).map_err(|_| StoreError::InvalidData(format!("negative id {id}")))
}
