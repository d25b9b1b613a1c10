//! SQLite access to the read-only reference dataset.
//!
//! The dataset itself is an external artifact; this module only knows how to
//! open it and hand out request-scoped [`Session`]s. Each session owns its own
//! connection and releases it when dropped, so every exit path of a request
//! (report, not-found, fault) gives the connection back.
//!
//! Two sources are supported:
//! - a dataset file, opened read-only per session;
//! - an in-memory dataset seeded from a SQL script (tests, benchmarks). A
//!   uniquely named shared-cache database is kept alive by an anchor
//!   connection so per-request sessions all see the same rows.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{PokedexError, Result};

// ---------------------------------------------------------------------------
// ReferenceStore
// ---------------------------------------------------------------------------

/// Something a request can borrow a dataset session from.
pub trait ReferenceStore: Send + Sync {
    /// Open a session for one request.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::ReferenceStore`] if the dataset is unreachable.
    fn acquire(&self) -> Result<Session>;
}

/// A request-scoped connection to the dataset.
pub struct Session {
    conn: Connection,
    acquired: Instant,
}

impl Session {
    /// Wrap an already-open connection.
    #[must_use]
    pub fn new(conn: Connection) -> Self {
        debug!("Acquired reference store session");
        Self {
            conn,
            acquired: Instant::now(),
        }
    }

    /// The underlying connection.
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.conn.path())
            .finish_non_exhaustive()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!(
            held_us = self.acquired.elapsed().as_micros(),
            "Released reference store session"
        );
    }
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

enum Source {
    File(PathBuf),
    Memory {
        uri: String,
        _anchor: Mutex<Connection>,
    },
}

/// Handle to the SQLite reference dataset.
///
/// # Usage
///
/// ```no_run
/// # use pokedex_core::store::{ReferenceStore, SqliteStore};
/// # use pokedex_core::config::StoreConfig;
/// let store = SqliteStore::open(&StoreConfig::default())?;
/// let session = store.acquire()?;
/// # Ok::<(), pokedex_core::error::PokedexError>(())
/// ```
pub struct SqliteStore {
    source: Source,
    busy_timeout: Duration,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match &self.source {
            Source::File(path) => path.display().to_string(),
            Source::Memory { uri, .. } => uri.clone(),
        };
        f.debug_struct("SqliteStore")
            .field("source", &source)
            .field("busy_timeout", &self.busy_timeout)
            .finish()
    }
}

impl SqliteStore {
    /// Point the store at the dataset file named in `config`.
    ///
    /// The file is opened once up front so a missing or unreadable dataset
    /// is reported at startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Io`] if the file does not exist, or
    /// [`PokedexError::ReferenceStore`] if SQLite cannot open it.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.path.clone();
        if !path.exists() {
            return Err(PokedexError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("dataset not found: {}", path.display()),
            )));
        }
        let store = Self {
            source: Source::File(path),
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
        };
        drop(store.acquire()?);

        info!(
            path = %config.path.display(),
            busy_timeout_ms = config.busy_timeout_ms,
            "Reference store opened"
        );
        Ok(store)
    }

    /// Build an in-memory dataset by running `script` (schema and rows).
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::ReferenceStore`] if the script fails.
    pub fn from_script(script: &str) -> Result<Self> {
        let uri = format!("file:pokedex-{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let anchor = Connection::open_with_flags(&uri, flags)?;
        anchor.execute_batch(script)?;

        debug!(uri = %uri, bytes = script.len(), "In-memory reference store seeded");
        Ok(Self {
            source: Source::Memory {
                uri,
                _anchor: Mutex::new(anchor),
            },
            busy_timeout: Duration::from_millis(5000),
        })
    }

    /// Path of the dataset file, or `None` for an in-memory dataset.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::File(path) => Some(path),
            Source::Memory { .. } => None,
        }
    }
}

impl ReferenceStore for SqliteStore {
    fn acquire(&self) -> Result<Session> {
        let conn = match &self.source {
            Source::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?,
            Source::Memory { uri, .. } => {
                let conn = Connection::open_with_flags(
                    uri,
                    OpenFlags::SQLITE_OPEN_READ_WRITE
                        | OpenFlags::SQLITE_OPEN_URI
                        | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )?;
                conn.execute_batch("PRAGMA query_only = ON;")?;
                conn
            }
        };
        conn.busy_timeout(self.busy_timeout)?;
        Ok(Session::new(conn))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "
        CREATE TABLE gen1_types (typeIndex INTEGER PRIMARY KEY, typeName TEXT NOT NULL);
        INSERT INTO gen1_types VALUES (0, 'Normal'), (20, 'Fire');
    ";

    fn count_types(session: &Session) -> i64 {
        session
            .conn()
            .query_row("SELECT COUNT(*) FROM gen1_types", [], |row| row.get(0))
            .expect("count")
    }

    #[test]
    fn in_memory_sessions_share_data() {
        let store = SqliteStore::from_script(SCRIPT).expect("seed");
        let first = store.acquire().expect("first");
        let second = store.acquire().expect("second");
        assert_eq!(count_types(&first), 2);
        assert_eq!(count_types(&second), 2);
        assert!(store.path().is_none());
    }

    #[test]
    fn in_memory_stores_are_isolated() {
        let a = SqliteStore::from_script(SCRIPT).expect("seed a");
        let b = SqliteStore::from_script("CREATE TABLE gen1_types (typeIndex INTEGER, typeName TEXT);")
            .expect("seed b");
        assert_eq!(count_types(&a.acquire().expect("a")), 2);
        assert_eq!(count_types(&b.acquire().expect("b")), 0);
    }

    #[test]
    fn sessions_are_read_only() {
        let store = SqliteStore::from_script(SCRIPT).expect("seed");
        let session = store.acquire().expect("session");
        let result = session
            .conn()
            .execute("INSERT INTO gen1_types VALUES (1, 'Fighting')", []);
        assert!(result.is_err(), "writes must be refused");
    }

    #[test]
    fn bad_script_is_a_store_fault() {
        let err = SqliteStore::from_script("CREATE TABLE (").unwrap_err();
        assert!(matches!(err, PokedexError::ReferenceStore(_)));
    }

    #[test]
    fn missing_file_is_reported_at_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig {
            path: dir.path().join("absent.sqlite"),
            ..StoreConfig::default()
        };
        let err = SqliteStore::open(&config).unwrap_err();
        assert!(matches!(err, PokedexError::Io(_)));
    }

    #[test]
    fn file_based_open_is_read_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gen1.sqlite");
        {
            let conn = Connection::open(&path).expect("create");
            conn.execute_batch(SCRIPT).expect("seed");
        }
        let config = StoreConfig {
            path: path.clone(),
            ..StoreConfig::default()
        };
        let store = SqliteStore::open(&config).expect("open");
        assert_eq!(store.path(), Some(path.as_path()));

        let session = store.acquire().expect("session");
        assert_eq!(count_types(&session), 2);
        assert!(session
            .conn()
            .execute("DELETE FROM gen1_types", [])
            .is_err());
    }
}
