mod schema;
mod seed;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::StoreError;
use schema::INITIAL_SCHEMA;

pub use seed::{SEED_NOTES, SEED_STUDENTS};

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the file-backed store.
///
/// `Database` holds no connection. Each call to [`Database::connect`] opens a
/// fresh one, which is closed when dropped, so every repository operation
/// acquires and releases its own connection on all exit paths.
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<Path>,
}

/// Outcome of [`Database::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitReport {
    /// Seed students inserted; zero when the table already had rows.
    pub students_seeded: usize,
    /// Seed notes inserted; zero when the table already had rows.
    pub notes_seeded: usize,
}

impl Database {
    /// Creates a handle for the database file at `path`.
    ///
    /// Performs no I/O. The file is created on first connection; its parent
    /// directory must already exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }

    /// Returns the path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a new connection scoped to the caller.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.to_path_buf(),
            source,
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Ensures both tables exist and seeds each one that is empty.
    ///
    /// Idempotent and safe to call on every process start: tables are
    /// created with IF NOT EXISTS and seeding only touches empty tables.
    /// Seeding runs in a single transaction.
    pub fn initialize(&self) -> Result<InitReport, StoreError> {
        let mut conn = self.connect()?;
        conn.execute_batch(INITIAL_SCHEMA)?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let tx = conn.transaction()?;
        let report = InitReport {
            students_seeded: seed::seed_students(&tx, now)?,
            notes_seeded: seed::seed_notes(&tx, now)?,
        };
        tx.commit()?;

        tracing::debug!(
            path = %self.path.display(),
            students_seeded = report.students_seeded,
            notes_seeded = report.notes_seeded,
            "database initialized"
        );
        Ok(report)
    }
}
