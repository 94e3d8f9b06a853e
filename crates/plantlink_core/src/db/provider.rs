//! Connection descriptor and per-operation connection provisioning.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections on demand.
//! - Configure connection settings required by core behavior.
//! - Trigger schema migrations before a connection is handed out.
//!
//! # Invariants
//! - Returned connections have the busy timeout applied and migrations current.
//! - Each connection is owned by exactly one operation and released on drop;
//!   none is cached or shared across operations.
//! - The in-memory form stays alive for the provider lifetime via an anchor
//!   connection.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uuid::Uuid;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable descriptor naming the backing registry database.
///
/// Constructed explicitly by the caller and handed to each store at
/// construction time; there is no ambient/global configuration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSpec {
    target: StorageTarget,
    busy_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StorageTarget {
    /// Database file on disk.
    File(PathBuf),
    /// Named in-memory database shared by all connections of one provider.
    Memory { name: String },
}

impl ConnectionSpec {
    /// Describes a file-backed database at `path`.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            target: StorageTarget::File(path.as_ref().to_path_buf()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Describes a process-private in-memory database.
    ///
    /// Each call names a distinct store; providers built from two separate
    /// specs never see each other's rows.
    pub fn in_memory() -> Self {
        Self {
            target: StorageTarget::Memory {
                name: format!("plantlink-{}", Uuid::new_v4().simple()),
            },
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Overrides the per-connection busy timeout.
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    fn mode(&self) -> &'static str {
        match self.target {
            StorageTarget::File(_) => "file",
            StorageTarget::Memory { .. } => "memory",
        }
    }
}

/// Hands out one short-lived connection per repository operation.
#[derive(Debug)]
pub struct ConnectionProvider {
    spec: ConnectionSpec,
    /// Keeps the named in-memory database alive between operations.
    _anchor: Option<Connection>,
}

impl ConnectionProvider {
    /// Builds a provider, validating the descriptor eagerly.
    ///
    /// Opens one connection, applies the busy timeout and pending migrations,
    /// and for in-memory specs retains that connection as the anchor.
    ///
    /// # Errors
    /// - `DbError::Connection` when the database cannot be opened or configured.
    /// - `DbError::UnsupportedSchemaVersion` when the database was migrated by
    ///   a newer binary.
    pub fn new(spec: ConnectionSpec) -> DbResult<Self> {
        let started_at = Instant::now();
        info!(
            "event=db_provider_init module=db status=start mode={}",
            spec.mode()
        );

        let conn = match open_and_bootstrap(&spec) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_provider_init module=db status=error mode={} duration_ms={} error={}",
                    spec.mode(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        info!(
            "event=db_provider_init module=db status=ok mode={} duration_ms={}",
            spec.mode(),
            started_at.elapsed().as_millis()
        );

        let anchor = match spec.target {
            StorageTarget::Memory { .. } => Some(conn),
            StorageTarget::File(_) => None,
        };
        Ok(Self {
            spec,
            _anchor: anchor,
        })
    }

    /// Opens a connection scoped to one repository operation.
    ///
    /// The caller owns the connection exclusively; dropping it releases the
    /// underlying handle on every exit path, including early error returns.
    pub fn acquire(&self) -> DbResult<Connection> {
        match open_and_bootstrap(&self.spec) {
            Ok(conn) => Ok(conn),
            Err(err) => {
                error!(
                    "event=db_acquire module=db status=error mode={} error={}",
                    self.spec.mode(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn open_and_bootstrap(spec: &ConnectionSpec) -> DbResult<Connection> {
    let mut conn = match &spec.target {
        StorageTarget::File(path) => Connection::open(path)?,
        // Shared-cache URI so every acquired connection sees one store.
        StorageTarget::Memory { name } => {
            Connection::open(format!("file:{name}?mode=memory&cache=shared"))?
        }
    };
    conn.busy_timeout(spec.busy_timeout)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}
