//! SQLite storage bootstrap and connection provisioning.
//!
//! # Responsibility
//! - Describe where the registry database lives (`ConnectionSpec`).
//! - Hand out short-lived, fully bootstrapped connections (`ConnectionProvider`).
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Repository code must not touch application tables before migrations succeed.
//! - Parent-reference columns carry no SQL foreign keys; existence checks live
//!   in the repository layer and deletes never cascade.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod provider;

pub use provider::{ConnectionProvider, ConnectionSpec};

pub type DbResult<T> = Result<T, DbError>;

/// Failure on the connection acquisition path.
#[derive(Debug)]
pub enum DbError {
    /// Store unreachable, descriptor invalid, or connection bootstrap failed.
    Connection(rusqlite::Error),
    /// The database was written by a newer binary than this one.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "database connection failed: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Connection(value)
    }
}
