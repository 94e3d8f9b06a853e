//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQL and connection lifecycle details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce model validation before SQL mutations.
//! - Dependent writes verify the referenced parent row exists before any
//!   mutating statement is issued.
//! - Zero rows affected on update/delete is reported as a count, never an
//!   error; interpretation is left to the caller.
//! - All values travel as bound parameters, never inside statement text.

use crate::db::DbError;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod asset_repo;
pub mod device_repo;
pub mod signal_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the three entity stores.
#[derive(Debug)]
pub enum RepoError {
    /// Field constraints rejected the value before any SQL ran.
    Validation(ValidationError),
    /// Connection acquisition or bootstrap failure.
    Connection(DbError),
    /// A dependent write referenced a parent row that does not exist.
    MissingParent { parent: &'static str, id: i64 },
    /// The store rejected or failed an issued statement.
    Statement(rusqlite::Error),
    /// Persisted row cannot be converted to a valid domain record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Connection(err) => write!(f, "{err}"),
            Self::MissingParent { parent, id } => {
                write!(f, "referenced {parent} {id} does not exist")
            }
            Self::Statement(err) => write!(f, "statement failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Connection(err) => Some(err),
            Self::MissingParent { .. } => None,
            Self::Statement(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Connection(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(value)
    }
}
