//! Signal measurement use-case service.
//!
//! # Responsibility
//! - Provide signal CRUD entry points for boundary callers.
//! - Surface missing asset references as a named error variant.
//!
//! # Invariants
//! - `update_signal` reports a zero affected count as `SignalNotFound`.
//! - `delete_signal` is idempotent and reports whether a row was removed.

use crate::model::asset::AssetId;
use crate::model::signal::{NewSignalMeasurement, SignalId, SignalMeasurement};
use crate::repo::signal_repo::SignalMeasurementRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for signal measurement use-cases.
#[derive(Debug)]
pub enum SignalServiceError {
    /// Target signal measurement does not exist.
    SignalNotFound(SignalId),
    /// The referenced asset does not exist; nothing was written.
    AssetMissing(AssetId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for SignalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignalNotFound(id) => write!(f, "signal measurement not found: {id}"),
            Self::AssetMissing(id) => write!(f, "referenced asset {id} does not exist"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent signal state: {details}"),
        }
    }
}

impl Error for SignalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for SignalServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::MissingParent { id, .. } => Self::AssetMissing(id),
            other => Self::Repo(other),
        }
    }
}

/// Signal measurement service facade over repository implementations.
pub struct SignalMeasurementService<R: SignalMeasurementRepository> {
    repo: R,
}

impl<R: SignalMeasurementRepository> SignalMeasurementService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one signal measurement and returns the stored record.
    pub fn create_signal(
        &self,
        signal: &NewSignalMeasurement,
    ) -> Result<SignalMeasurement, SignalServiceError> {
        let id = self.repo.create_signal(signal)?;
        self.repo
            .get_signal(id)?
            .ok_or(SignalServiceError::InconsistentState(
                "created signal not found in read-back",
            ))
    }

    /// Gets one signal measurement by id.
    pub fn get_signal(
        &self,
        id: SignalId,
    ) -> Result<Option<SignalMeasurement>, SignalServiceError> {
        Ok(self.repo.get_signal(id)?)
    }

    /// Lists all signal measurements.
    pub fn list_signals(&self) -> Result<Vec<SignalMeasurement>, SignalServiceError> {
        Ok(self.repo.list_signals()?)
    }

    /// Applies a full-record update to an existing signal measurement.
    pub fn update_signal(&self, signal: &SignalMeasurement) -> Result<(), SignalServiceError> {
        let changed = self.repo.update_signal(signal)?;
        if changed == 0 {
            return Err(SignalServiceError::SignalNotFound(signal.signal_id));
        }
        Ok(())
    }

    /// Deletes one signal measurement; returns whether a row was removed.
    pub fn delete_signal(&self, id: SignalId) -> Result<bool, SignalServiceError> {
        Ok(self.repo.delete_signal(id)? > 0)
    }
}
