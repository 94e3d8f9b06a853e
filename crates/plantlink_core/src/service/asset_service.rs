//! Asset use-case service.
//!
//! # Responsibility
//! - Provide asset CRUD entry points for boundary callers.
//! - Surface missing device references as a named error variant.
//!
//! # Invariants
//! - `update_asset` reports a zero affected count as `AssetNotFound`.
//! - `delete_asset` is idempotent and reports whether a row was removed.

use crate::model::asset::{Asset, AssetId, NewAsset};
use crate::model::device::DeviceId;
use crate::repo::asset_repo::AssetRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for asset use-cases.
#[derive(Debug)]
pub enum AssetServiceError {
    /// Target asset does not exist.
    AssetNotFound(AssetId),
    /// The referenced device does not exist; nothing was written.
    DeviceMissing(DeviceId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for AssetServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetNotFound(id) => write!(f, "asset not found: {id}"),
            Self::DeviceMissing(id) => write!(f, "referenced device {id} does not exist"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent asset state: {details}"),
        }
    }
}

impl Error for AssetServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AssetServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::MissingParent { id, .. } => Self::DeviceMissing(id),
            other => Self::Repo(other),
        }
    }
}

/// Asset service facade over repository implementations.
pub struct AssetService<R: AssetRepository> {
    repo: R,
}

impl<R: AssetRepository> AssetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one asset and returns the stored record.
    pub fn create_asset(&self, asset: &NewAsset) -> Result<Asset, AssetServiceError> {
        let id = self.repo.create_asset(asset)?;
        self.repo
            .get_asset(id)?
            .ok_or(AssetServiceError::InconsistentState(
                "created asset not found in read-back",
            ))
    }

    /// Gets one asset by id.
    pub fn get_asset(&self, id: AssetId) -> Result<Option<Asset>, AssetServiceError> {
        Ok(self.repo.get_asset(id)?)
    }

    /// Lists all assets.
    pub fn list_assets(&self) -> Result<Vec<Asset>, AssetServiceError> {
        Ok(self.repo.list_assets()?)
    }

    /// Applies a full-record update to an existing asset.
    pub fn update_asset(&self, asset: &Asset) -> Result<(), AssetServiceError> {
        let changed = self.repo.update_asset(asset)?;
        if changed == 0 {
            return Err(AssetServiceError::AssetNotFound(asset.asset_id));
        }
        Ok(())
    }

    /// Deletes one asset; returns whether a row was removed.
    pub fn delete_asset(&self, id: AssetId) -> Result<bool, AssetServiceError> {
        Ok(self.repo.delete_asset(id)? > 0)
    }
}
