//! Device use-case service.
//!
//! # Responsibility
//! - Provide device CRUD entry points for boundary callers.
//! - Turn the repository's count-based outcomes into typed results.
//!
//! # Invariants
//! - `update_device` reports a zero affected count as `DeviceNotFound`.
//! - `delete_device` is idempotent and reports whether a row was removed.

use crate::model::device::{Device, DeviceId, NewDevice};
use crate::repo::device_repo::DeviceRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for device use-cases.
#[derive(Debug)]
pub enum DeviceServiceError {
    /// Target device does not exist.
    DeviceNotFound(DeviceId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for DeviceServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceNotFound(id) => write!(f, "device not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent device state: {details}"),
        }
    }
}

impl Error for DeviceServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for DeviceServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Device service facade over repository implementations.
pub struct DeviceService<R: DeviceRepository> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one device and returns the stored record.
    pub fn create_device(&self, device: &NewDevice) -> Result<Device, DeviceServiceError> {
        let id = self.repo.create_device(device)?;
        self.repo
            .get_device(id)?
            .ok_or(DeviceServiceError::InconsistentState(
                "created device not found in read-back",
            ))
    }

    /// Gets one device by id.
    pub fn get_device(&self, id: DeviceId) -> Result<Option<Device>, DeviceServiceError> {
        Ok(self.repo.get_device(id)?)
    }

    /// Lists all devices.
    pub fn list_devices(&self) -> Result<Vec<Device>, DeviceServiceError> {
        Ok(self.repo.list_devices()?)
    }

    /// Applies a full-record update to an existing device.
    pub fn update_device(&self, device: &Device) -> Result<(), DeviceServiceError> {
        let changed = self.repo.update_device(device)?;
        if changed == 0 {
            return Err(DeviceServiceError::DeviceNotFound(device.device_id));
        }
        Ok(())
    }

    /// Deletes one device; returns whether a row was removed.
    pub fn delete_device(&self, id: DeviceId) -> Result<bool, DeviceServiceError> {
        Ok(self.repo.delete_device(id)? > 0)
    }
}
