//! Device repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the root `devices` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation acquires its own connection and releases it on return.
//! - Devices have no parent; `create_device` performs no existence checks.

use crate::db::ConnectionProvider;
use crate::model::device::{Device, DeviceId, NewDevice};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use rusqlite::{params, Row};

const DEVICE_SELECT_SQL: &str = "SELECT device_id, name, description FROM devices";

/// Repository interface for device CRUD operations.
pub trait DeviceRepository {
    /// Lists all devices ordered by id.
    fn list_devices(&self) -> RepoResult<Vec<Device>>;
    /// Gets one device by id; absence is data, not an error.
    fn get_device(&self, id: DeviceId) -> RepoResult<Option<Device>>;
    /// Creates one device and returns the store-generated id.
    fn create_device(&self, device: &NewDevice) -> RepoResult<DeviceId>;
    /// Applies a full-record update; returns the affected row count.
    fn update_device(&self, device: &Device) -> RepoResult<usize>;
    /// Deletes by id; an absent id yields a count of 0, not an error.
    fn delete_device(&self, id: DeviceId) -> RepoResult<usize>;
}

/// SQLite-backed device repository.
pub struct SqliteDeviceRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteDeviceRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl DeviceRepository for SqliteDeviceRepository<'_> {
    fn list_devices(&self) -> RepoResult<Vec<Device>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{DEVICE_SELECT_SQL} ORDER BY device_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut devices = Vec::new();

        while let Some(row) = rows.next()? {
            devices.push(parse_device_row(row)?);
        }

        Ok(devices)
    }

    fn get_device(&self, id: DeviceId) -> RepoResult<Option<Device>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{DEVICE_SELECT_SQL} WHERE device_id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_device_row(row)?));
        }

        Ok(None)
    }

    fn create_device(&self, device: &NewDevice) -> RepoResult<DeviceId> {
        device.validate()?;

        let conn = self.provider.acquire()?;
        conn.execute(
            "INSERT INTO devices (name, description) VALUES (?1, ?2);",
            params![device.name.as_str(), device.description.as_deref()],
        )?;

        let id = conn.last_insert_rowid();
        info!("event=device_create module=repo status=ok device_id={id}");
        Ok(id)
    }

    fn update_device(&self, device: &Device) -> RepoResult<usize> {
        device.validate()?;

        let conn = self.provider.acquire()?;
        let changed = conn.execute(
            "UPDATE devices SET name = ?1, description = ?2 WHERE device_id = ?3;",
            params![
                device.name.as_str(),
                device.description.as_deref(),
                device.device_id,
            ],
        )?;

        if changed == 0 {
            warn!(
                "event=device_update module=repo status=no_match device_id={}",
                device.device_id
            );
        }

        Ok(changed)
    }

    fn delete_device(&self, id: DeviceId) -> RepoResult<usize> {
        let conn = self.provider.acquire()?;
        let changed = conn.execute("DELETE FROM devices WHERE device_id = ?1;", params![id])?;

        if changed == 0 {
            warn!("event=device_delete module=repo status=no_match device_id={id}");
        }

        Ok(changed)
    }
}

fn parse_device_row(row: &Row<'_>) -> RepoResult<Device> {
    let device = Device {
        device_id: row.get("device_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    };
    device
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("device {}: {err}", device.device_id)))?;
    Ok(device)
}
