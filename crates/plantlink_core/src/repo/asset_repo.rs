//! Asset repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `assets` table.
//! - Verify the referenced device exists before dependent writes.
//!
//! # Invariants
//! - `create_asset`/`update_asset` issue no mutating statement when the
//!   referenced device is absent.
//! - The existence check and the following mutation are separate statements;
//!   a device deleted between them can leave an orphaned asset row.

use crate::db::ConnectionProvider;
use crate::model::asset::{Asset, AssetId, NewAsset};
use crate::model::device::DeviceId;
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use rusqlite::{params, Connection, Row};

const ASSET_SELECT_SQL: &str = "SELECT asset_id, name, device_id FROM assets";

/// Repository interface for asset CRUD operations.
pub trait AssetRepository {
    /// Lists all assets ordered by id.
    fn list_assets(&self) -> RepoResult<Vec<Asset>>;
    /// Gets one asset by id; absence is data, not an error.
    fn get_asset(&self, id: AssetId) -> RepoResult<Option<Asset>>;
    /// Creates one asset after verifying its device exists.
    fn create_asset(&self, asset: &NewAsset) -> RepoResult<AssetId>;
    /// Applies a full-record update after verifying the device reference.
    fn update_asset(&self, asset: &Asset) -> RepoResult<usize>;
    /// Deletes by id; an absent id yields a count of 0, not an error.
    fn delete_asset(&self, id: AssetId) -> RepoResult<usize>;
}

/// SQLite-backed asset repository.
pub struct SqliteAssetRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteAssetRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl AssetRepository for SqliteAssetRepository<'_> {
    fn list_assets(&self) -> RepoResult<Vec<Asset>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{ASSET_SELECT_SQL} ORDER BY asset_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut assets = Vec::new();

        while let Some(row) = rows.next()? {
            assets.push(parse_asset_row(row)?);
        }

        Ok(assets)
    }

    fn get_asset(&self, id: AssetId) -> RepoResult<Option<Asset>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{ASSET_SELECT_SQL} WHERE asset_id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_asset_row(row)?));
        }

        Ok(None)
    }

    fn create_asset(&self, asset: &NewAsset) -> RepoResult<AssetId> {
        asset.validate()?;

        let conn = self.provider.acquire()?;
        ensure_device_exists(&conn, asset.device_id)?;

        conn.execute(
            "INSERT INTO assets (name, device_id) VALUES (?1, ?2);",
            params![asset.name.as_str(), asset.device_id],
        )?;

        let id = conn.last_insert_rowid();
        info!(
            "event=asset_create module=repo status=ok asset_id={id} device_id={}",
            asset.device_id
        );
        Ok(id)
    }

    fn update_asset(&self, asset: &Asset) -> RepoResult<usize> {
        asset.validate()?;

        let conn = self.provider.acquire()?;
        ensure_device_exists(&conn, asset.device_id)?;

        let changed = conn.execute(
            "UPDATE assets SET name = ?1, device_id = ?2 WHERE asset_id = ?3;",
            params![asset.name.as_str(), asset.device_id, asset.asset_id],
        )?;

        if changed == 0 {
            warn!(
                "event=asset_update module=repo status=no_match asset_id={}",
                asset.asset_id
            );
        }

        Ok(changed)
    }

    fn delete_asset(&self, id: AssetId) -> RepoResult<usize> {
        let conn = self.provider.acquire()?;
        let changed = conn.execute("DELETE FROM assets WHERE asset_id = ?1;", params![id])?;

        if changed == 0 {
            warn!("event=asset_delete module=repo status=no_match asset_id={id}");
        }

        Ok(changed)
    }
}

/// Fails fast when the referenced device row is absent.
///
/// Runs on the operation's own connection, before the mutating statement.
/// Not atomic with the mutation that follows.
fn ensure_device_exists(conn: &Connection, device_id: DeviceId) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM devices WHERE device_id = ?1);",
        params![device_id],
        |row| row.get(0),
    )?;

    if exists != 1 {
        warn!("event=asset_write module=repo status=missing_parent device_id={device_id}");
        return Err(RepoError::MissingParent {
            parent: "device",
            id: device_id,
        });
    }

    Ok(())
}

fn parse_asset_row(row: &Row<'_>) -> RepoResult<Asset> {
    let asset = Asset {
        asset_id: row.get("asset_id")?,
        name: row.get("name")?,
        device_id: row.get("device_id")?,
    };
    asset
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("asset {}: {err}", asset.asset_id)))?;
    Ok(asset)
}
