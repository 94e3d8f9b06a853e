//! Signal measurement repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `signal_measurements` table.
//! - Verify the referenced asset exists before dependent writes.
//!
//! # Invariants
//! - `create_signal`/`update_signal` issue no mutating statement when the
//!   referenced asset is absent.
//! - The existence check and the following mutation are separate statements;
//!   an asset deleted between them can leave an orphaned signal row.

use crate::db::ConnectionProvider;
use crate::model::asset::AssetId;
use crate::model::signal::{NewSignalMeasurement, SignalId, SignalMeasurement};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use rusqlite::{params, Connection, Row};

const SIGNAL_SELECT_SQL: &str =
    "SELECT signal_id, signal_tag, register_address, asset_id FROM signal_measurements";

/// Repository interface for signal measurement CRUD operations.
pub trait SignalMeasurementRepository {
    /// Lists all signal measurements ordered by id.
    fn list_signals(&self) -> RepoResult<Vec<SignalMeasurement>>;
    /// Gets one signal measurement by id; absence is data, not an error.
    fn get_signal(&self, id: SignalId) -> RepoResult<Option<SignalMeasurement>>;
    /// Creates one signal measurement after verifying its asset exists.
    fn create_signal(&self, signal: &NewSignalMeasurement) -> RepoResult<SignalId>;
    /// Applies a full-record update after verifying the asset reference.
    fn update_signal(&self, signal: &SignalMeasurement) -> RepoResult<usize>;
    /// Deletes by id; an absent id yields a count of 0, not an error.
    fn delete_signal(&self, id: SignalId) -> RepoResult<usize>;
}

/// SQLite-backed signal measurement repository.
pub struct SqliteSignalMeasurementRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteSignalMeasurementRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl SignalMeasurementRepository for SqliteSignalMeasurementRepository<'_> {
    fn list_signals(&self) -> RepoResult<Vec<SignalMeasurement>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{SIGNAL_SELECT_SQL} ORDER BY signal_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut signals = Vec::new();

        while let Some(row) = rows.next()? {
            signals.push(parse_signal_row(row)?);
        }

        Ok(signals)
    }

    fn get_signal(&self, id: SignalId) -> RepoResult<Option<SignalMeasurement>> {
        let conn = self.provider.acquire()?;
        let mut stmt = conn.prepare(&format!("{SIGNAL_SELECT_SQL} WHERE signal_id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_signal_row(row)?));
        }

        Ok(None)
    }

    fn create_signal(&self, signal: &NewSignalMeasurement) -> RepoResult<SignalId> {
        signal.validate()?;

        let conn = self.provider.acquire()?;
        ensure_asset_exists(&conn, signal.asset_id)?;

        conn.execute(
            "INSERT INTO signal_measurements (signal_tag, register_address, asset_id)
             VALUES (?1, ?2, ?3);",
            params![
                signal.signal_tag.as_str(),
                signal.register_address.as_str(),
                signal.asset_id,
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!(
            "event=signal_create module=repo status=ok signal_id={id} asset_id={}",
            signal.asset_id
        );
        Ok(id)
    }

    fn update_signal(&self, signal: &SignalMeasurement) -> RepoResult<usize> {
        signal.validate()?;

        let conn = self.provider.acquire()?;
        ensure_asset_exists(&conn, signal.asset_id)?;

        let changed = conn.execute(
            "UPDATE signal_measurements
             SET signal_tag = ?1, register_address = ?2, asset_id = ?3
             WHERE signal_id = ?4;",
            params![
                signal.signal_tag.as_str(),
                signal.register_address.as_str(),
                signal.asset_id,
                signal.signal_id,
            ],
        )?;

        if changed == 0 {
            warn!(
                "event=signal_update module=repo status=no_match signal_id={}",
                signal.signal_id
            );
        }

        Ok(changed)
    }

    fn delete_signal(&self, id: SignalId) -> RepoResult<usize> {
        let conn = self.provider.acquire()?;
        let changed = conn.execute(
            "DELETE FROM signal_measurements WHERE signal_id = ?1;",
            params![id],
        )?;

        if changed == 0 {
            warn!("event=signal_delete module=repo status=no_match signal_id={id}");
        }

        Ok(changed)
    }
}

/// Fails fast when the referenced asset row is absent.
///
/// Runs on the operation's own connection, before the mutating statement.
/// Not atomic with the mutation that follows.
fn ensure_asset_exists(conn: &Connection, asset_id: AssetId) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM assets WHERE asset_id = ?1);",
        params![asset_id],
        |row| row.get(0),
    )?;

    if exists != 1 {
        warn!("event=signal_write module=repo status=missing_parent asset_id={asset_id}");
        return Err(RepoError::MissingParent {
            parent: "asset",
            id: asset_id,
        });
    }

    Ok(())
}

fn parse_signal_row(row: &Row<'_>) -> RepoResult<SignalMeasurement> {
    let signal = SignalMeasurement {
        signal_id: row.get("signal_id")?,
        signal_tag: row.get("signal_tag")?,
        register_address: row.get("register_address")?,
        asset_id: row.get("asset_id")?,
    };
    signal
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("signal {}: {err}", signal.signal_id)))?;
    Ok(signal)
}
