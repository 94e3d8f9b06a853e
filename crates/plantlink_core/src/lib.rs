//! Core data-access layer for the plantlink equipment registry.
//! This crate is the single source of truth for hierarchy integrity rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ConnectionProvider, ConnectionSpec, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::asset::{Asset, AssetId, NewAsset};
pub use model::device::{Device, DeviceId, NewDevice};
pub use model::signal::{NewSignalMeasurement, SignalId, SignalMeasurement};
pub use model::ValidationError;
pub use repo::asset_repo::{AssetRepository, SqliteAssetRepository};
pub use repo::device_repo::{DeviceRepository, SqliteDeviceRepository};
pub use repo::signal_repo::{SignalMeasurementRepository, SqliteSignalMeasurementRepository};
pub use repo::{RepoError, RepoResult};
pub use service::asset_service::{AssetService, AssetServiceError};
pub use service::device_service::{DeviceService, DeviceServiceError};
pub use service::signal_service::{SignalMeasurementService, SignalServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
