//! Asset domain model.
//!
//! # Invariants
//! - `asset_id` is store-generated and never reused for another asset.
//! - `device_id` must name an existing device at write time; the check is
//!   performed by the repository, not by this type.

use crate::model::device::DeviceId;
use crate::model::{check_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted asset.
pub type AssetId = i64;

pub const ASSET_NAME_MAX_CHARS: usize = 100;

/// Persisted asset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: AssetId,
    pub name: String,
    pub device_id: DeviceId,
}

/// Caller-supplied fields for creating an asset; the store generates the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub device_id: DeviceId,
}

impl Asset {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("name", &self.name, ASSET_NAME_MAX_CHARS)
    }
}

impl NewAsset {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("name", &self.name, ASSET_NAME_MAX_CHARS)
    }
}
