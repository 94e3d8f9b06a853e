//! Signal measurement domain model.
//!
//! # Invariants
//! - `signal_id` is store-generated and never reused for another signal.
//! - `register_address` allows no spaces; tags follow the name charset.
//! - `asset_id` must name an existing asset at write time; the check is
//!   performed by the repository, not by this type.

use crate::model::asset::AssetId;
use crate::model::{check_address, check_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted signal measurement.
pub type SignalId = i64;

pub const SIGNAL_TAG_MAX_CHARS: usize = 100;
pub const REGISTER_ADDRESS_MAX_CHARS: usize = 50;

/// Persisted signal measurement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalMeasurement {
    pub signal_id: SignalId,
    pub signal_tag: String,
    pub register_address: String,
    pub asset_id: AssetId,
}

/// Caller-supplied fields for creating a signal measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSignalMeasurement {
    pub signal_tag: String,
    pub register_address: String,
    pub asset_id: AssetId,
}

impl SignalMeasurement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_signal_fields(&self.signal_tag, &self.register_address)
    }
}

impl NewSignalMeasurement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_signal_fields(&self.signal_tag, &self.register_address)
    }
}

fn validate_signal_fields(signal_tag: &str, register_address: &str) -> Result<(), ValidationError> {
    check_name("signalTag", signal_tag, SIGNAL_TAG_MAX_CHARS)?;
    check_address(
        "registerAddress",
        register_address,
        REGISTER_ADDRESS_MAX_CHARS,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::NewSignalMeasurement;

    #[test]
    fn register_address_rejects_spaces_but_tag_allows_them() {
        let mut draft = NewSignalMeasurement {
            signal_tag: "TEMP inlet".to_string(),
            register_address: "40001".to_string(),
            asset_id: 1,
        };
        draft.validate().expect("tag spaces are allowed");

        draft.register_address = "400 01".to_string();
        assert!(draft.validate().is_err());
    }
}
