//! Device domain model.
//!
//! # Responsibility
//! - Define the root record of the equipment hierarchy.
//!
//! # Invariants
//! - `device_id` is store-generated and never reused for another device.
//! - `name` is non-empty, bounded, and restricted to the name charset.

use crate::model::{check_name, check_optional_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted device.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DeviceId = i64;

pub const DEVICE_NAME_MAX_CHARS: usize = 100;
pub const DEVICE_DESCRIPTION_MAX_CHARS: usize = 250;

/// Persisted device record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: DeviceId,
    pub name: String,
    pub description: Option<String>,
}

/// Caller-supplied fields for creating a device; the store generates the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    pub name: String,
    pub description: Option<String>,
}

impl Device {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_device_fields(&self.name, self.description.as_deref())
    }
}

impl NewDevice {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_device_fields(&self.name, self.description.as_deref())
    }
}

fn validate_device_fields(name: &str, description: Option<&str>) -> Result<(), ValidationError> {
    check_name("name", name, DEVICE_NAME_MAX_CHARS)?;
    check_optional_text("description", description, DEVICE_DESCRIPTION_MAX_CHARS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Device, NewDevice};

    #[test]
    fn serde_uses_camel_case_field_names() {
        let device = Device {
            device_id: 7,
            name: "Pump-1".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&device).expect("device should serialize");
        assert_eq!(json["deviceId"], 7);
        assert_eq!(json["name"], "Pump-1");
        assert!(json["description"].is_null());
    }

    #[test]
    fn draft_validation_covers_both_fields() {
        let draft = NewDevice {
            name: "Pump-1".to_string(),
            description: Some("x".repeat(251)),
        };
        assert!(draft.validate().is_err());
    }
}
