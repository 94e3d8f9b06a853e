//! Equipment hierarchy domain model.
//!
//! # Responsibility
//! - Define the canonical records for devices, assets and signal measurements.
//! - Enforce field constraints before values reach the storage layer.
//!
//! # Invariants
//! - Identifiers are store-generated positive integers, immutable once assigned.
//! - A dependent record's parent reference is validated at write time by the
//!   repository layer, not by the schema.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod asset;
pub mod device;
pub mod signal;

// Names and tags allow spaces; register addresses do not.
static NAME_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("valid name charset regex"));
static ADDRESS_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid address charset regex"));

/// Field constraint violation detected before any SQL is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidCharacters {
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} exceeds {max} characters (got {actual})")
            }
            Self::InvalidCharacters { field } => {
                write!(f, "{field} contains characters outside its allowed set")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks a required name-like field: non-empty, bounded, name charset.
pub(crate) fn check_name(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    check_required(field, value, max, &NAME_CHARSET_RE)
}

/// Checks a required address-like field: non-empty, bounded, no spaces.
pub(crate) fn check_address(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    check_required(field, value, max, &ADDRESS_CHARSET_RE)
}

/// Checks an optional free-text field against its length bound only.
pub(crate) fn check_optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::TooLong { field, max, actual });
        }
    }
    Ok(())
}

fn check_required(
    field: &'static str,
    value: &str,
    max: usize,
    charset: &Regex,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    if !charset.is_match(value) {
        return Err(ValidationError::InvalidCharacters { field });
    }
    Ok(())
}
