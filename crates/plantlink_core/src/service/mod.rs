//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Interpret affected-row counts into caller-facing outcomes.

pub mod asset_service;
pub mod device_service;
pub mod signal_service;
