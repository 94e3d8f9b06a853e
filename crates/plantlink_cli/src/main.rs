//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `plantlink_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use plantlink_core::db::migrations::latest_version;
use plantlink_core::{ConnectionProvider, ConnectionSpec};

fn main() {
    println!("plantlink_core ping={}", plantlink_core::ping());
    println!("plantlink_core version={}", plantlink_core::core_version());

    match ConnectionProvider::new(ConnectionSpec::in_memory()) {
        Ok(_provider) => println!("plantlink_core schema_version={}", latest_version()),
        Err(err) => println!("plantlink_core bootstrap_error={err}"),
    }
}
