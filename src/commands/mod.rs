//! CLI commands for sdk-updater
//!
//! - **update**: patch the generated clients, then run the release flow

pub mod update;

pub use update::run_update;
