//! Core building blocks shared by the patch and release stages
//!
//! - **config**: paths and git constants for one run
//! - **error**: error type with contextual help and exit codes
//! - **vcs**: git steps and the system git backend

pub mod config;
pub mod error;
pub mod vcs;
