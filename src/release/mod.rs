//! Release stage: version bump, commit, tag, push
//!
//! - `version`: validated version token
//! - `manifest`: reading/rewriting the version in the gemspec and request headers
//! - `prompt`: operator questions behind a trait
//! - `pipeline`: ordered git steps, stop on first failure
//! - `manager`: the release flow tying these together

pub mod manager;
pub mod manifest;
pub mod pipeline;
pub mod prompt;
pub mod version;

pub use manager::ReleaseManager;
pub use prompt::LinePrompt;
