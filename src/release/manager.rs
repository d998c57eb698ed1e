//! Version bump and git release flow
//!
//! Runs after patching and does not depend on its outcome, except that the
//! commit message lists what the patch stage changed.

use super::manifest::{self, VersionWrite};
use super::pipeline::Pipeline;
use super::prompt::Prompt;
use super::version::VersionToken;
use crate::core::config::UpdaterConfig;
use crate::core::error::UpdaterResult;
use crate::core::vcs::StepRunner;
use crate::patch::ChangeLog;

/// Where the release flow stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
  /// `--no-tag`: nothing ran
  Skipped,
  /// Operator declined to update the version
  Declined,
  /// No version given
  NoVersion,
  /// Version given but not semver
  InvalidVersion,
  /// Version files rewritten; git commands left to the operator
  VersionUpdated,
  /// Committed and tagged, not pushed
  Tagged,
  /// Branch and tag pushed
  Pushed,
}

/// Drives the release stage against injected prompt and git backends
pub struct ReleaseManager<'a> {
  config: &'a UpdaterConfig,
  prompt: &'a mut dyn Prompt,
  git: &'a dyn StepRunner,
  changes: &'a ChangeLog,
}

impl<'a> ReleaseManager<'a> {
  pub fn new(
    config: &'a UpdaterConfig,
    prompt: &'a mut dyn Prompt,
    git: &'a dyn StepRunner,
    changes: &'a ChangeLog,
  ) -> Self {
    Self {
      config,
      prompt,
      git,
      changes,
    }
  }

  /// Bump the version, then commit, tag and optionally push
  ///
  /// Declined prompts and missing or invalid versions end the stage with `Ok`.
  /// Only a failed git step (or an unusable terminal) is an error.
  pub fn release(&mut self, version: Option<&str>, skip_tag: bool) -> UpdaterResult<ReleaseOutcome> {
    if skip_tag {
      return Ok(ReleaseOutcome::Skipped);
    }

    println!("\n📦 Version Management");
    println!("--------------------");

    if let Some(current) = manifest::read_manifest_version(&self.config.manifest_path) {
      println!("Current version: {}", current);
    }

    let raw = match version {
      Some(v) => v.to_string(),
      None => {
        if !self
          .prompt
          .confirm("Do you want to update the version and create a tag?")?
        {
          return Ok(ReleaseOutcome::Declined);
        }
        self.prompt.ask("Enter the new version (e.g., 2.0.0-rc.5)")?
      }
    };

    if raw.trim().is_empty() {
      println!("❌ No version provided, skipping versioning");
      return Ok(ReleaseOutcome::NoVersion);
    }

    let version = match VersionToken::parse(&raw) {
      Ok(version) => version,
      Err(e) => {
        println!("❌ {} ({:?}), skipping versioning", e, raw.trim());
        return Ok(ReleaseOutcome::InvalidVersion);
      }
    };

    self.propagate(&version);

    println!("\n🚀 Git Commands");
    println!("---------------");

    let message = commit_message(&version, self.changes);
    let local = Pipeline::commit_and_tag(&version, &message);
    let push = Pipeline::push(&self.config.remote, &self.config.branch, &version);

    println!("\nCommands to run:");
    for step in local.steps().iter().chain(push.steps()) {
      println!("  {}", step.display_command());
    }

    if !self
      .prompt
      .confirm("Do you want to run these commands automatically?")?
    {
      return Ok(ReleaseOutcome::VersionUpdated);
    }

    local.run(self.git)?;

    let question = format!("Do you want to push to {}?", self.config.remote);
    if !self.prompt.confirm(&question)? {
      println!("\n📌 To push manually, run:");
      for step in push.steps() {
        println!("  {}", step.display_command());
      }
      return Ok(ReleaseOutcome::Tagged);
    }

    push.run(self.git)?;
    println!("✅ Pushed to {}", self.config.remote);
    println!("\n🎉 Release {} complete!", version);
    Ok(ReleaseOutcome::Pushed)
  }

  /// Write the version into the manifest and the request headers
  ///
  /// Each file is attempted regardless of what happened to the other.
  fn propagate(&self, version: &VersionToken) {
    let targets = [
      (&self.config.manifest_path, manifest::write_manifest_version as VersionWriter),
      (&self.config.requests_path, manifest::write_header_versions as VersionWriter),
    ];

    for (path, write) in targets {
      let shown = self.config.display_path(path);
      match write(path, version) {
        Ok(VersionWrite::Updated) => println!("✅ Updated version in {} to {}", shown, version),
        Ok(VersionWrite::Unchanged) => tracing::debug!(path = %shown, "version already current or no field"),
        Ok(VersionWrite::Missing) => tracing::debug!(path = %shown, "version file missing"),
        Err(e) => println!("⚠️  Could not update version in {}: {}", shown, e),
      }
    }
  }
}

type VersionWriter = fn(&std::path::Path, &VersionToken) -> UpdaterResult<VersionWrite>;

/// Commit message for the release commit
///
/// Lists what the patch stage actually changed rather than a fixed set of claims.
pub fn commit_message(version: &VersionToken, changes: &ChangeLog) -> String {
  let mut message = format!("Release {}\n\n", version);
  if changes.is_empty() {
    message.push_str("- No client structure changes\n");
  }
  for change in changes.entries() {
    message.push_str(&format!("- Update {}\n", change));
  }
  message.push_str(&format!("- Update version to {}", version));
  message
}
