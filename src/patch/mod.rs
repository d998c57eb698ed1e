//! Idempotent structural patching of generated SDK clients
//!
//! A [`Transformation`] pairs a marker with ordered rules. Applying it to a file:
//!
//! 1. missing file: reported, nothing else happens
//! 2. marker present: the file is already patched, nothing else happens
//! 3. otherwise every rule runs in order against the in-memory document, and the
//!    file is rewritten only if its content changed
//!
//! Rules whose anchor is not found are skipped without error. There is no
//! rollback: an import can land while a block anchor misses.

pub mod anchor;
pub mod document;
pub mod rule;
pub mod targets;

use crate::core::error::UpdaterResult;
use document::SourceDocument;
use rule::RuleEffect;
pub use rule::Transformation;
use std::path::{Path, PathBuf};

/// How applying a transformation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
  /// Target file does not exist
  Missing,
  /// Marker found before any rule ran
  AlreadyPatched,
  /// Rules ran but the content came out identical
  Unchanged,
  /// File rewritten
  Updated,
}

/// Result of patching one file
#[derive(Debug, Clone)]
pub struct Outcome {
  pub path: PathBuf,
  pub status: PatchStatus,
  /// One entry per logical addition made
  pub descriptions: Vec<String>,
}

impl Outcome {
  fn without_changes(path: &Path, status: PatchStatus) -> Self {
    Self {
      path: path.to_path_buf(),
      status,
      descriptions: Vec::new(),
    }
  }

  pub fn changed(&self) -> bool {
    self.status == PatchStatus::Updated
  }
}

/// Apply `transformation` to the file at `path`
pub fn apply(path: &Path, transformation: &Transformation) -> UpdaterResult<Outcome> {
  let Some(mut doc) = SourceDocument::load(path)? else {
    tracing::debug!(path = %path.display(), "patch target missing");
    return Ok(Outcome::without_changes(path, PatchStatus::Missing));
  };

  if doc.content().contains(transformation.marker.as_str()) {
    tracing::debug!(path = %path.display(), marker = %transformation.marker, "already patched");
    return Ok(Outcome::without_changes(path, PatchStatus::AlreadyPatched));
  }

  let mut descriptions = Vec::new();
  for rule in &transformation.rules {
    let effect = rule.apply(&mut doc);
    tracing::debug!(path = %path.display(), ?effect, "rule applied");
    if effect == RuleEffect::Applied
      && let Some(description) = rule.description()
    {
      descriptions.push(description.to_string());
    }
  }

  if !doc.write_if_modified()? {
    return Ok(Outcome::without_changes(path, PatchStatus::Unchanged));
  }

  Ok(Outcome {
    path: path.to_path_buf(),
    status: PatchStatus::Updated,
    descriptions,
  })
}

/// Human-readable record of what the patch stage changed
///
/// Passed by value from the patch stage to the release stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
  entries: Vec<String>,
}

impl ChangeLog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append the descriptions of one outcome
  pub fn record(&mut self, outcome: &Outcome) {
    self.entries.extend(outcome.descriptions.iter().cloned());
  }

  pub fn entries(&self) -> &[String] {
    &self.entries
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
