//! Reading and rewriting the version token in the SDK's files
//!
//! Two places carry it: `spec.version` in the gemspec, and every
//! `"X-Fern-SDK-Version"` header constant in `lib/requests.rb`. The files are
//! independent; callers treat each write as best-effort.

use super::version::VersionToken;
use crate::core::error::{ResultExt, UpdaterResult};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static MANIFEST_VERSION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(\b\w+\.version\s*=\s*)["']([^"'\n]+)["']"#).expect("manifest version pattern is valid")
});

// Generated Ruby uses `"Header": "value"`; the hash-rocket form is accepted too
static HEADER_VERSION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"("X-Fern-SDK-Version"(?:\s*=>\s*|:\s*))"[\w.+\-]*""#).expect("header version pattern is valid")
});

/// What a version write did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionWrite {
  /// File does not exist
  Missing,
  /// File exists but holds nothing to rewrite, or already holds the version
  Unchanged,
  /// File rewritten
  Updated,
}

/// Current `spec.version` from the manifest, if the file and the field exist
pub fn read_manifest_version(path: &Path) -> Option<String> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) => {
      tracing::debug!(path = %path.display(), error = %e, "manifest not readable");
      return None;
    }
  };

  MANIFEST_VERSION
    .captures(&content)
    .map(|caps| caps[2].to_string())
}

/// Set the manifest's version field to `version`
///
/// Only the first `*.version = "..."` assignment is touched.
pub fn write_manifest_version(path: &Path, version: &VersionToken) -> UpdaterResult<VersionWrite> {
  rewrite(path, |content| {
    MANIFEST_VERSION
      .replace(content, |caps: &Captures| format!("{}\"{}\"", &caps[1], version))
      .into_owned()
  })
}

/// Set every SDK version header constant to `version`
pub fn write_header_versions(path: &Path, version: &VersionToken) -> UpdaterResult<VersionWrite> {
  rewrite(path, |content| {
    HEADER_VERSION
      .replace_all(content, |caps: &Captures| format!("{}\"{}\"", &caps[1], version))
      .into_owned()
  })
}

fn rewrite(path: &Path, edit: impl FnOnce(&str) -> String) -> UpdaterResult<VersionWrite> {
  if !path.exists() {
    return Ok(VersionWrite::Missing);
  }

  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let updated = edit(&content);
  if updated == content {
    return Ok(VersionWrite::Unchanged);
  }

  fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(VersionWrite::Updated)
}
