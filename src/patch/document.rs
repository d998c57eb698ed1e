use super::anchor::Span;
use crate::core::error::{ResultExt, UpdaterResult};
use std::fs;
use std::path::{Path, PathBuf};

/// A target file held in memory while rules run against it
///
/// Nothing touches disk until `write_if_modified`, and that only writes when the
/// content actually differs from what was read.
#[derive(Debug)]
pub struct SourceDocument {
  path: PathBuf,
  original: String,
  current: String,
}

impl SourceDocument {
  /// Read `path`, or `None` when the file does not exist
  pub fn load(path: &Path) -> UpdaterResult<Option<Self>> {
    if !path.exists() {
      return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(Some(Self {
      path: path.to_path_buf(),
      original: content.clone(),
      current: content,
    }))
  }

  pub fn content(&self) -> &str {
    &self.current
  }

  /// Replace the bytes covered by `span`
  pub fn splice(&mut self, span: Span, replacement: &str) {
    self.current.replace_range(span.start..span.end, replacement);
  }

  pub fn is_modified(&self) -> bool {
    self.current != self.original
  }

  /// Write the current content back; returns whether a write happened
  pub fn write_if_modified(&self) -> UpdaterResult<bool> {
    if !self.is_modified() {
      return Ok(false);
    }

    fs::write(&self.path, &self.current).with_context(|| format!("Failed to write {}", self.path.display()))?;
    Ok(true)
  }
}
