//! Anchors locate the text a rule rewrites
//!
//! An anchor answers one question: where in this text is the shape I expect? Rules
//! never search on their own, so a new target-file shape only needs a new anchor.

use crate::core::error::UpdaterResult;
use regex::Regex;
use std::fmt;

/// Byte range of a match, `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub start: usize,
  pub end: usize,
}

/// Locates a structural point in a source file
pub trait Anchor: fmt::Debug {
  /// First match in `text`, if any
  fn find(&self, text: &str) -> Option<Span>;
}

/// Exact substring match
#[derive(Debug, Clone)]
pub struct LiteralAnchor {
  needle: String,
}

impl LiteralAnchor {
  pub fn new(needle: impl Into<String>) -> Self {
    Self { needle: needle.into() }
  }
}

impl Anchor for LiteralAnchor {
  fn find(&self, text: &str) -> Option<Span> {
    text.find(&self.needle).map(|start| Span {
      start,
      end: start + self.needle.len(),
    })
  }
}

/// Token-sequence match that ignores how tokens are separated
///
/// The expected text is split on whitespace; any non-empty run of whitespace
/// (spaces, tabs, newlines, CRLF) matches between consecutive tokens. The span
/// starts at the first token, so leading indentation is never part of a match.
#[derive(Clone)]
pub struct WhitespaceTolerantAnchor {
  pattern: Regex,
  first_token: String,
}

impl WhitespaceTolerantAnchor {
  pub fn new(expected: &str) -> UpdaterResult<Self> {
    let tokens: Vec<String> = expected.split_whitespace().map(regex::escape).collect();
    let pattern = Regex::new(&tokens.join(r"\s+"))?;
    Ok(Self {
      pattern,
      first_token: expected.split_whitespace().next().unwrap_or_default().to_string(),
    })
  }
}

impl fmt::Debug for WhitespaceTolerantAnchor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WhitespaceTolerantAnchor")
      .field("starts_with", &self.first_token)
      .finish()
  }
}

impl Anchor for WhitespaceTolerantAnchor {
  fn find(&self, text: &str) -> Option<Span> {
    self.pattern.find(text).map(|m| Span {
      start: m.start(),
      end: m.end(),
    })
  }
}
