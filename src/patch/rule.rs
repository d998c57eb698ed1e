use super::anchor::{Anchor, Span};
use super::document::SourceDocument;
use std::borrow::Cow;

/// One find/replace step of a transformation
#[derive(Debug)]
pub enum Rule {
  /// Keep the anchored text and append `insertion` right after it.
  /// Skipped when `guard` already occurs anywhere in the document, which covers
  /// files where someone added the declarations by hand.
  Insert {
    guard: String,
    anchor: Box<dyn Anchor>,
    insertion: String,
    description: Option<String>,
  },

  /// Swap the anchored block for `replacement`
  Replace {
    anchor: Box<dyn Anchor>,
    replacement: String,
    description: Option<String>,
  },
}

/// What a rule did to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEffect {
  Applied,
  /// Guard text was already present
  AlreadyPresent,
  /// Anchor not found; the document is untouched
  NoMatch,
}

impl Rule {
  pub fn description(&self) -> Option<&str> {
    match self {
      Rule::Insert { description, .. } | Rule::Replace { description, .. } => description.as_deref(),
    }
  }

  /// Apply to `doc` in memory
  pub fn apply(&self, doc: &mut SourceDocument) -> RuleEffect {
    match self {
      Rule::Insert {
        guard,
        anchor,
        insertion,
        ..
      } => {
        if doc.content().contains(guard.as_str()) {
          return RuleEffect::AlreadyPresent;
        }
        let Some(span) = anchor.find(doc.content()) else {
          tracing::debug!(?anchor, "insert anchor not found");
          return RuleEffect::NoMatch;
        };
        let insertion = with_line_endings_of(&doc.content()[span.start..span.end], insertion);
        doc.splice(
          Span {
            start: span.end,
            end: span.end,
          },
          &insertion,
        );
        RuleEffect::Applied
      }
      Rule::Replace {
        anchor, replacement, ..
      } => {
        let Some(span) = anchor.find(doc.content()) else {
          tracing::debug!(?anchor, "replace anchor not found");
          return RuleEffect::NoMatch;
        };
        let replacement = with_line_endings_of(&doc.content()[span.start..span.end], replacement);
        doc.splice(span, &replacement);
        RuleEffect::Applied
      }
    }
  }
}

/// `text` with CRLF line endings when `matched` uses them
fn with_line_endings_of<'t>(matched: &str, text: &'t str) -> Cow<'t, str> {
  if matched.contains("\r\n") && !text.contains("\r\n") {
    Cow::Owned(text.replace('\n', "\r\n"))
  } else {
    Cow::Borrowed(text)
  }
}

/// Marker check plus the ordered rules that patch one file
#[derive(Debug)]
pub struct Transformation {
  /// Substring proving the file is already patched
  pub marker: String,
  pub rules: Vec<Rule>,
}
