use crate::core::error::UpdaterResult;
use semver::Version;
use std::fmt;

/// A release version as typed by the operator, validated as semver
///
/// The original spelling is kept (after trimming) so what lands in the manifest,
/// the headers and the tag is exactly what was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken(String);

impl VersionToken {
  pub fn parse(raw: &str) -> UpdaterResult<Self> {
    let raw = raw.trim();
    Version::parse(raw)?;
    Ok(Self(raw.to_string()))
  }
}

impl fmt::Display for VersionToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
