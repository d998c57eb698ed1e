use std::path::{Path, PathBuf};

/// Manifest holding the authoritative `spec.version`
pub const MANIFEST_FILE: &str = "rcs.gemspec";

/// File carrying the `X-Fern-SDK-Version` header constants
pub const REQUESTS_FILE: &str = "lib/requests.rb";

/// Generated messaging client
pub const MESSAGES_CLIENT_FILE: &str = "lib/rcs/messages/client.rb";

/// Generated phone-numbers client
pub const PHONE_NUMBERS_CLIENT_FILE: &str = "lib/rcs/phone_numbers/client.rb";

/// Paths and git constants for one run
///
/// There is no configuration file. Everything hangs off the repository root
/// (the working directory when run from the CLI).
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
  pub root: PathBuf,
  pub manifest_path: PathBuf,
  pub requests_path: PathBuf,
  pub messages_client_path: PathBuf,
  pub phone_numbers_client_path: PathBuf,
  pub remote: String,
  pub branch: String,
}

impl UpdaterConfig {
  /// Build the default layout for an SDK checkout rooted at `root`
  pub fn for_root(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
      manifest_path: root.join(MANIFEST_FILE),
      requests_path: root.join(REQUESTS_FILE),
      messages_client_path: root.join(MESSAGES_CLIENT_FILE),
      phone_numbers_client_path: root.join(PHONE_NUMBERS_CLIENT_FILE),
      remote: "origin".to_string(),
      branch: "main".to_string(),
    }
  }

  /// Path relative to the root, for display
  pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(&self.root).unwrap_or(path).display()
  }
}
