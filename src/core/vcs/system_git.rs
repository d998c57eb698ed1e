//! System git backend
//!
//! Every release step is one `git` subprocess run against the SDK checkout. The
//! operator's environment is inherited (identity, ssh-agent, credential helpers,
//! signing) apart from the variables that would point git at another repository.
//! Output is captured so a failing step can be reported with git's own stderr.

use super::{GitStep, StepRunner};
use crate::core::error::{GitError, UpdaterResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Variables that would make `-C <repo>` operate on some other repository
const REPO_OVERRIDE_VARS: [&str; 4] = ["GIT_DIR", "GIT_WORK_TREE", "GIT_INDEX_FILE", "GIT_OBJECT_DIRECTORY"];

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  pub(crate) repo_path: PathBuf,
}

impl SystemGit {
  /// Point at a working directory
  ///
  /// No subprocess runs here. A path outside a repository surfaces as a failure of
  /// the first step.
  pub fn at(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// Create a git command bound to the repo path
  ///
  /// - Sets working directory to repo path
  /// - Drops variables that redirect git to another repository or index
  /// - Adds safe configuration overrides
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    for var in REPO_OVERRIDE_VARS {
      cmd.env_remove(var);
    }

    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }
}

impl StepRunner for SystemGit {
  fn run_step(&self, step: &GitStep) -> UpdaterResult<()> {
    tracing::debug!(step = step.name(), repo = %self.repo_path.display(), "running git step");

    let output = self.git_cmd().args(step.args()).output().map_err(|e| GitError::StepFailed {
      step: step.name().to_string(),
      command: step.display_command(),
      detail: format!("Failed to execute git: {}", e),
    })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      // `git commit` with nothing staged reports on stdout, not stderr
      let detail = if stderr.trim().is_empty() { stdout } else { stderr };
      return Err(
        GitError::StepFailed {
          step: step.name().to_string(),
          command: step.display_command(),
          detail: format!("{} ({})", detail.trim(), output.status),
        }
        .into(),
      );
    }

    tracing::debug!(step = step.name(), stdout = %String::from_utf8_lossy(&output.stdout).trim(), "git step done");
    Ok(())
  }
}
