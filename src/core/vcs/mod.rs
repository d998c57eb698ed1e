pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::UpdaterResult;

/// One external git invocation in the release sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStep {
  /// `git add -A`
  StageAll,
  /// `git commit -m <message>`
  Commit { message: String },
  /// `git tag -a <name> -m <message>`
  Tag { name: String, message: String },
  /// `git push <remote> <refspec>`
  Push { remote: String, refspec: String },
}

impl GitStep {
  /// Short step name used in failure reports
  pub fn name(&self) -> &'static str {
    match self {
      GitStep::StageAll => "stage",
      GitStep::Commit { .. } => "commit",
      GitStep::Tag { .. } => "tag",
      GitStep::Push { .. } => "push",
    }
  }

  /// Arguments passed to git
  pub fn args(&self) -> Vec<String> {
    match self {
      GitStep::StageAll => vec!["add".to_string(), "-A".to_string()],
      GitStep::Commit { message } => vec!["commit".to_string(), "-m".to_string(), message.clone()],
      GitStep::Tag { name, message } => vec![
        "tag".to_string(),
        "-a".to_string(),
        name.clone(),
        "-m".to_string(),
        message.clone(),
      ],
      GitStep::Push { remote, refspec } => vec!["push".to_string(), remote.clone(), refspec.clone()],
    }
  }

  /// Shell-like rendering for previews and error messages
  pub fn display_command(&self) -> String {
    match self {
      GitStep::StageAll => "git add -A".to_string(),
      GitStep::Commit { message } => format!("git commit -m \"{}\"", message),
      GitStep::Tag { name, message } => format!("git tag -a {} -m \"{}\"", name, message),
      GitStep::Push { remote, refspec } => format!("git push {} {}", remote, refspec),
    }
  }

  /// Line printed once the step succeeded
  pub fn success_message(&self) -> String {
    match self {
      GitStep::StageAll => "Staged all changes".to_string(),
      GitStep::Commit { .. } => "Committed changes".to_string(),
      GitStep::Tag { name, .. } => format!("Created tag {}", name),
      GitStep::Push { remote, refspec } => format!("Pushed {} to {}", refspec, remote),
    }
  }
}

/// Executes git steps
///
/// `SystemGit` shells out to the real binary. Tests substitute a recorder.
pub trait StepRunner {
  /// Run a single step, failing with `GitError::StepFailed` when git does
  fn run_step(&self, step: &GitStep) -> UpdaterResult<()>;
}
