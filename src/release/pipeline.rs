use super::version::VersionToken;
use crate::core::error::UpdaterResult;
use crate::core::vcs::{GitStep, StepRunner};

/// Ordered git steps that stop at the first failure
///
/// Steps that already ran are not undone: a failed tag leaves the commit in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
  steps: Vec<GitStep>,
}

impl Pipeline {
  pub fn new(steps: Vec<GitStep>) -> Self {
    Self { steps }
  }

  /// Stage everything, commit, and create the annotated release tag
  pub fn commit_and_tag(version: &VersionToken, commit_message: &str) -> Self {
    Self::new(vec![
      GitStep::StageAll,
      GitStep::Commit {
        message: commit_message.to_string(),
      },
      GitStep::Tag {
        name: version.to_string(),
        message: format!("Release {}", version),
      },
    ])
  }

  /// Push the branch, then the release tag
  pub fn push(remote: &str, branch: &str, version: &VersionToken) -> Self {
    Self::new(vec![
      GitStep::Push {
        remote: remote.to_string(),
        refspec: branch.to_string(),
      },
      GitStep::Push {
        remote: remote.to_string(),
        refspec: version.to_string(),
      },
    ])
  }

  pub fn steps(&self) -> &[GitStep] {
    &self.steps
  }

  /// Run every step in order; the first failure is returned as-is
  pub fn run(&self, runner: &dyn StepRunner) -> UpdaterResult<()> {
    for (index, step) in self.steps.iter().enumerate() {
      tracing::info!(index, step = step.name(), "pipeline step");
      if let Err(e) = runner.run_step(step) {
        tracing::debug!(index, step = step.name(), "pipeline stopped");
        return Err(e);
      }
      println!("✅ {}", step.success_message());
    }
    Ok(())
  }
}
