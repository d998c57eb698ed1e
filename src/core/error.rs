//! Error types for sdk-updater with contextual messages and exit codes
//!
//! Missing files, anchor misses, and declined prompts are not errors here; they are
//! reported inline and the run continues. What reaches this type is either an I/O
//! failure we cannot work around or a failed git step, which ends the process.

use std::fmt;
use std::io;

/// Exit codes for sdk-updater
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid input, unreadable files)
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for sdk-updater
#[derive(Debug)]
pub enum UpdaterError {
  /// Git pipeline errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl UpdaterError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    UpdaterError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  ///
  /// I/O errors are folded into a message so the context is not lost.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      UpdaterError::Message { message, context, help } => UpdaterError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      UpdaterError::Io(e) => UpdaterError::Message {
        message: ctx_str,
        context: Some(format!("I/O error: {}", e)),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      UpdaterError::Git(_) => ExitCode::System,
      UpdaterError::Io(_) => ExitCode::System,
      UpdaterError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      UpdaterError::Git(e) => e.help_message(),
      UpdaterError::Message { help, .. } => help.clone(),
      UpdaterError::Io(_) => None,
    }
  }
}

impl fmt::Display for UpdaterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UpdaterError::Git(e) => write!(f, "{}", e),
      UpdaterError::Io(e) => write!(f, "I/O error: {}", e),
      UpdaterError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for UpdaterError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      UpdaterError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for UpdaterError {
  fn from(err: io::Error) -> Self {
    UpdaterError::Io(err)
  }
}

impl From<String> for UpdaterError {
  fn from(msg: String) -> Self {
    UpdaterError::message(msg)
  }
}

impl From<&str> for UpdaterError {
  fn from(msg: &str) -> Self {
    UpdaterError::message(msg)
  }
}

impl From<regex::Error> for UpdaterError {
  fn from(err: regex::Error) -> Self {
    UpdaterError::message(format!("Pattern error: {}", err))
  }
}

impl From<semver::Error> for UpdaterError {
  fn from(err: semver::Error) -> Self {
    UpdaterError::message(format!("Invalid version: {}", err))
  }
}

impl From<GitError> for UpdaterError {
  fn from(err: GitError) -> Self {
    UpdaterError::Git(err)
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// A release pipeline step exited unsuccessfully or could not be spawned
  StepFailed {
    step: String,
    command: String,
    detail: String,
  },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::StepFailed { detail, .. } => {
        if detail.contains("nothing to commit") || detail.contains("nothing added to commit") {
          Some("There were no changes to commit. The tag was not created.".to_string())
        } else if detail.contains("already exists") {
          Some("A tag with this version already exists. Pick a new version or delete the tag.".to_string())
        } else if detail.contains("non-fast-forward") || detail.contains("rejected") {
          Some("The remote has commits you don't have. Pull first, then push the branch and tag by hand.".to_string())
        } else {
          None
        }
      }
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::StepFailed { step, command, detail } => {
        write!(f, "Git command failed at step '{}': {}", step, command)?;
        let detail = detail.trim();
        if !detail.is_empty() {
          write!(f, "\n{}", detail)?;
        }
        Ok(())
      }
    }
  }
}

/// Result type alias for sdk-updater
pub type UpdaterResult<T> = Result<T, UpdaterError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> UpdaterResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> UpdaterResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<UpdaterError>,
{
  fn context(self, ctx: impl Into<String>) -> UpdaterResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> UpdaterResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &UpdaterError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
