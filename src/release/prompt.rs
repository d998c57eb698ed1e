use crate::core::error::UpdaterResult;
use std::io::{self, BufRead, Write};

/// Source of operator answers
///
/// The release flow only talks to this trait, so it can be driven from a
/// terminal or from canned input.
pub trait Prompt {
  /// Yes/no question; only `y`/`Y` counts as yes
  fn confirm(&mut self, question: &str) -> UpdaterResult<bool>;

  /// Free-text question; returns the trimmed answer (empty on EOF)
  fn ask(&mut self, question: &str) -> UpdaterResult<String>;
}

/// Line-oriented prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
  input: R,
  output: W,
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
  /// Prompt on the process's stdin/stdout
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  fn read_answer(&mut self, prompt: &str) -> UpdaterResult<String> {
    write!(self.output, "{}", prompt)?;
    self.output.flush()?;

    let mut line = String::new();
    // 0 bytes read means EOF, which leaves `line` empty
    self.input.read_line(&mut line)?;
    Ok(line.trim().to_string())
  }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
  fn confirm(&mut self, question: &str) -> UpdaterResult<bool> {
    let answer = self.read_answer(&format!("\n{} (y/n): ", question))?;
    Ok(answer.eq_ignore_ascii_case("y"))
  }

  fn ask(&mut self, question: &str) -> UpdaterResult<String> {
    self.read_answer(&format!("{}: ", question))
  }
}
