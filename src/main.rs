mod commands;
mod core;
mod patch;
mod release;

use clap::Parser;
use crate::core::error::{UpdaterError, print_error};

/// Update Pinnacle SDK client structure and create a release
#[derive(Parser)]
#[command(name = "sdk-updater")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct UpdaterCli {
  /// Version for the release (e.g., 2.0.0-rc.5); prompted for when omitted
  #[arg(value_name = "VERSION")]
  release_version: Option<String>,

  /// Update client structure without versioning, committing or tagging
  #[arg(long)]
  no_tag: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Diagnostics go to stderr so they never mix with prompts on stdout
fn init_tracing() {
  use std::io::IsTerminal;
  use tracing_subscriber::EnvFilter;

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .init();
}

fn main() {
  let cli = UpdaterCli::parse();
  init_tracing();

  if let Err(err) = commands::run_update(cli.release_version, cli.no_tag) {
    handle_error(err);
  }
}

fn handle_error(err: UpdaterError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
