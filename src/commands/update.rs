use std::env;

use crate::core::config::UpdaterConfig;
use crate::core::error::UpdaterResult;
use crate::core::vcs::SystemGit;
use crate::patch::{self, ChangeLog, PatchStatus, targets};
use crate::release::{LinePrompt, ReleaseManager};

/// Run the update command: patch both clients, then release unless `no_tag`
pub fn run_update(version: Option<String>, no_tag: bool) -> UpdaterResult<()> {
  let config = UpdaterConfig::for_root(&env::current_dir()?);

  println!("🔧 Pinnacle SDK Structure Updater");
  println!("=================================");

  let changes = patch_clients(&config)?;
  print_summary(&changes);

  let mut prompt = LinePrompt::stdio();
  let git = SystemGit::at(&config.root);
  let outcome = ReleaseManager::new(&config, &mut prompt, &git, &changes).release(version.as_deref(), no_tag)?;
  tracing::debug!(?outcome, "release stage finished");

  Ok(())
}

/// Apply every client transformation and collect what changed
pub fn patch_clients(config: &UpdaterConfig) -> UpdaterResult<ChangeLog> {
  let jobs = [
    (&config.messages_client_path, targets::messages_client()?),
    (&config.phone_numbers_client_path, targets::phone_numbers_client()?),
  ];

  let mut changes = ChangeLog::new();
  for (path, transformation) in &jobs {
    let outcome = patch::apply(path, transformation)?;
    let shown = config.display_path(&outcome.path);
    match outcome.status {
      PatchStatus::Missing => println!("⚠️  {} not found", shown),
      PatchStatus::Updated => println!("✅ Updated {}", shown),
      PatchStatus::AlreadyPatched | PatchStatus::Unchanged => {}
    }
    if outcome.changed() {
      changes.record(&outcome);
    }
  }

  Ok(changes)
}

fn print_summary(changes: &ChangeLog) {
  if changes.is_empty() {
    println!("\n✅ All client structures are already up to date!");
    return;
  }

  println!("\n✅ Successfully updated:");
  for change in changes.entries() {
    println!("   - {}", change);
  }
}
