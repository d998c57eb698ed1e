//! Integration tests for the release stage

use crate::helpers::{TestRepo, run_updater, run_updater_raw, run_updater_with_env};
use anyhow::Result;

#[test]
fn test_release_commits_and_tags_without_push() -> Result<()> {
  let repo = TestRepo::with_clients()?;

  // run commands: yes, push: no
  let output = run_updater(&repo.path, &["9.9.9"], "y\nn\n")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Current version: 1.0.0"), "{stdout}");
  assert!(stdout.contains("✅ Updated version in rcs.gemspec to 9.9.9"));
  assert!(stdout.contains("✅ Updated version in lib/requests.rb to 9.9.9"));
  assert!(stdout.contains("  git add -A"));
  assert!(stdout.contains("  git tag -a 9.9.9 -m \"Release 9.9.9\""));
  assert!(stdout.contains("✅ Committed changes"));
  assert!(stdout.contains("✅ Created tag 9.9.9"));
  assert!(stdout.contains("To push manually, run:"));
  assert!(stdout.contains("  git push origin main"));
  assert!(stdout.contains("  git push origin 9.9.9"));

  assert!(repo.read_file("rcs.gemspec")?.contains("spec.version = \"9.9.9\""));
  assert_eq!(repo.tags()?, vec!["9.9.9".to_string()]);
  assert_eq!(repo.commit_count()?, 3);
  assert!(repo.status_porcelain()?.is_empty(), "everything staged and committed");

  let message = repo.head_message()?;
  assert!(message.starts_with("Release 9.9.9\n\n"), "{message}");
  assert!(message.contains("- Update MessagesClient (added sms, mms, rcs accessors)"));
  assert!(message.ends_with("- Update version to 9.9.9"));
  Ok(())
}

#[test]
fn test_release_propagates_prerelease_everywhere() -> Result<()> {
  let repo = TestRepo::new()?;

  // run commands: no
  run_updater(&repo.path, &["2.0.0-rc.5"], "n\n")?;

  let gemspec = repo.read_file("rcs.gemspec")?;
  let requests = repo.read_file("lib/requests.rb")?;
  assert!(gemspec.contains("spec.version = \"2.0.0-rc.5\""));
  assert!(!gemspec.contains("1.0.0"));
  assert_eq!(requests.matches("\"X-Fern-SDK-Version\": \"2.0.0-rc.5\"").count(), 2);
  assert!(!requests.contains("1.0.0"));
  assert!(repo.tags()?.is_empty());
  Ok(())
}

#[test]
fn test_interactive_version_prompt() -> Result<()> {
  let repo = TestRepo::new()?;

  // update version: yes, version, run commands: no
  let output = run_updater(&repo.path, &[], "y\n1.2.0\nn\n")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Do you want to update the version and create a tag? (y/n): "));
  assert!(stdout.contains("Enter the new version (e.g., 2.0.0-rc.5): "));
  assert!(repo.read_file("rcs.gemspec")?.contains("spec.version = \"1.2.0\""));
  Ok(())
}

#[test]
fn test_declined_or_empty_version_is_not_an_error() -> Result<()> {
  let repo = TestRepo::new()?;

  run_updater(&repo.path, &[], "n\n")?;
  assert_eq!(repo.read_file("rcs.gemspec")?, crate::helpers::GEMSPEC);

  let output = run_updater(&repo.path, &[], "y\n\n")?;
  assert!(String::from_utf8_lossy(&output.stdout).contains("No version provided, skipping versioning"));

  // closed stdin behaves like declining
  run_updater(&repo.path, &[], "")?;
  assert_eq!(repo.read_file("rcs.gemspec")?, crate::helpers::GEMSPEC);
  Ok(())
}

#[test]
fn test_missing_manifest_still_releases() -> Result<()> {
  let repo = TestRepo::new()?;
  std::fs::remove_file(repo.path.join("rcs.gemspec"))?;

  let output = run_updater(&repo.path, &["1.1.0"], "y\nn\n")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(!stdout.contains("Current version:"), "{stdout}");
  assert!(repo.read_file("lib/requests.rb")?.contains("\"X-Fern-SDK-Version\": \"1.1.0\""));
  assert_eq!(repo.tags()?, vec!["1.1.0".to_string()]);
  Ok(())
}

#[test]
fn test_failed_commit_exits_nonzero_without_tag() -> Result<()> {
  let repo = TestRepo::new()?;

  // Same version as committed and no clients: nothing to commit
  let output = run_updater_raw(&repo.path, &["1.0.0"], "y\n")?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(2));
  assert!(stderr.contains("step 'commit'"), "{stderr}");
  assert!(repo.tags()?.is_empty());
  assert_eq!(repo.commit_count()?, 1);
  Ok(())
}

#[test]
fn test_failed_push_exits_nonzero_after_tagging() -> Result<()> {
  let repo = TestRepo::new()?;

  // No `origin` remote configured, so the first push fails
  let output = run_updater_raw(&repo.path, &["3.0.0"], "y\ny\n")?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr.contains("step 'push'"), "{stderr}");
  // no rollback of what already ran
  assert_eq!(repo.tags()?, vec!["3.0.0".to_string()]);
  assert_eq!(repo.commit_count()?, 2);
  Ok(())
}

#[test]
fn test_invalid_version_skips_release() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_updater(&repo.path, &["latest"], "")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("skipping versioning"), "{stdout}");
  assert_eq!(repo.read_file("rcs.gemspec")?, crate::helpers::GEMSPEC);
  Ok(())
}

#[test]
fn test_release_uses_identity_from_environment() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.forget_identity()?;
  // No global config either: identity only comes from GIT_AUTHOR_*/GIT_COMMITTER_*
  let empty_home = tempfile::TempDir::new()?;
  let home = empty_home.path().to_string_lossy().to_string();

  let output = run_updater_with_env(
    &repo.path,
    &["4.0.0"],
    "y\nn\n",
    &[
      ("HOME", home.as_str()),
      ("XDG_CONFIG_HOME", home.as_str()),
      ("GIT_CONFIG_NOSYSTEM", "1"),
      ("GIT_AUTHOR_NAME", "Release Bot"),
      ("GIT_AUTHOR_EMAIL", "bot@example.com"),
      ("GIT_COMMITTER_NAME", "Release Bot"),
      ("GIT_COMMITTER_EMAIL", "bot@example.com"),
    ],
  )?;

  assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
  assert_eq!(repo.tags()?, vec!["4.0.0".to_string()]);
  assert!(repo.head_message()?.starts_with("Release 4.0.0"));
  Ok(())
}

#[test]
fn test_import_only_patch_lands_in_commit_message() -> Result<()> {
  let repo = TestRepo::new()?;
  // Block anchors miss, the require anchor still matches
  let client = crate::helpers::MESSAGES_CLIENT.replace("attr_reader :request_client", "attr_reader :request_client_v2");
  repo.write_file(crate::helpers::MESSAGES_PATH, &client)?;
  repo.commit("Regenerate messages client")?;

  let output = run_updater(&repo.path, &["5.0.0"], "y\nn\n")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("✅ Updated lib/rcs/messages/client.rb"), "{stdout}");
  assert!(stdout.contains("   - MessagesClient requires (sms, mms, rcs)"));
  assert!(!stdout.contains("already up to date"));
  let message = repo.head_message()?;
  assert!(message.contains("- Update MessagesClient requires (sms, mms, rcs)"), "{message}");
  assert!(!message.contains("No client structure changes"));
  Ok(())
}
