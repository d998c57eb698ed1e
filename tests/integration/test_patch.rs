//! Integration tests for the client patch stage

use crate::helpers::{MESSAGES_PATH, PHONE_NUMBERS_PATH, TestRepo, run_updater};
use anyhow::Result;

#[test]
fn test_patch_adds_accessors_and_reports_changes() -> Result<()> {
  let repo = TestRepo::with_clients()?;

  let output = run_updater(&repo.path, &["--no-tag"], "")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("✅ Updated lib/rcs/messages/client.rb"), "{stdout}");
  assert!(stdout.contains("✅ Updated lib/rcs/phone_numbers/client.rb"), "{stdout}");
  assert!(stdout.contains("Successfully updated:"));
  assert!(stdout.contains("   - MessagesClient requires (sms, mms, rcs)"));
  assert!(stdout.contains("   - MessagesClient (added sms, mms, rcs accessors)"));
  assert!(stdout.contains("   - AsyncMessagesClient (added sms, mms, rcs accessors)"));
  assert!(stdout.contains("   - PhoneNumbersClient (added campaign, webhook accessors)"));
  assert!(stdout.contains("   - AsyncPhoneNumbersClient (added campaign, webhook accessors)"));
  // --no-tag skips the whole release stage
  assert!(!stdout.contains("Version Management"));

  let messages = repo.read_file(MESSAGES_PATH)?;
  for accessor in ["sms", "mms", "rcs"] {
    assert_eq!(messages.matches(&format!("attr_reader :{accessor}\n")).count(), 2);
  }
  assert!(messages.contains("@mms = Pinnacle::Messages::MmsClient.new(request_client: request_client)"));
  assert!(messages.contains("@mms = Pinnacle::Messages::AsyncMmsClient.new(request_client: request_client)"));

  let phone_numbers = repo.read_file(PHONE_NUMBERS_PATH)?;
  assert!(phone_numbers.contains("require_relative \"campaign/client\"\nrequire_relative \"webhook/client\"\n"));
  assert_eq!(phone_numbers.matches("attr_reader :webhook").count(), 2);

  assert_eq!(repo.commit_count()?, 2, "--no-tag must not commit");
  Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
  let repo = TestRepo::with_clients()?;

  run_updater(&repo.path, &["--no-tag"], "")?;
  let messages = repo.read_file(MESSAGES_PATH)?;
  let phone_numbers = repo.read_file(PHONE_NUMBERS_PATH)?;
  let status = repo.status_porcelain()?;

  let output = run_updater(&repo.path, &["--no-tag"], "")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("All client structures are already up to date!"), "{stdout}");
  assert!(!stdout.contains("✅ Updated"));
  assert_eq!(repo.read_file(MESSAGES_PATH)?, messages);
  assert_eq!(repo.read_file(PHONE_NUMBERS_PATH)?, phone_numbers);
  assert_eq!(repo.status_porcelain()?, status);
  Ok(())
}

#[test]
fn test_missing_targets_warn_and_exit_zero() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_updater(&repo.path, &["--no-tag"], "")?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("⚠️  lib/rcs/messages/client.rb not found"), "{stdout}");
  assert!(stdout.contains("⚠️  lib/rcs/phone_numbers/client.rb not found"));
  // reported once on stdout, not echoed as a log line
  assert!(!String::from_utf8_lossy(&output.stderr).contains("patch target missing"));
  assert!(stdout.contains("All client structures are already up to date!"));
  Ok(())
}

#[test]
fn test_unrecognised_client_left_byte_for_byte() -> Result<()> {
  let repo = TestRepo::new()?;
  let handwritten = "# frozen_string_literal: true\n\nmodule Rcs\n  module Messages\n    class Client\n      def initialize(client:)\n        @client = client\n      end\n    end\n  end\nend\n";
  repo.write_file(MESSAGES_PATH, handwritten)?;

  run_updater(&repo.path, &["--no-tag"], "")?;

  assert_eq!(repo.read_file(MESSAGES_PATH)?, handwritten);
  Ok(())
}
