//! Integration tests for sdk-updater

mod test_patch;
mod test_release;
