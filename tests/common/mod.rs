//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture owning a temporary rit home directory and
//! helpers to seed it and to run the binary against it.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_providers(providers::GITHUB_ONLY);
//!     fixture.command().args(["set", "credential"]).assert().failure();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::providers;
    pub use super::TestFixture;
}

/// Provider schema snippets for testing.
#[allow(dead_code)]
pub mod providers {
    /// A single provider with one secret field.
    pub const GITHUB_ONLY: &str = r#"{
  "github": [
    { "name": "token", "type": "secret" }
  ]
}
"#;

    /// Not a provider schema at all.
    pub const INVALID: &str = "providers: [";
}

/// A test fixture that provides a temporary rit home directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_repositories("[]");
///
/// fixture
///     .command()
///     .args(["list", "repo"])
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty home directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `providers.json` with the given content.
    pub fn with_providers(self, content: &str) -> Self {
        self.temp_dir
            .child("providers.json")
            .write_str(content)
            .expect("Failed to write providers file");
        self
    }

    /// Write `repositories.json` with the given content.
    pub fn with_repositories(self, content: &str) -> Self {
        self.temp_dir
            .child("repositories.json")
            .write_str(content)
            .expect("Failed to write repositories file");
        self
    }

    /// Path of the rit home directory.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the provider schema file.
    pub fn providers_path(&self) -> PathBuf {
        self.home().join("providers.json")
    }

    /// Path a credential for `service` is written to.
    pub fn credential_path(&self, service: &str) -> PathBuf {
        self.home().join("credentials").join(service)
    }

    /// Create a child path in the home directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command pointed at this fixture's home, with colors off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rit");
        cmd.env("RIT_HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_providers() {
        let fixture = TestFixture::new().with_providers(providers::GITHUB_ONLY);
        assert!(fixture.providers_path().exists());
    }

    #[test]
    fn test_provider_snippets() {
        serde_json::from_str::<serde_json::Value>(providers::GITHUB_ONLY)
            .expect("GITHUB_ONLY should be valid JSON");
        assert!(serde_json::from_str::<serde_json::Value>(providers::INVALID).is_err());
    }
}
