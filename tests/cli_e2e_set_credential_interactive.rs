//! End-to-end tests for interactive `rit set credential` and `rit add repo`
//! using TTY simulation.
//!
//! These tests use the `rexpect` crate to simulate an interactive terminal
//! session, which is required because `dialoguer` prompts need a real TTY.
//!
//! **Platform limitation**: `rexpect` only works on Unix-like systems (Linux, macOS, WSL).
//! These tests are automatically skipped on Windows.

#![cfg(unix)]

use std::fs;
use std::process::Command;

use rexpect::session::{spawn_command, PtySession};
use tempfile::TempDir;

/// Get the path to the `rit` binary built for this test run.
fn get_binary_path() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_rit"))
}

/// Spawn `rit <args>` in a PTY with `home` as the rit home.
fn spawn_rit(home: &TempDir, args: &[&str]) -> Result<PtySession, rexpect::error::Error> {
    let mut cmd = Command::new(get_binary_path());
    cmd.args(args)
        .env("RIT_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");

    spawn_command(cmd, Some(30_000))
}

const ARROW_DOWN: &str = "\x1b[B";

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_existing_provider() {
    let home = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        home.path().join("providers.json"),
        r#"{"github":[{"name":"token","type":"secret"}]}"#,
    )
    .unwrap();

    let mut session = spawn_rit(&home, &["set", "credential"]).expect("Failed to spawn rit");

    session
        .exp_string("Select your provider")
        .expect("Should see provider list");
    // "github" is the first entry.
    session.send_line("").expect("Failed to select provider");

    session.exp_string("token:").expect("Should ask for token");
    session.send_line("ghp_xxx").expect("Failed to send token");

    session
        .exp_string("Github credential saved!")
        .expect("Should confirm");
    session.exp_eof().expect("Process should exit");

    let stored = fs::read_to_string(home.path().join("credentials/github")).unwrap();
    assert!(stored.contains("ghp_xxx"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_new_provider() {
    let home = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        home.path().join("providers.json"),
        r#"{"github":[{"name":"token","type":"secret"}]}"#,
    )
    .unwrap();

    let mut session = spawn_rit(&home, &["set", "credential"]).expect("Failed to spawn rit");

    session.exp_string("Select your provider").unwrap();
    // Move from "github" to "Add a new".
    session.send(ARROW_DOWN).unwrap();
    session.send_line("").unwrap();

    session.exp_string("Define your provider name:").unwrap();
    session.send_line("npm").unwrap();

    session.exp_string("Define your field name").unwrap();
    session.send_line("token").unwrap();

    session.exp_string("Select your field type:").unwrap();
    session.send(ARROW_DOWN).unwrap();
    session.send_line("").unwrap();

    session
        .exp_string("Add more fields to this provider?")
        .unwrap();
    session.send("n").unwrap();

    session.exp_string("token:").unwrap();
    session.send_line("npm_abc").unwrap();

    session.exp_string("Npm credential saved!").unwrap();
    session.exp_eof().unwrap();

    let schema = fs::read_to_string(home.path().join("providers.json")).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert_eq!(
        schema["npm"],
        serde_json::json!([{ "name": "token", "type": "secret" }])
    );
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_add_repo() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let mut session = spawn_rit(&home, &["add", "repo"]).expect("Failed to spawn rit");

    session.exp_string("Name of the repository").unwrap();
    session.send_line("commons").unwrap();

    session.exp_string("URL of the tree").unwrap();
    session
        .send_line("https://commons.example.com/tree/tree.json")
        .unwrap();

    session.exp_string("Priority").unwrap();
    session.send_line("0").unwrap();

    session.exp_string("Repository commons added!").unwrap();
    session.exp_eof().unwrap();

    let registry = fs::read_to_string(home.path().join("repositories.json")).unwrap();
    assert!(registry.contains("https://commons.example.com/tree/tree.json"));
}
