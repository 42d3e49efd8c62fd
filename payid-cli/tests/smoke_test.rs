//! Smoke tests for the payid CLI
//!
//! These tests run the built binary and need no network access.

use std::process::{Command, Output};

fn payid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_payid"))
        .args(args)
        .env_remove("PAYID_TIMEOUT_SECS")
        .env_remove("PAYID_MAX_DISCOVERY_HOPS")
        .output()
        .expect("Failed to execute payid")
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let output = payid(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for command in ["resolve", "inspect", "parse"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

/// Test that version is shown
#[test]
fn test_cli_version() {
    let output = payid(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_parse_prints_parts() {
    let output = payid(&["parse", "payid:alice$Example.com"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("example.com"));
    assert!(stdout.contains(
        "https://example.com/.well-known/webfinger?resource=alice$example.com"
    ));
}

#[test]
fn test_parse_json() {
    let output = payid(&["parse", "--json", "alice$example.com"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["account"], "alice");
    assert_eq!(value["host"], "example.com");
    assert_eq!(value["payid"], "alice$example.com");
}

#[test]
fn test_invalid_payid_fails() {
    let output = payid(&["parse", "not-a-payid"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid-payid"), "stderr: {stderr}");
}

#[test]
fn test_resolve_unreachable_host_fails() {
    // Nothing listens on port 1.
    let output = payid(&["resolve", "--timeout", "5", "alice$127.0.0.1:1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("request-failed"), "stderr: {stderr}");
}
