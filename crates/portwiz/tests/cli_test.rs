//! Integration tests for the `portwiz` binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring dashboard access.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `portwiz` binary with env isolation.
///
/// Clears all `PORTWIZ_*` / `MERAKI_*` env vars and points config
/// directories at a nonexistent path so tests never touch the user's
/// real configuration.
fn portwiz_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("portwiz");
    cmd.env("HOME", "/tmp/portwiz-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/portwiz-test-nonexistent")
        .env_remove("PORTWIZ_PROFILE")
        .env_remove("PORTWIZ_BASE_URL")
        .env_remove("PORTWIZ_OUTPUT")
        .env_remove("PORTWIZ_TIMEOUT")
        .env_remove("PORTWIZ_WEBHOOK_URL")
        .env_remove("MERAKI_API_KEY");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = portwiz_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    portwiz_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("wizard")
            .and(predicate::str::contains("orgs"))
            .and(predicate::str::contains("networks"))
            .and(predicate::str::contains("ports")),
    );
}

#[test]
fn test_version_flag() {
    portwiz_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portwiz"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    portwiz_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    portwiz_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    portwiz_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = portwiz_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_orgs_without_api_key_fails_with_auth_exit_code() {
    let output = portwiz_cmd().arg("orgs").output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(3),
        "Expected auth exit code without a key"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("API key") || text.contains("credentials"),
        "Expected missing-key error:\n{text}"
    );
}

#[test]
fn test_unknown_profile_fails() {
    portwiz_cmd()
        .args(["--profile", "nope", "orgs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_output_format() {
    let output = portwiz_cmd()
        .args(["--output", "invalid", "orgs"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse; the failure should be about the missing
    // API key, not about argument parsing.
    let output = portwiz_cmd()
        .args(["--output", "json", "--verbose", "--timeout", "60", "orgs"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

// ── Config commands (no dashboard needed) ───────────────────────────

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    portwiz_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_profile"));
}

#[test]
fn test_config_path_prints_location() {
    portwiz_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_subcommands_exist() {
    portwiz_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-key")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_wizard_help_mentions_webhook() {
    portwiz_cmd()
        .args(["wizard", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("webhook"));
}

#[test]
fn test_networks_requires_org() {
    let output = portwiz_cmd().arg("networks").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "missing --org is a usage error");
}
