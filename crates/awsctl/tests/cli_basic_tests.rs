//! Basic CLI behavior: help, version, completions and profile management.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn awsctl() -> Command {
    let mut cmd = Command::cargo_bin("awsctl").unwrap();
    cmd.env_remove("AWSCTL_PROFILE");
    cmd.env_remove("AWSCTL_CONFIG_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_services() {
    awsctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("acm-pca"))
        .stdout(predicate::str::contains("cloudtrail"))
        .stdout(predicate::str::contains("codestar"))
        .stdout(predicate::str::contains("opsworks-cm"))
        .stdout(predicate::str::contains("cloudhsm"));
}

#[test]
fn version_command_prints_version() {
    awsctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_command_json_output() {
    awsctl()
        .args(["version", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"awsctl\""));
}

#[test]
fn completions_generate_for_bash() {
    awsctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("awsctl"));
}

#[test]
fn unknown_command_fails() {
    awsctl().arg("frobnicate").assert().failure();
}

#[test]
fn invalid_output_format_is_rejected() {
    awsctl()
        .args(["version", "-o", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn profile_lifecycle_roundtrip() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    let config = config.to_str().unwrap();

    awsctl()
        .args([
            "--config-file",
            config,
            "profile",
            "set",
            "prod",
            "--region",
            "us-east-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'prod' saved"));

    awsctl()
        .args(["--config-file", config, "profile", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod"))
        .stdout(predicate::str::contains("us-east-1"));

    awsctl()
        .args(["--config-file", config, "profile", "show", "prod", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("us-east-1"))
        // First profile created becomes the default
        .stdout(predicate::str::contains("\"isDefault\": true"));

    awsctl()
        .args(["--config-file", config, "profile", "remove", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'prod' removed"));

    awsctl()
        .args(["--config-file", config, "profile", "show", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'prod' not found"));
}

#[test]
fn profile_default_requires_existing_profile() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    let config = config.to_str().unwrap();

    awsctl()
        .args(["--config-file", config, "profile", "default", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'missing' not found"));
}

#[test]
fn profile_path_honors_config_file_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    let config = config.to_str().unwrap();

    awsctl()
        .args(["--config-file", config, "profile", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config));
}

#[test]
fn unknown_profile_flag_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    let config = config.to_str().unwrap();

    awsctl()
        .args([
            "--config-file",
            config,
            "-p",
            "ghost",
            "cloudtrail",
            "list-trails",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'ghost' not found"));
}

#[test]
fn malformed_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "profiles = [broken").unwrap();

    awsctl()
        .args(["--config-file", config.to_str().unwrap(), "profile", "list"])
        .assert()
        .failure();
}
