//! File-level configuration tests: loading, saving, and env expansion.

use awsctl_core::{Config, ConfigError, Profile};
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_loads_empty_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from_path(&path).unwrap();
    assert!(config.default_profile.is_none());
    assert!(config.profiles.is_empty());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "default_profile = [not toml");

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    let mut config = Config::default();
    config.set_profile(
        "prod".to_string(),
        Profile {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        },
    );
    config.save_to_path(&path).unwrap();

    let reloaded = Config::load_from_path(&path).unwrap();
    assert_eq!(
        reloaded.profiles["prod"].region.as_deref(),
        Some("us-east-1")
    );
}

#[test]
fn unknown_profile_fields_are_rejected_gracefully() {
    // toml deserialization ignores unknown keys by default, so a config
    // written by a newer version still loads.
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[profiles.prod]
region = "us-east-1"
future_field = "ignored"
"#,
    );

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.profiles["prod"].region.as_deref(), Some("us-east-1"));
}

#[test]
#[serial]
fn env_vars_expand_when_set() {
    std::env::set_var("AWSCTL_TEST_REGION", "ap-southeast-2");
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[profiles.prod]
region = "${AWSCTL_TEST_REGION}"
"#,
    );

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(
        config.profiles["prod"].region.as_deref(),
        Some("ap-southeast-2")
    );
    std::env::remove_var("AWSCTL_TEST_REGION");
}

#[test]
#[serial]
fn env_vars_fall_back_to_default_when_unset() {
    std::env::remove_var("AWSCTL_TEST_REGION");
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[profiles.prod]
region = "${AWSCTL_TEST_REGION:-eu-central-1}"
"#,
    );

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(
        config.profiles["prod"].region.as_deref(),
        Some("eu-central-1")
    );
}

#[test]
#[serial]
fn config_path_honors_env_override() {
    std::env::set_var("AWSCTL_CONFIG", "/tmp/awsctl-test/config.toml");
    let path = Config::config_path().unwrap();
    assert_eq!(path, std::path::Path::new("/tmp/awsctl-test/config.toml"));
    std::env::remove_var("AWSCTL_CONFIG");
}
