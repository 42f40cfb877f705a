//! Profile configuration for awsctl.
//!
//! Configuration is stored in TOML with named profiles. A profile selects SDK
//! inputs only: region, the shared-credentials profile to use, and an
//! optional endpoint override. Secrets never land here; credential resolution
//! is the SDK's default chain.
//!
//! ```toml
//! default_profile = "prod"
//!
//! [profiles.prod]
//! region = "us-east-1"
//!
//! [profiles.local]
//! region = "us-east-1"
//! endpoint_url = "http://localhost:4566"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Individual profile configuration
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Profile {
    /// AWS region to use for this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Named profile from the shared AWS config/credentials files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_profile: Option<String>,
    /// Endpoint override, mainly for local stacks and tests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        // Expand environment variables in the config content
        let expanded_content = Self::expand_env_vars(&content);

        let config: Config = toml::from_str(&expanded_content)?;

        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Resolve the profile to use for a command.
    ///
    /// Resolution order:
    /// 1. Explicit `--profile` (must exist)
    /// 2. `default_profile` from the config file (must exist)
    /// 3. No profile at all: the SDK's ambient credential/region chain applies
    pub fn resolve_profile(&self, explicit: Option<&str>) -> Result<Option<(&str, &Profile)>> {
        if let Some(name) = explicit {
            let profile = self
                .profiles
                .get_key_value(name)
                .ok_or_else(|| ConfigError::ProfileNotFound {
                    name: name.to_string(),
                })?;
            return Ok(Some((profile.0.as_str(), profile.1)));
        }

        if let Some(name) = self.default_profile.as_deref() {
            let profile =
                self.profiles
                    .get_key_value(name)
                    .ok_or_else(|| ConfigError::DefaultProfileMissing {
                        name: name.to_string(),
                    })?;
            return Ok(Some((profile.0.as_str(), profile.1)));
        }

        Ok(None)
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name, clearing the default if it pointed at it
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file.
    ///
    /// `AWSCTL_CONFIG` overrides the platform default
    /// (`~/.config/awsctl/config.toml` on Linux).
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("AWSCTL_CONFIG") {
            return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
        }

        let proj_dirs =
            ProjectDirs::from("com", "awsctl", "awsctl").ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand environment variables in configuration content.
    ///
    /// Supports `${VAR}` and `${VAR:-default}` so configs can reference the
    /// environment while keeping static fallbacks.
    fn expand_env_vars(content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let expr = &after[..end];
                    let (var, default) = match expr.split_once(":-") {
                        Some((var, default)) => (var, Some(default)),
                        None => (expr, None),
                    };
                    match std::env::var(var) {
                        Ok(value) => result.push_str(&value),
                        Err(_) => match default {
                            Some(default) => result.push_str(default),
                            // Leave unknown references untouched
                            None => {
                                result.push_str("${");
                                result.push_str(expr);
                                result.push('}');
                            }
                        },
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    result.push_str("${");
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_config() -> Config {
        let mut config = Config {
            default_profile: Some("prod".to_string()),
            ..Default::default()
        };
        config.set_profile(
            "prod".to_string(),
            Profile {
                region: Some("us-east-1".to_string()),
                ..Default::default()
            },
        );
        config.set_profile(
            "dev".to_string(),
            Profile {
                region: Some("eu-west-1".to_string()),
                credentials_profile: Some("development".to_string()),
                endpoint_url: None,
            },
        );
        config
    }

    #[test]
    fn roundtrip_through_toml() {
        let config = sample_config();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.default_profile.as_deref(), Some("prod"));
        assert_eq!(parsed.profiles.len(), 2);
        assert_eq!(
            parsed.profiles["dev"].credentials_profile.as_deref(),
            Some("development")
        );
    }

    #[test]
    fn explicit_profile_wins_over_default() {
        let config = sample_config();
        let (name, profile) = config.resolve_profile(Some("dev")).unwrap().unwrap();
        assert_eq!(name, "dev");
        assert_eq!(profile.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn default_profile_used_when_no_explicit() {
        let config = sample_config();
        let (name, _) = config.resolve_profile(None).unwrap().unwrap();
        assert_eq!(name, "prod");
    }

    #[test]
    fn no_profiles_resolves_to_ambient_chain() {
        let config = Config::default();
        assert!(config.resolve_profile(None).unwrap().is_none());
    }

    #[test]
    fn unknown_explicit_profile_errors() {
        let config = sample_config();
        let err = config.resolve_profile(Some("nope")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }

    #[test]
    fn missing_default_profile_errors() {
        let config = Config {
            default_profile: Some("gone".to_string()),
            ..Default::default()
        };
        let err = config.resolve_profile(None).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultProfileMissing { .. }));
    }

    #[test]
    fn removing_default_profile_clears_default() {
        let mut config = sample_config();
        assert!(config.remove_profile("prod").is_some());
        assert_eq!(config.default_profile, None);
        assert!(config.remove_profile("prod").is_none());
    }

    #[test]
    fn list_profiles_is_sorted() {
        let config = sample_config();
        let names: Vec<_> = config
            .list_profiles()
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["dev", "prod"]);
    }

    #[test]
    fn expand_env_vars_with_default() {
        let expanded = Config::expand_env_vars("region = \"${AWSCTL_TEST_UNSET:-us-west-2}\"");
        assert_eq!(expanded, "region = \"us-west-2\"");
    }

    #[test]
    fn expand_env_vars_leaves_unknown_untouched() {
        let expanded = Config::expand_env_vars("region = \"${AWSCTL_TEST_UNSET}\"");
        assert_eq!(expanded, "region = \"${AWSCTL_TEST_UNSET}\"");
    }
}
