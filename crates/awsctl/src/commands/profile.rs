//! Profile management command implementations

use awsctl_core::{Config, Profile};
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::cli::ProfileCommands;
use crate::commands::utils::print_result;
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

/// Handle profile management commands
pub async fn handle_profile_command(
    profile_cmd: &ProfileCommands,
    conn_mgr: &ConnectionManager,
    output_format: OutputFormat,
) -> CliResult<()> {
    use ProfileCommands::*;

    match profile_cmd {
        List => handle_list(conn_mgr, output_format),
        Path => handle_path(conn_mgr),
        Show { name } => handle_show(conn_mgr, name, output_format),
        Set {
            name,
            region,
            credentials_profile,
            endpoint_url,
            default,
        } => handle_set(
            conn_mgr,
            name,
            region.clone(),
            credentials_profile.clone(),
            endpoint_url.clone(),
            *default,
        ),
        Remove { name } => handle_remove(conn_mgr, name),
        Default { name } => handle_default(conn_mgr, name),
    }
}

fn profile_to_json(name: &str, profile: &Profile, is_default: bool) -> Value {
    json!({
        "name": name,
        "region": profile.region,
        "credentialsProfile": profile.credentials_profile,
        "endpointUrl": profile.endpoint_url,
        "isDefault": is_default,
    })
}

fn handle_list(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    debug!("Listing all configured profiles");
    let profiles = conn_mgr.config.list_profiles();
    trace!("Found {} profiles", profiles.len());

    if profiles.is_empty() {
        println!("No profiles configured.");
        println!("Use 'awsctl profile set' to create a profile.");
        return Ok(());
    }

    let default = conn_mgr.config.default_profile.as_deref();
    let profile_list: Vec<Value> = profiles
        .iter()
        .map(|(name, profile)| profile_to_json(name, profile, default == Some(name.as_str())))
        .collect();

    print_result(Value::Array(profile_list), output_format, None)
}

fn handle_path(conn_mgr: &ConnectionManager) -> CliResult<()> {
    if let Some(ref path) = conn_mgr.config_path {
        println!("{}", path.display());
    } else {
        println!("{}", Config::config_path()?.display());
    }
    Ok(())
}

fn handle_show(
    conn_mgr: &ConnectionManager,
    name: &str,
    output_format: OutputFormat,
) -> CliResult<()> {
    let profile =
        conn_mgr
            .config
            .profiles
            .get(name)
            .ok_or_else(|| AwsCtlError::ProfileNotFound {
                name: name.to_string(),
            })?;
    let is_default = conn_mgr.config.default_profile.as_deref() == Some(name);

    print_result(profile_to_json(name, profile, is_default), output_format, None)
}

fn handle_set(
    conn_mgr: &ConnectionManager,
    name: &str,
    region: Option<String>,
    credentials_profile: Option<String>,
    endpoint_url: Option<String>,
    default: bool,
) -> CliResult<()> {
    debug!("Setting profile '{}'", name);
    let mut config = conn_mgr.config.clone();

    config.set_profile(
        name.to_string(),
        Profile {
            region,
            credentials_profile,
            endpoint_url,
        },
    );
    if default || config.default_profile.is_none() {
        config.default_profile = Some(name.to_string());
    }

    save(conn_mgr, &config)?;
    println!("Profile '{}' saved", name);
    Ok(())
}

fn handle_remove(conn_mgr: &ConnectionManager, name: &str) -> CliResult<()> {
    let mut config = conn_mgr.config.clone();

    if config.remove_profile(name).is_none() {
        return Err(AwsCtlError::ProfileNotFound {
            name: name.to_string(),
        });
    }

    save(conn_mgr, &config)?;
    println!("Profile '{}' removed", name);
    Ok(())
}

fn handle_default(conn_mgr: &ConnectionManager, name: &str) -> CliResult<()> {
    let mut config = conn_mgr.config.clone();

    if !config.profiles.contains_key(name) {
        return Err(AwsCtlError::ProfileNotFound {
            name: name.to_string(),
        });
    }
    config.default_profile = Some(name.to_string());

    save(conn_mgr, &config)?;
    println!("Default profile set to '{}'", name);
    Ok(())
}

fn save(conn_mgr: &ConnectionManager, config: &Config) -> CliResult<()> {
    if let Some(ref path) = conn_mgr.config_path {
        config.save_to_path(path)?;
    } else {
        config.save()?;
    }
    Ok(())
}
