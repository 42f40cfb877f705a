//! Connection management for AWS service clients

use awsctl_core::Config;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::{debug, info, trace};

use crate::error::Result as CliResult;

/// User agent application id attached to outgoing requests
const AWSCTL_APP_NAME: &str = "awsctl";

/// Connection manager for creating configured service clients
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<std::path::PathBuf>,
    /// Region from the command line, taking precedence over the profile
    pub region_override: Option<String>,
}

impl ConnectionManager {
    /// Create a new connection manager with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            config_path: None,
            region_override: None,
        }
    }

    /// Create a new connection manager with a custom config path and region override
    pub fn with_config_path(
        config: Config,
        config_path: Option<std::path::PathBuf>,
        region_override: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            region_override,
        }
    }

    /// Save the configuration to the appropriate location
    pub fn save_config(&self) -> CliResult<()> {
        if let Some(ref path) = self.config_path {
            self.config.save_to_path(path)?;
        } else {
            self.config.save()?;
        }
        Ok(())
    }

    /// Build the shared SDK configuration for a command.
    ///
    /// Precedence for the region: `--region` flag, then the profile's region,
    /// then the SDK's default provider chain (env vars, shared config, IMDS).
    /// Credentials always come from the SDK's default chain; a profile can only
    /// select which shared-credentials profile that chain reads.
    pub async fn sdk_config(&self, profile_name: Option<&str>) -> CliResult<SdkConfig> {
        debug!("Building SDK configuration");
        trace!("Profile name: {:?}", profile_name);

        let resolved = self.config.resolve_profile(profile_name)?;

        let mut profile_region = None;
        let mut credentials_profile = None;
        let mut endpoint_url = None;
        if let Some((name, profile)) = resolved {
            info!("Using awsctl profile: {}", name);
            profile_region = profile.region.clone();
            credentials_profile = profile.credentials_profile.clone();
            endpoint_url = profile.endpoint_url.clone();
        } else {
            debug!("No profile configured, using ambient SDK defaults");
        }

        let region = self.region_override.clone().or(profile_region);
        if let Some(ref r) = region {
            debug!("Region: {}", r);
        }
        let region_provider =
            RegionProviderChain::first_try(region.map(Region::new)).or_default_provider();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .app_name(aws_config::AppName::new(AWSCTL_APP_NAME).map_err(anyhow::Error::from)?);

        if let Some(ref creds_profile) = credentials_profile {
            debug!("Using shared credentials profile: {}", creds_profile);
            loader = loader.profile_name(creds_profile);
        }

        if let Some(ref url) = endpoint_url {
            info!("Endpoint override: {}", url);
            loader = loader.endpoint_url(url);
        }

        Ok(loader.load().await)
    }

    pub async fn acmpca_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<aws_sdk_acmpca::Client> {
        let sdk_config = self.sdk_config(profile_name).await?;
        Ok(aws_sdk_acmpca::Client::new(&sdk_config))
    }

    pub async fn cloudtrail_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<aws_sdk_cloudtrail::Client> {
        let sdk_config = self.sdk_config(profile_name).await?;
        Ok(aws_sdk_cloudtrail::Client::new(&sdk_config))
    }

    pub async fn codestar_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<aws_sdk_codestar::Client> {
        let sdk_config = self.sdk_config(profile_name).await?;
        Ok(aws_sdk_codestar::Client::new(&sdk_config))
    }

    pub async fn opsworkscm_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<aws_sdk_opsworkscm::Client> {
        let sdk_config = self.sdk_config(profile_name).await?;
        Ok(aws_sdk_opsworkscm::Client::new(&sdk_config))
    }

    pub async fn cloudhsm_client(
        &self,
        profile_name: Option<&str>,
    ) -> CliResult<aws_sdk_cloudhsm::Client> {
        let sdk_config = self.sdk_config(profile_name).await?;
        Ok(aws_sdk_cloudhsm::Client::new(&sdk_config))
    }
}
