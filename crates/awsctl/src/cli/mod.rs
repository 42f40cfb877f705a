//! CLI structure and command definitions
//!
//! Defines the command-line interface using clap, one subcommand tree per AWS
//! service plus profile management.

use clap::{Parser, Subcommand};

pub mod acmpca;
pub mod cloudhsm;
pub mod cloudtrail;
pub mod codestar;
pub mod opsworkscm;

pub use acmpca::*;
pub use cloudhsm::*;
pub use cloudtrail::*;
pub use codestar::*;
pub use opsworkscm::*;

use crate::output::OutputFormat;

/// AWS management CLI for ACM PCA, CloudTrail, CodeStar, OpsWorks CM and CloudHSM Classic
#[derive(Parser, Debug)]
#[command(name = "awsctl")]
#[command(
    version,
    about = "CLI for ACM PCA, CloudTrail, CodeStar, OpsWorks CM and CloudHSM Classic"
)]
#[command(long_about = "
CLI for ACM PCA, CloudTrail, CodeStar, OpsWorks CM and CloudHSM Classic

List commands paginate automatically: without --starting-token they follow
continuation tokens until the listing is exhausted. With --starting-token
they fetch exactly one page and report the next token, so scripts can drive
pagination themselves.

EXAMPLES:
    # Set up a profile
    awsctl profile set prod --region us-east-1

    # List every CloudTrail trail, following pagination
    awsctl cloudtrail list-trails -o json

    # Fetch one page and resume later
    awsctl codestar list-projects --starting-token eyJ0b2tlbiI6MX0=

    # Filter output with JMESPath
    awsctl acm-pca list -q '[?status==`ACTIVE`].arn'

For more help on a specific command, run:
    awsctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "AWSCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "AWSCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// AWS region, overriding the profile's region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// JMESPath query to filter output
    #[arg(long, short = 'q', global = true)]
    pub query: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    #[command(after_help = "EXAMPLES:
    # Create a profile pinned to a region
    awsctl profile set prod --region us-east-1

    # Use a named profile from ~/.aws/credentials
    awsctl profile set staging --region eu-west-1 --credentials-profile staging

    # Point a profile at a local endpoint (e.g. LocalStack)
    awsctl profile set local --region us-east-1 --endpoint-url http://localhost:4566

    # List all profiles
    awsctl profile list

    # Make a profile the default
    awsctl profile default prod
")]
    Profile(ProfileCommands),

    /// ACM Private Certificate Authority operations
    #[command(subcommand, name = "acm-pca", visible_alias = "pca")]
    AcmPca(AcmPcaCommands),

    /// CloudTrail operations
    #[command(subcommand, visible_alias = "ct")]
    Cloudtrail(CloudTrailCommands),

    /// CodeStar project operations
    #[command(subcommand, visible_alias = "cs")]
    Codestar(CodeStarCommands),

    /// OpsWorks for Chef Automate / Puppet Enterprise operations
    #[command(subcommand, name = "opsworks-cm", visible_alias = "owcm")]
    OpsworksCm(OpsWorksCmCommands),

    /// CloudHSM Classic operations
    #[command(subcommand, visible_alias = "hsm")]
    Cloudhsm(CloudHsmCommands),

    /// Version information
    #[command(visible_alias = "ver")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell", alias = "power-shell")]
    PowerShell,
    /// Elvish
    Elvish,
}

/// Profile management commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all configured profiles
    #[command(visible_alias = "ls")]
    List,

    /// Show the path to the configuration file
    Path,

    /// Show details of a specific profile
    #[command(visible_alias = "get")]
    Show {
        /// Profile name to show
        name: String,
    },

    /// Set or create a profile
    #[command(visible_alias = "add", visible_alias = "create")]
    Set {
        /// Profile name
        name: String,

        /// AWS region for this profile
        #[arg(long)]
        region: Option<String>,

        /// Named profile from the shared AWS config/credentials files
        #[arg(long)]
        credentials_profile: Option<String>,

        /// Endpoint URL override (for local stacks and testing)
        #[arg(long)]
        endpoint_url: Option<String>,

        /// Also make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Remove a profile
    #[command(visible_alias = "rm", visible_alias = "delete")]
    Remove {
        /// Profile name to remove
        name: String,
    },

    /// Set the default profile
    Default {
        /// Profile name to set as default
        name: String,
    },
}
