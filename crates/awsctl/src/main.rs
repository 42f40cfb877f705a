use anyhow::Result;
use awsctl_core::Config;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use tracing::{debug, error, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::AwsCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    // Load configuration from specified path or default location
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    let conn_mgr = ConnectionManager::with_config_path(config, config_path, cli.region.clone());

    // Execute command
    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "awsctl=warn,awsctl_core=warn",
            1 => "awsctl=info,awsctl_core=info",
            2 => "awsctl=debug,awsctl_core=debug",
            _ => "awsctl=trace,awsctl_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), AwsCtlError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::Version => {
            debug!("Showing version information");
            match cli.output {
                output::OutputFormat::Json | output::OutputFormat::Yaml => {
                    let output_data = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "name": env!("CARGO_PKG_NAME"),
                    });
                    commands::utils::print_result(output_data, cli.output, None)?;
                }
                _ => {
                    println!("awsctl {}", env!("CARGO_PKG_VERSION"));
                }
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            debug!("Generating completions for {:?}", shell);
            generate_completions(*shell);
            Ok(())
        }

        Commands::Profile(profile_cmd) => {
            debug!("Executing profile command");
            commands::profile::handle_profile_command(profile_cmd, conn_mgr, cli.output).await
        }

        Commands::AcmPca(pca_cmd) => {
            commands::acmpca::handle_acmpca_command(
                conn_mgr,
                cli.profile.as_deref(),
                pca_cmd,
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }

        Commands::Cloudtrail(trail_cmd) => {
            commands::cloudtrail::handle_cloudtrail_command(
                conn_mgr,
                cli.profile.as_deref(),
                trail_cmd,
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }

        Commands::Codestar(codestar_cmd) => {
            commands::codestar::handle_codestar_command(
                conn_mgr,
                cli.profile.as_deref(),
                codestar_cmd,
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }

        Commands::OpsworksCm(opsworks_cmd) => {
            commands::opsworkscm::handle_opsworkscm_command(
                conn_mgr,
                cli.profile.as_deref(),
                opsworks_cmd,
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }

        Commands::Cloudhsm(hsm_cmd) => {
            commands::cloudhsm::handle_cloudhsm_command(
                conn_mgr,
                cli.profile.as_deref(),
                hsm_cmd,
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Generate shell completions
fn generate_completions(shell: cli::Shell) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, name, &mut std::io::stdout())
        }
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut std::io::stdout()),
    }
}

/// Format command for human-readable logging
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Version => "version".to_string(),
        Commands::Completions { shell } => format!("completions {:?}", shell),
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {}", name),
                Set { name, .. } => format!("profile set {}", name),
                Remove { name } => format!("profile remove {}", name),
                Default { name } => format!("profile default {}", name),
            }
        }
        Commands::AcmPca(cmd) => format!("acm-pca {:?}", cmd),
        Commands::Cloudtrail(cmd) => format!("cloudtrail {:?}", cmd),
        Commands::Codestar(cmd) => format!("codestar {:?}", cmd),
        Commands::OpsworksCm(cmd) => format!("opsworks-cm {:?}", cmd),
        Commands::Cloudhsm(cmd) => format!("cloudhsm {:?}", cmd),
    }
}
