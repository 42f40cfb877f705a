//! Error types for awsctl
//!
//! Defines structured error types using thiserror for better error handling and user experience.

use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Profile 'prod' not found
///
///   tip: List available profiles: awsctl profile list
/// ```
pub struct CliDiagnostic {
    message: String,
    detail: Option<String>,
    tips: Vec<(String, Vec<String>)>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detail: None,
            tips: Vec::new(),
        }
    }

    /// Add a detail line below the error message.
    pub fn detail(mut self, text: &str) -> Self {
        self.detail = Some(text.to_string());
        self
    }

    /// Add a tip with optional example commands.
    pub fn tip(mut self, description: &str, commands: &[&str]) -> Self {
        self.tips.push((
            description.to_string(),
            commands.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        if let Some(detail) = &self.detail {
            eprintln!("  {}", detail);
        }

        for (description, commands) in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
            for cmd in commands {
                eprintln!("      {}", cmd);
            }
        }
    }
}

/// Main error type for the awsctl application
#[derive(Error, Debug)]
pub enum AwsCtlError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("File error for '{path}': {message}")]
    FileError { path: String, message: String },

    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for awsctl operations
pub type Result<T> = std::result::Result<T, AwsCtlError>;

impl AwsCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AwsCtlError::ProfileNotFound { name } => vec![
                "List available profiles: awsctl profile list".to_string(),
                format!("Create profile '{}': awsctl profile set {}", name, name),
                "Check profile name spelling".to_string(),
            ],
            AwsCtlError::ApiError { message }
                if message.contains("ExpiredToken") || message.contains("InvalidClientTokenId") =>
            {
                vec![
                    "Refresh your AWS credentials (e.g. re-run 'aws sso login')".to_string(),
                    "Verify the credentials profile: awsctl profile show <name>".to_string(),
                ]
            }
            AwsCtlError::ApiError { message } if message.contains("AccessDenied") => vec![
                "Check that your IAM identity has permission for this operation".to_string(),
                "Verify you are using the intended profile and region".to_string(),
            ],
            AwsCtlError::ApiError { message } if message.contains("NotFound") => vec![
                "Verify the resource identifier (ARN or name) is correct".to_string(),
                "List available resources to find the correct identifier".to_string(),
                "Check that you're using the correct region".to_string(),
            ],
            AwsCtlError::ConnectionError { .. } => vec![
                "Check network connectivity".to_string(),
                "Verify the endpoint URL if one is configured: awsctl profile show <name>"
                    .to_string(),
                "Check the configured region: awsctl --region <region> ...".to_string(),
            ],
            AwsCtlError::InvalidInput { .. } => vec![
                "Check the command syntax: awsctl <command> --help".to_string(),
                "Verify timestamps are RFC 3339 (e.g. 2026-08-01T00:00:00Z)".to_string(),
            ],
            AwsCtlError::FileError { path, .. } => vec![
                format!("Check that file exists: {}", path),
                "Verify file permissions are correct".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion, &[]);
        }

        diag.print();
    }
}

impl From<awsctl_core::ConfigError> for AwsCtlError {
    fn from(err: awsctl_core::ConfigError) -> Self {
        match err {
            awsctl_core::ConfigError::ProfileNotFound { name } => {
                AwsCtlError::ProfileNotFound { name }
            }
            other => AwsCtlError::Configuration(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AwsCtlError {
    fn from(err: serde_json::Error) -> Self {
        AwsCtlError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for AwsCtlError {
    fn from(err: std::io::Error) -> Self {
        AwsCtlError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for AwsCtlError {
    fn from(err: anyhow::Error) -> Self {
        AwsCtlError::Configuration(err.to_string())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for AwsCtlError {
    fn from(err: aws_smithy_types::error::operation::BuildError) -> Self {
        AwsCtlError::InvalidInput {
            message: err.to_string(),
        }
    }
}

macro_rules! from_service_error {
    ($service:ident) => {
        impl From<$service::Error> for AwsCtlError {
            fn from(err: $service::Error) -> Self {
                // DisplayErrorContext renders the full source chain, including
                // the service error code and message.
                AwsCtlError::ApiError {
                    message: format!(
                        "{}",
                        aws_smithy_types::error::display::DisplayErrorContext(&err)
                    ),
                }
            }
        }
    };
}

from_service_error!(aws_sdk_acmpca);
from_service_error!(aws_sdk_cloudtrail);
from_service_error!(aws_sdk_codestar);
from_service_error!(aws_sdk_cloudhsm);
from_service_error!(aws_sdk_opsworkscm);
