//! Shared utilities for command implementations

use serde_json::{json, Value};
use std::io::{self, Write};

use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::{print_output, OutputFormat};

/// Parse a tag string in `key=value` format. The value part is optional;
/// `key` alone yields `(key, None)`.
pub fn parse_tag(tag: &str) -> CliResult<(String, Option<String>)> {
    match tag.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(AwsCtlError::InvalidInput {
            message: format!("Invalid tag format '{}'. Expected 'key=value' format", tag),
        }),
        Some((key, value)) => Ok((key.to_string(), Some(value.to_string()))),
        None => Ok((tag.to_string(), None)),
    }
}

/// Parse an RFC 3339 timestamp into the SDK's datetime type
pub fn parse_timestamp(input: &str) -> CliResult<aws_smithy_types::DateTime> {
    let parsed =
        chrono::DateTime::parse_from_rfc3339(input).map_err(|e| AwsCtlError::InvalidInput {
            message: format!(
                "Invalid timestamp '{}': {} (expected RFC 3339, e.g. 2026-08-01T00:00:00Z)",
                input, e
            ),
        })?;
    Ok(aws_smithy_types::DateTime::from_secs(parsed.timestamp()))
}

/// Print a single API response in the requested output format
pub fn print_result(data: Value, output_format: OutputFormat, query: Option<&str>) -> CliResult<()> {
    print_output(data, output_format, query).map_err(|e| AwsCtlError::OutputError {
        message: e.to_string(),
    })
}

/// Print the result of a paginated listing.
///
/// In automatic mode there is no leftover token and the items print as a
/// plain array. When a single page was fetched and the listing has more,
/// the continuation token is reported alongside the items so the caller
/// can resume.
pub fn print_page_output(
    items: Vec<Value>,
    next_token: Option<String>,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let data = match next_token {
        Some(token) => json!({
            "items": items,
            "nextToken": token,
        }),
        None => Value::Array(items),
    };
    print_result(data, output_format, query)
}

/// Prompts the user for confirmation
pub fn confirm_action(message: &str) -> CliResult<bool> {
    print!("Are you sure you want to {}? [y/N]: ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tag_key_value() {
        assert_eq!(
            parse_tag("env=prod").unwrap(),
            ("env".to_string(), Some("prod".to_string()))
        );
    }

    #[test]
    fn parse_tag_key_only() {
        assert_eq!(parse_tag("env").unwrap(), ("env".to_string(), None));
    }

    #[test]
    fn parse_tag_empty_value() {
        assert_eq!(
            parse_tag("env=").unwrap(),
            ("env".to_string(), Some(String::new()))
        );
    }

    #[test]
    fn parse_tag_rejects_empty_key() {
        assert!(parse_tag("=prod").is_err());
    }

    #[test]
    fn parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2026-08-01T00:00:00Z").unwrap();
        assert_eq!(ts.secs(), 1_785_542_400);
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
