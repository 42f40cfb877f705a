//! ACM Private CA command implementations

use aws_sdk_acmpca::types::{
    CertificateAuthority, CertificateAuthorityStatus, RevocationReason, Tag,
};
use serde_json::{json, Value};
use tracing::debug;

use awsctl_core::{fetch_all, Page};

use crate::cli::AcmPcaCommands;
use crate::commands::utils::{confirm_action, parse_tag, print_page_output, print_result};
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

fn certificate_authority_to_json(ca: &CertificateAuthority) -> Value {
    json!({
        "arn": ca.arn(),
        "ownerAccount": ca.owner_account(),
        "type": ca.r#type().map(|t| t.as_str()),
        "status": ca.status().map(|s| s.as_str()),
        "serial": ca.serial(),
        "failureReason": ca.failure_reason().map(|r| r.as_str()),
        "notBefore": ca.not_before().map(|t| t.to_string()),
        "notAfter": ca.not_after().map(|t| t.to_string()),
        "createdAt": ca.created_at().map(|t| t.to_string()),
        "lastStateChangeAt": ca.last_state_change_at().map(|t| t.to_string()),
    })
}

fn tag_to_json(tag: &Tag) -> Value {
    json!({
        "key": tag.key(),
        "value": tag.value(),
    })
}

fn build_tag(key: String, value: Option<String>) -> CliResult<Tag> {
    Ok(Tag::builder().key(key).set_value(value).build()?)
}

/// Handle ACM Private CA commands
pub async fn handle_acmpca_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &AcmPcaCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.acmpca_client(profile_name).await?;

    match command {
        AcmPcaCommands::List {
            starting_token,
            max_results,
        } => {
            let mut authorities = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_certificate_authorities();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_acmpca::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.certificate_authorities().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| authorities.extend(batch),
            )
            .await?;

            debug!("Fetched {} certificate authorities", authorities.len());
            let items = authorities
                .iter()
                .map(certificate_authority_to_json)
                .collect();
            print_page_output(items, next, output_format, query)
        }

        AcmPcaCommands::Get {
            certificate_authority_arn,
        } => {
            let resp = client
                .describe_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn)
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            let ca = resp
                .certificate_authority()
                .map(certificate_authority_to_json)
                .unwrap_or(Value::Null);
            print_result(ca, output_format, query)
        }

        AcmPcaCommands::GetCertificate {
            certificate_authority_arn,
            certificate_arn,
        } => {
            let resp = client
                .get_certificate()
                .certificate_authority_arn(certificate_authority_arn)
                .certificate_arn(certificate_arn)
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            let data = json!({
                "certificate": resp.certificate(),
                "certificateChain": resp.certificate_chain(),
            });
            print_result(data, output_format, query)
        }

        AcmPcaCommands::GetCaCertificate {
            certificate_authority_arn,
        } => {
            let resp = client
                .get_certificate_authority_certificate()
                .certificate_authority_arn(certificate_authority_arn)
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            let data = json!({
                "certificate": resp.certificate(),
                "certificateChain": resp.certificate_chain(),
            });
            print_result(data, output_format, query)
        }

        AcmPcaCommands::GetCsr {
            certificate_authority_arn,
        } => {
            let resp = client
                .get_certificate_authority_csr()
                .certificate_authority_arn(certificate_authority_arn)
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            let data = json!({ "csr": resp.csr() });
            print_result(data, output_format, query)
        }

        AcmPcaCommands::ListTags {
            certificate_authority_arn,
            starting_token,
            max_results,
        } => {
            let mut tags = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let arn = certificate_authority_arn.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_tags().certificate_authority_arn(arn);
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_acmpca::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.tags().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| tags.extend(batch),
            )
            .await?;

            let items = tags.iter().map(tag_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        AcmPcaCommands::Tag {
            certificate_authority_arn,
            tags,
        } => {
            let mut req = client
                .tag_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn);
            for spec in tags {
                let (key, value) = parse_tag(spec)?;
                req = req.tags(build_tag(key, value)?);
            }
            req.send().await.map_err(aws_sdk_acmpca::Error::from)?;

            println!("Tags added to '{}'", certificate_authority_arn);
            Ok(())
        }

        AcmPcaCommands::Untag {
            certificate_authority_arn,
            tags,
        } => {
            let mut req = client
                .untag_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn);
            for spec in tags {
                let (key, value) = parse_tag(spec)?;
                req = req.tags(build_tag(key, value)?);
            }
            req.send().await.map_err(aws_sdk_acmpca::Error::from)?;

            println!("Tags removed from '{}'", certificate_authority_arn);
            Ok(())
        }

        AcmPcaCommands::UpdateStatus {
            certificate_authority_arn,
            status,
        } => {
            client
                .update_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn)
                .status(CertificateAuthorityStatus::from(status.as_str()))
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            println!(
                "Certificate authority '{}' set to {}",
                certificate_authority_arn, status
            );
            Ok(())
        }

        AcmPcaCommands::RevokeCertificate {
            certificate_authority_arn,
            certificate_serial,
            reason,
            yes,
        } => {
            if !yes
                && !confirm_action(&format!(
                    "revoke certificate with serial '{}'",
                    certificate_serial
                ))?
            {
                println!("Cancelled");
                return Ok(());
            }
            client
                .revoke_certificate()
                .certificate_authority_arn(certificate_authority_arn)
                .certificate_serial(certificate_serial)
                .revocation_reason(RevocationReason::from(reason.as_str()))
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            println!("Certificate '{}' revoked", certificate_serial);
            Ok(())
        }

        AcmPcaCommands::Restore {
            certificate_authority_arn,
        } => {
            client
                .restore_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn)
                .send()
                .await
                .map_err(aws_sdk_acmpca::Error::from)?;

            println!(
                "Certificate authority '{}' restored",
                certificate_authority_arn
            );
            Ok(())
        }

        AcmPcaCommands::Delete {
            certificate_authority_arn,
            permanent_deletion_time_in_days,
            yes,
        } => {
            if !yes
                && !confirm_action(&format!(
                    "delete certificate authority '{}'",
                    certificate_authority_arn
                ))?
            {
                println!("Cancelled");
                return Ok(());
            }
            let mut req = client
                .delete_certificate_authority()
                .certificate_authority_arn(certificate_authority_arn);
            if let Some(days) = permanent_deletion_time_in_days {
                req = req.permanent_deletion_time_in_days(*days);
            }
            req.send().await.map_err(aws_sdk_acmpca::Error::from)?;

            println!(
                "Certificate authority '{}' deleted",
                certificate_authority_arn
            );
            Ok(())
        }
    }
}
