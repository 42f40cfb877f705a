//! CloudHSM Classic command implementations

use serde_json::{json, Value};
use tracing::debug;

use awsctl_core::{fetch_all, Page};

use crate::cli::CloudHsmCommands;
use crate::commands::utils::{confirm_action, print_page_output, print_result};
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

/// Handle CloudHSM Classic commands
pub async fn handle_cloudhsm_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &CloudHsmCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.cloudhsm_client(profile_name).await?;

    match command {
        CloudHsmCommands::ListHsms { starting_token } => {
            let mut arns = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    async move {
                        let mut req = client.list_hsms();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        let resp = req.send().await.map_err(aws_sdk_cloudhsm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.hsm_list().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| arns.extend(batch),
            )
            .await?;

            debug!("Fetched {} HSM ARNs", arns.len());
            let items = arns.into_iter().map(Value::String).collect();
            print_page_output(items, next, output_format, query)
        }

        CloudHsmCommands::DescribeHsm {
            hsm_arn,
            hsm_serial_number,
        } => {
            if hsm_arn.is_none() && hsm_serial_number.is_none() {
                return Err(AwsCtlError::InvalidInput {
                    message: "Either --hsm-arn or --hsm-serial-number is required".to_string(),
                });
            }
            let mut req = client.describe_hsm();
            if let Some(arn) = hsm_arn {
                req = req.hsm_arn(arn);
            }
            if let Some(serial) = hsm_serial_number {
                req = req.hsm_serial_number(serial);
            }
            let resp = req.send().await.map_err(aws_sdk_cloudhsm::Error::from)?;

            let hsm = json!({
                "hsmArn": resp.hsm_arn(),
                "status": resp.status().map(|s| s.as_str()),
                "statusDetails": resp.status_details(),
                "availabilityZone": resp.availability_zone(),
                "eniId": resp.eni_id(),
                "eniIp": resp.eni_ip(),
                "subscriptionType": resp.subscription_type().map(|s| s.as_str()),
                "subscriptionStartDate": resp.subscription_start_date(),
                "vpcId": resp.vpc_id(),
                "subnetId": resp.subnet_id(),
                "iamRoleArn": resp.iam_role_arn(),
                "serialNumber": resp.serial_number(),
                "vendorName": resp.vendor_name(),
                "hsmType": resp.hsm_type(),
                "softwareVersion": resp.software_version(),
                "sshPublicKey": resp.ssh_public_key(),
                "partitions": resp.partitions(),
            });
            print_result(hsm, output_format, query)
        }

        CloudHsmCommands::ListHapgs { starting_token } => {
            let mut arns = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    async move {
                        let mut req = client.list_hapgs();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        let resp = req.send().await.map_err(aws_sdk_cloudhsm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.hapg_list().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| arns.extend(batch),
            )
            .await?;

            let items = arns.into_iter().map(Value::String).collect();
            print_page_output(items, next, output_format, query)
        }

        CloudHsmCommands::DescribeHapg { hapg_arn } => {
            let resp = client
                .describe_hapg()
                .hapg_arn(hapg_arn)
                .send()
                .await
                .map_err(aws_sdk_cloudhsm::Error::from)?;

            let hapg = json!({
                "hapgArn": resp.hapg_arn(),
                "hapgSerial": resp.hapg_serial(),
                "label": resp.label(),
                "state": resp.state().map(|s| s.as_str()),
                "lastModifiedTimestamp": resp.last_modified_timestamp(),
                "hsmsLastActionFailed": resp.hsms_last_action_failed(),
                "hsmsPendingDeletion": resp.hsms_pending_deletion(),
                "hsmsPendingRegistration": resp.hsms_pending_registration(),
                "partitionSerialList": resp.partition_serial_list(),
            });
            print_result(hapg, output_format, query)
        }

        CloudHsmCommands::ListClients { starting_token } => {
            let mut arns = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    async move {
                        let mut req = client.list_luna_clients();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        let resp = req.send().await.map_err(aws_sdk_cloudhsm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.client_list().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| arns.extend(batch),
            )
            .await?;

            let items = arns.into_iter().map(Value::String).collect();
            print_page_output(items, next, output_format, query)
        }

        CloudHsmCommands::DescribeClient {
            client_arn,
            certificate_fingerprint,
        } => {
            if client_arn.is_none() && certificate_fingerprint.is_none() {
                return Err(AwsCtlError::InvalidInput {
                    message: "Either --client-arn or --certificate-fingerprint is required"
                        .to_string(),
                });
            }
            let mut req = client.describe_luna_client();
            if let Some(arn) = client_arn {
                req = req.client_arn(arn);
            }
            if let Some(fingerprint) = certificate_fingerprint {
                req = req.certificate_fingerprint(fingerprint);
            }
            let resp = req.send().await.map_err(aws_sdk_cloudhsm::Error::from)?;

            let luna_client = json!({
                "clientArn": resp.client_arn(),
                "certificate": resp.certificate(),
                "certificateFingerprint": resp.certificate_fingerprint(),
                "label": resp.label(),
                "lastModifiedTimestamp": resp.last_modified_timestamp(),
            });
            print_result(luna_client, output_format, query)
        }

        CloudHsmCommands::ListTags { resource_arn } => {
            let resp = client
                .list_tags_for_resource()
                .resource_arn(resource_arn)
                .send()
                .await
                .map_err(aws_sdk_cloudhsm::Error::from)?;

            let tags: Vec<Value> = resp
                .tag_list()
                .iter()
                .map(|tag| {
                    json!({
                        "key": tag.key(),
                        "value": tag.value(),
                    })
                })
                .collect();
            print_result(Value::Array(tags), output_format, query)
        }

        CloudHsmCommands::DeleteHsm { hsm_arn, yes } => {
            if !yes && !confirm_action(&format!("delete HSM '{}'", hsm_arn))? {
                println!("Cancelled");
                return Ok(());
            }
            let resp = client
                .delete_hsm()
                .hsm_arn(hsm_arn)
                .send()
                .await
                .map_err(aws_sdk_cloudhsm::Error::from)?;

            println!("HSM '{}' deleted: {:?}", hsm_arn, resp.status());
            Ok(())
        }
    }
}
