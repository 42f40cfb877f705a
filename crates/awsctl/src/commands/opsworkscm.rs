//! OpsWorks CM command implementations

use aws_sdk_opsworkscm::types::{Backup, Server, ServerEvent};
use serde_json::{json, Value};
use tracing::debug;

use awsctl_core::{fetch_all, Page};

use crate::cli::OpsWorksCmCommands;
use crate::commands::utils::{confirm_action, print_page_output, print_result};
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

fn server_to_json(server: &Server) -> Value {
    json!({
        "serverName": server.server_name(),
        "serverArn": server.server_arn(),
        "status": server.status().map(|s| s.as_str()),
        "statusReason": server.status_reason(),
        "engine": server.engine(),
        "engineModel": server.engine_model(),
        "engineVersion": server.engine_version(),
        "instanceType": server.instance_type(),
        "endpoint": server.endpoint(),
        "backupRetentionCount": server.backup_retention_count(),
        "maintenanceStatus": server.maintenance_status().map(|s| s.as_str()),
        "createdAt": server.created_at().map(|t| t.to_string()),
    })
}

fn backup_to_json(backup: &Backup) -> Value {
    json!({
        "backupId": backup.backup_id(),
        "backupArn": backup.backup_arn(),
        "backupType": backup.backup_type().map(|t| t.as_str()),
        "serverName": backup.server_name(),
        "status": backup.status().map(|s| s.as_str()),
        "statusDescription": backup.status_description(),
        "description": backup.description(),
        "createdAt": backup.created_at().map(|t| t.to_string()),
    })
}

fn event_to_json(event: &ServerEvent) -> Value {
    json!({
        "createdAt": event.created_at().map(|t| t.to_string()),
        "serverName": event.server_name(),
        "message": event.message(),
        "logUrl": event.log_url(),
    })
}

/// Handle OpsWorks CM commands
pub async fn handle_opsworkscm_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &OpsWorksCmCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.opsworkscm_client(profile_name).await?;

    match command {
        OpsWorksCmCommands::DescribeServers {
            server_name,
            starting_token,
            max_results,
        } => {
            let mut servers = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let server_name = server_name.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.describe_servers();
                        if let Some(name) = server_name {
                            req = req.server_name(name);
                        }
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_opsworkscm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.servers().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| servers.extend(batch),
            )
            .await?;

            debug!("Fetched {} servers", servers.len());
            let items = servers.iter().map(server_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        OpsWorksCmCommands::DescribeBackups {
            backup_id,
            server_name,
            starting_token,
            max_results,
        } => {
            let mut backups = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let backup_id = backup_id.clone();
                    let server_name = server_name.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.describe_backups();
                        if let Some(id) = backup_id {
                            req = req.backup_id(id);
                        }
                        if let Some(name) = server_name {
                            req = req.server_name(name);
                        }
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_opsworkscm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.backups().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| backups.extend(batch),
            )
            .await?;

            let items = backups.iter().map(backup_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        OpsWorksCmCommands::DescribeEvents {
            server_name,
            starting_token,
            max_results,
        } => {
            let mut events = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let server_name = server_name.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.describe_events().server_name(server_name);
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_opsworkscm::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.server_events().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| events.extend(batch),
            )
            .await?;

            let items = events.iter().map(event_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        OpsWorksCmCommands::DescribeAccountAttributes => {
            let resp = client
                .describe_account_attributes()
                .send()
                .await
                .map_err(aws_sdk_opsworkscm::Error::from)?;

            let attributes: Vec<Value> = resp
                .attributes()
                .iter()
                .map(|attr| {
                    json!({
                        "name": attr.name(),
                        "maximum": attr.maximum(),
                        "used": attr.used(),
                    })
                })
                .collect();
            print_result(Value::Array(attributes), output_format, query)
        }

        OpsWorksCmCommands::CreateBackup {
            server_name,
            description,
        } => {
            let mut req = client.create_backup().server_name(server_name);
            if let Some(desc) = description {
                req = req.description(desc);
            }
            let resp = req
                .send()
                .await
                .map_err(aws_sdk_opsworkscm::Error::from)?;

            let backup = resp.backup().map(backup_to_json).unwrap_or(Value::Null);
            print_result(backup, output_format, query)
        }

        OpsWorksCmCommands::DeleteBackup { backup_id, yes } => {
            if !yes && !confirm_action(&format!("delete backup '{}'", backup_id))? {
                println!("Cancelled");
                return Ok(());
            }
            client
                .delete_backup()
                .backup_id(backup_id)
                .send()
                .await
                .map_err(aws_sdk_opsworkscm::Error::from)?;

            println!("Backup '{}' deleted", backup_id);
            Ok(())
        }

        OpsWorksCmCommands::StartMaintenance { server_name } => {
            let resp = client
                .start_maintenance()
                .server_name(server_name)
                .send()
                .await
                .map_err(aws_sdk_opsworkscm::Error::from)?;

            let server = resp.server().map(server_to_json).unwrap_or(Value::Null);
            print_result(server, output_format, query)
        }

        OpsWorksCmCommands::DeleteServer { server_name, yes } => {
            if !yes && !confirm_action(&format!("delete server '{}'", server_name))? {
                println!("Cancelled");
                return Ok(());
            }
            client
                .delete_server()
                .server_name(server_name)
                .send()
                .await
                .map_err(aws_sdk_opsworkscm::Error::from)?;

            println!("Server '{}' deletion started", server_name);
            Ok(())
        }
    }
}
