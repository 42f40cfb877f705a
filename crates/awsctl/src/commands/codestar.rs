//! CodeStar command implementations

use serde_json::{json, Value};
use tracing::debug;

use awsctl_core::{fetch_all, Page};

use crate::cli::CodeStarCommands;
use crate::commands::utils::{parse_tag, print_page_output, print_result};
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

fn project_summary_to_json(project: &aws_sdk_codestar::types::ProjectSummary) -> Value {
    json!({
        "projectId": project.project_id(),
        "projectArn": project.project_arn(),
    })
}

fn team_member_to_json(member: &aws_sdk_codestar::types::TeamMember) -> Value {
    json!({
        "userArn": member.user_arn(),
        "projectRole": member.project_role(),
        "remoteAccessAllowed": member.remote_access_allowed(),
    })
}

fn user_profile_to_json(profile: &aws_sdk_codestar::types::UserProfileSummary) -> Value {
    json!({
        "userArn": profile.user_arn(),
        "displayName": profile.display_name(),
        "emailAddress": profile.email_address(),
        "sshPublicKey": profile.ssh_public_key(),
    })
}

/// Handle CodeStar commands
pub async fn handle_codestar_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &CodeStarCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.codestar_client(profile_name).await?;

    match command {
        CodeStarCommands::ListProjects {
            starting_token,
            max_results,
        } => {
            let mut projects = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_projects();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_codestar::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.projects().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| projects.extend(batch),
            )
            .await?;

            debug!("Fetched {} projects", projects.len());
            let items = projects.iter().map(project_summary_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        CodeStarCommands::DescribeProject { id } => {
            let resp = client
                .describe_project()
                .id(id)
                .send()
                .await
                .map_err(aws_sdk_codestar::Error::from)?;

            let project = json!({
                "id": resp.id(),
                "name": resp.name(),
                "arn": resp.arn(),
                "description": resp.description(),
                "status": resp.status().map(|s| json!({
                    "state": s.state(),
                    "reason": s.reason(),
                })),
            });
            print_result(project, output_format, query)
        }

        CodeStarCommands::ListResources {
            project_id,
            starting_token,
            max_results,
        } => {
            let mut resources = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let project_id = project_id.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_resources().project_id(project_id);
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_codestar::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.resources().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| resources.extend(batch),
            )
            .await?;

            let items = resources
                .iter()
                .map(|r| json!({ "id": r.id() }))
                .collect();
            print_page_output(items, next, output_format, query)
        }

        CodeStarCommands::ListTeamMembers {
            project_id,
            starting_token,
            max_results,
        } => {
            let mut members = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let project_id = project_id.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_team_members().project_id(project_id);
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_codestar::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.team_members().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| members.extend(batch),
            )
            .await?;

            let items = members.iter().map(team_member_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        CodeStarCommands::ListUserProfiles {
            starting_token,
            max_results,
        } => {
            let mut profiles = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.list_user_profiles();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req.send().await.map_err(aws_sdk_codestar::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.user_profiles().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| profiles.extend(batch),
            )
            .await?;

            let items = profiles.iter().map(user_profile_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        CodeStarCommands::DescribeUserProfile { user_arn } => {
            let resp = client
                .describe_user_profile()
                .user_arn(user_arn)
                .send()
                .await
                .map_err(aws_sdk_codestar::Error::from)?;

            let profile = json!({
                "userArn": resp.user_arn(),
                "displayName": resp.display_name(),
                "emailAddress": resp.email_address(),
                "sshPublicKey": resp.ssh_public_key(),
            });
            print_result(profile, output_format, query)
        }

        CodeStarCommands::AssociateTeamMember {
            project_id,
            user_arn,
            project_role,
            remote_access_allowed,
        } => {
            client
                .associate_team_member()
                .project_id(project_id)
                .user_arn(user_arn)
                .project_role(project_role)
                .remote_access_allowed(*remote_access_allowed)
                .send()
                .await
                .map_err(aws_sdk_codestar::Error::from)?;

            println!("Added '{}' to project '{}'", user_arn, project_id);
            Ok(())
        }

        CodeStarCommands::DisassociateTeamMember {
            project_id,
            user_arn,
        } => {
            client
                .disassociate_team_member()
                .project_id(project_id)
                .user_arn(user_arn)
                .send()
                .await
                .map_err(aws_sdk_codestar::Error::from)?;

            println!("Removed '{}' from project '{}'", user_arn, project_id);
            Ok(())
        }

        CodeStarCommands::TagProject { id, tags } => {
            let mut req = client.tag_project().id(id);
            for spec in tags {
                let (key, value) = parse_tag(spec)?;
                let value = value.ok_or_else(|| AwsCtlError::InvalidInput {
                    message: format!("Tag '{}' needs a value (key=value)", spec),
                })?;
                req = req.tags(key, value);
            }
            req.send().await.map_err(aws_sdk_codestar::Error::from)?;

            println!("Tags added to project '{}'", id);
            Ok(())
        }

        CodeStarCommands::UntagProject { id, tags } => {
            let mut req = client.untag_project().id(id);
            for key in tags {
                req = req.tags(key);
            }
            req.send().await.map_err(aws_sdk_codestar::Error::from)?;

            println!("Tags removed from project '{}'", id);
            Ok(())
        }
    }
}
