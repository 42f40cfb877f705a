//! CloudTrail command implementations

use aws_sdk_cloudtrail::types::{LookupAttribute, LookupAttributeKey, Tag, Trail, TrailInfo};
use serde_json::{json, Value};
use tracing::debug;

use awsctl_core::{fetch_all, Page};

use crate::cli::CloudTrailCommands;
use crate::commands::utils::{
    confirm_action, parse_tag, parse_timestamp, print_page_output, print_result,
};
use crate::connection::ConnectionManager;
use crate::error::{AwsCtlError, Result as CliResult};
use crate::output::OutputFormat;

fn event_to_json(event: &aws_sdk_cloudtrail::types::Event) -> Value {
    json!({
        "eventId": event.event_id(),
        "eventName": event.event_name(),
        "eventSource": event.event_source(),
        "eventTime": event.event_time().map(|t| t.to_string()),
        "username": event.username(),
        "readOnly": event.read_only(),
        "accessKeyId": event.access_key_id(),
        "resources": event.resources().iter().map(|r| json!({
            "resourceType": r.resource_type(),
            "resourceName": r.resource_name(),
        })).collect::<Vec<_>>(),
        "cloudTrailEvent": event.cloud_trail_event(),
    })
}

fn trail_info_to_json(info: &TrailInfo) -> Value {
    json!({
        "name": info.name(),
        "trailArn": info.trail_arn(),
        "homeRegion": info.home_region(),
    })
}

fn trail_to_json(trail: &Trail) -> Value {
    json!({
        "name": trail.name(),
        "trailArn": trail.trail_arn(),
        "homeRegion": trail.home_region(),
        "s3BucketName": trail.s3_bucket_name(),
        "s3KeyPrefix": trail.s3_key_prefix(),
        "isMultiRegionTrail": trail.is_multi_region_trail(),
        "includeGlobalServiceEvents": trail.include_global_service_events(),
        "logFileValidationEnabled": trail.log_file_validation_enabled(),
        "isOrganizationTrail": trail.is_organization_trail(),
        "kmsKeyId": trail.kms_key_id(),
        "cloudWatchLogsLogGroupArn": trail.cloud_watch_logs_log_group_arn(),
    })
}

fn tag_to_json(tag: &Tag) -> Value {
    json!({
        "key": tag.key(),
        "value": tag.value(),
    })
}

/// Build a CloudTrail tag from a parsed key/value pair
fn build_tag(key: String, value: Option<String>) -> CliResult<Tag> {
    let mut builder = Tag::builder().key(key);
    builder = builder.set_value(value);
    Ok(builder.build()?)
}

/// Handle CloudTrail commands
pub async fn handle_cloudtrail_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &CloudTrailCommands,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let client = conn_mgr.cloudtrail_client(profile_name).await?;

    match command {
        CloudTrailCommands::LookupEvents {
            lookup_attribute,
            start_time,
            end_time,
            max_results,
            starting_token,
        } => {
            let mut attributes = Vec::new();
            for spec in lookup_attribute {
                let (key, value) = parse_tag(spec)?;
                let value = value.ok_or_else(|| AwsCtlError::InvalidInput {
                    message: format!(
                        "Lookup attribute '{}' needs a value (AttributeKey=AttributeValue)",
                        spec
                    ),
                })?;
                attributes.push(
                    LookupAttribute::builder()
                        .attribute_key(LookupAttributeKey::from(key.as_str()))
                        .attribute_value(value)
                        .build()?,
                );
            }
            let start = start_time.as_deref().map(parse_timestamp).transpose()?;
            let end = end_time.as_deref().map(parse_timestamp).transpose()?;

            let mut events = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let attributes = attributes.clone();
                    let start = start.clone();
                    let end = end.clone();
                    let max = *max_results;
                    async move {
                        let mut req = client.lookup_events();
                        for attr in attributes {
                            req = req.lookup_attributes(attr);
                        }
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        if let Some(s) = start {
                            req = req.start_time(s);
                        }
                        if let Some(e) = end {
                            req = req.end_time(e);
                        }
                        if let Some(m) = max {
                            req = req.max_results(m);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_cloudtrail::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.events().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| events.extend(batch),
            )
            .await?;

            debug!("Fetched {} events", events.len());
            let items = events.iter().map(event_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        CloudTrailCommands::ListTrails { starting_token } => {
            let mut trails = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    async move {
                        let mut req = client.list_trails();
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_cloudtrail::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.trails().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| trails.extend(batch),
            )
            .await?;

            let items = trails.iter().map(trail_info_to_json).collect();
            print_page_output(items, next, output_format, query)
        }

        CloudTrailCommands::DescribeTrails {
            name,
            include_shadow_trails,
        } => {
            let mut req = client
                .describe_trails()
                .include_shadow_trails(*include_shadow_trails);
            for n in name {
                req = req.trail_name_list(n);
            }
            let resp = req.send().await.map_err(aws_sdk_cloudtrail::Error::from)?;

            let trails: Vec<Value> = resp.trail_list().iter().map(trail_to_json).collect();
            print_result(Value::Array(trails), output_format, query)
        }

        CloudTrailCommands::GetTrailStatus { name } => {
            let resp = client
                .get_trail_status()
                .name(name)
                .send()
                .await
                .map_err(aws_sdk_cloudtrail::Error::from)?;

            let status = json!({
                "isLogging": resp.is_logging(),
                "latestDeliveryTime": resp.latest_delivery_time().map(|t| t.to_string()),
                "latestDeliveryError": resp.latest_delivery_error(),
                "latestNotificationError": resp.latest_notification_error(),
                "startLoggingTime": resp.start_logging_time().map(|t| t.to_string()),
                "stopLoggingTime": resp.stop_logging_time().map(|t| t.to_string()),
                "latestDigestDeliveryTime": resp.latest_digest_delivery_time().map(|t| t.to_string()),
                "latestDigestDeliveryError": resp.latest_digest_delivery_error(),
            });
            print_result(status, output_format, query)
        }

        CloudTrailCommands::ListTags {
            resource_id,
            starting_token,
        } => {
            let mut resource_tags = Vec::new();
            let next = fetch_all(
                starting_token.clone(),
                |token| {
                    let client = client.clone();
                    let resource_ids = resource_id.clone();
                    async move {
                        let mut req = client.list_tags();
                        for id in resource_ids {
                            req = req.resource_id_list(id);
                        }
                        if let Some(t) = token {
                            req = req.next_token(t);
                        }
                        let resp = req
                            .send()
                            .await
                            .map_err(aws_sdk_cloudtrail::Error::from)?;
                        Ok::<_, AwsCtlError>(Page::new(
                            resp.resource_tag_list().to_vec(),
                            resp.next_token().map(String::from),
                        ))
                    }
                },
                |batch, _manual| resource_tags.extend(batch),
            )
            .await?;

            let items = resource_tags
                .iter()
                .map(|rt| {
                    json!({
                        "resourceId": rt.resource_id(),
                        "tags": rt.tags_list().iter().map(tag_to_json).collect::<Vec<_>>(),
                    })
                })
                .collect();
            print_page_output(items, next, output_format, query)
        }

        CloudTrailCommands::AddTags { resource_id, tags } => {
            let mut req = client.add_tags().resource_id(resource_id);
            for spec in tags {
                let (key, value) = parse_tag(spec)?;
                req = req.tags_list(build_tag(key, value)?);
            }
            req.send().await.map_err(aws_sdk_cloudtrail::Error::from)?;

            println!("Tags added to '{}'", resource_id);
            Ok(())
        }

        CloudTrailCommands::RemoveTags { resource_id, tags } => {
            let mut req = client.remove_tags().resource_id(resource_id);
            for spec in tags {
                let (key, value) = parse_tag(spec)?;
                req = req.tags_list(build_tag(key, value)?);
            }
            req.send().await.map_err(aws_sdk_cloudtrail::Error::from)?;

            println!("Tags removed from '{}'", resource_id);
            Ok(())
        }

        CloudTrailCommands::CreateTrail {
            name,
            s3_bucket_name,
            s3_key_prefix,
            multi_region,
            enable_log_file_validation,
        } => {
            let mut req = client
                .create_trail()
                .name(name)
                .s3_bucket_name(s3_bucket_name)
                .is_multi_region_trail(*multi_region)
                .enable_log_file_validation(*enable_log_file_validation);
            if let Some(prefix) = s3_key_prefix {
                req = req.s3_key_prefix(prefix);
            }
            let resp = req.send().await.map_err(aws_sdk_cloudtrail::Error::from)?;

            let created = json!({
                "name": resp.name(),
                "trailArn": resp.trail_arn(),
                "s3BucketName": resp.s3_bucket_name(),
                "s3KeyPrefix": resp.s3_key_prefix(),
                "isMultiRegionTrail": resp.is_multi_region_trail(),
                "logFileValidationEnabled": resp.log_file_validation_enabled(),
            });
            print_result(created, output_format, query)
        }

        CloudTrailCommands::DeleteTrail { name, yes } => {
            if !yes && !confirm_action(&format!("delete trail '{}'", name))? {
                println!("Cancelled");
                return Ok(());
            }
            client
                .delete_trail()
                .name(name)
                .send()
                .await
                .map_err(aws_sdk_cloudtrail::Error::from)?;

            println!("Trail '{}' deleted", name);
            Ok(())
        }

        CloudTrailCommands::StartLogging { name } => {
            client
                .start_logging()
                .name(name)
                .send()
                .await
                .map_err(aws_sdk_cloudtrail::Error::from)?;

            println!("Logging started for trail '{}'", name);
            Ok(())
        }

        CloudTrailCommands::StopLogging { name } => {
            client
                .stop_logging()
                .name(name)
                .send()
                .await
                .map_err(aws_sdk_cloudtrail::Error::from)?;

            println!("Logging stopped for trail '{}'", name);
            Ok(())
        }
    }
}
