//! CloudTrail command definitions

use clap::Subcommand;

/// CloudTrail commands
#[derive(Subcommand, Debug)]
pub enum CloudTrailCommands {
    /// Look up management events recorded by CloudTrail
    #[command(name = "lookup-events")]
    #[command(after_help = "EXAMPLES:
    # All events in a time window
    awsctl cloudtrail lookup-events \\
        --start-time 2026-08-01T00:00:00Z --end-time 2026-08-02T00:00:00Z

    # Filter by event name
    awsctl cloudtrail lookup-events --lookup-attribute EventName=ConsoleLogin

    # Fetch a single page of 50 events and resume later
    awsctl cloudtrail lookup-events --max-results 50 --starting-token <token>
")]
    LookupEvents {
        /// Lookup attribute in AttributeKey=AttributeValue format
        /// (e.g. EventName=ConsoleLogin, Username=admin)
        #[arg(long)]
        lookup_attribute: Vec<String>,

        /// Only events after this time (RFC 3339)
        #[arg(long)]
        start_time: Option<String>,

        /// Only events before this time (RFC 3339)
        #[arg(long)]
        end_time: Option<String>,

        /// Maximum number of events per page
        #[arg(long)]
        max_results: Option<i32>,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// List trails in the current region
    #[command(name = "list-trails", visible_alias = "ls")]
    ListTrails {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// Show the settings of one or more trails
    #[command(name = "describe-trails")]
    DescribeTrails {
        /// Trail names or ARNs (all trails when omitted)
        name: Vec<String>,

        /// Include shadow trails replicated from other regions
        #[arg(long)]
        include_shadow_trails: bool,
    },

    /// Show the logging status of a trail
    #[command(name = "get-trail-status", visible_alias = "status")]
    GetTrailStatus {
        /// Trail name or ARN
        name: String,
    },

    /// List tags for one or more trails
    #[command(name = "list-tags")]
    ListTags {
        /// Trail ARNs to list tags for
        #[arg(required = true)]
        resource_id: Vec<String>,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// Add tags to a trail
    #[command(name = "add-tags")]
    AddTags {
        /// Trail ARN
        resource_id: String,

        /// Tags in key=value format
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a trail
    #[command(name = "remove-tags")]
    RemoveTags {
        /// Trail ARN
        resource_id: String,

        /// Tags in key=value format (value may be empty: key=)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Create a new trail
    #[command(name = "create-trail", visible_alias = "create")]
    CreateTrail {
        /// Name of the trail
        name: String,

        /// S3 bucket to deliver log files to
        #[arg(long)]
        s3_bucket_name: String,

        /// S3 key prefix within the bucket
        #[arg(long)]
        s3_key_prefix: Option<String>,

        /// Record events from all regions
        #[arg(long)]
        multi_region: bool,

        /// Enable log file integrity validation
        #[arg(long)]
        enable_log_file_validation: bool,
    },

    /// Delete a trail
    #[command(name = "delete-trail", visible_alias = "delete")]
    DeleteTrail {
        /// Trail name or ARN
        name: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Start recording events for a trail
    #[command(name = "start-logging")]
    StartLogging {
        /// Trail name or ARN
        name: String,
    },

    /// Stop recording events for a trail
    #[command(name = "stop-logging")]
    StopLogging {
        /// Trail name or ARN
        name: String,
    },
}
