//! CodeStar command definitions

use clap::Subcommand;

/// CodeStar project commands
#[derive(Subcommand, Debug)]
pub enum CodeStarCommands {
    /// List CodeStar projects in the account
    #[command(name = "list-projects", visible_alias = "ls")]
    ListProjects {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of projects per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Show details of a project
    #[command(name = "describe-project")]
    DescribeProject {
        /// Project id
        id: String,
    },

    /// List AWS resources associated with a project
    #[command(name = "list-resources")]
    ListResources {
        /// Project id
        project_id: String,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of resources per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// List team members of a project
    #[command(name = "list-team-members")]
    ListTeamMembers {
        /// Project id
        project_id: String,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of team members per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// List user profiles in the account
    #[command(name = "list-user-profiles")]
    ListUserProfiles {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of profiles per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Show a user profile
    #[command(name = "describe-user-profile")]
    DescribeUserProfile {
        /// IAM user ARN
        user_arn: String,
    },

    /// Add an IAM user to a project's team
    #[command(name = "associate-team-member")]
    AssociateTeamMember {
        /// Project id
        project_id: String,

        /// IAM user ARN
        user_arn: String,

        /// Project role: Owner, Contributor or Viewer
        #[arg(long)]
        project_role: String,

        /// Allow SSH access to project instances
        #[arg(long)]
        remote_access_allowed: bool,
    },

    /// Remove an IAM user from a project's team
    #[command(name = "disassociate-team-member")]
    DisassociateTeamMember {
        /// Project id
        project_id: String,

        /// IAM user ARN
        user_arn: String,
    },

    /// Add tags to a project
    #[command(name = "tag-project")]
    TagProject {
        /// Project id
        id: String,

        /// Tags in key=value format
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a project
    #[command(name = "untag-project")]
    UntagProject {
        /// Project id
        id: String,

        /// Tag keys to remove
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },
}
