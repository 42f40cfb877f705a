//! OpsWorks CM command definitions

use clap::Subcommand;

/// OpsWorks for Chef Automate / Puppet Enterprise commands
#[derive(Subcommand, Debug)]
pub enum OpsWorksCmCommands {
    /// List configuration management servers
    #[command(name = "describe-servers", visible_alias = "servers")]
    DescribeServers {
        /// Describe a single server by name
        #[arg(long)]
        server_name: Option<String>,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of servers per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// List backups for the account or a server
    #[command(name = "describe-backups", visible_alias = "backups")]
    DescribeBackups {
        /// Describe a single backup by id
        #[arg(long)]
        backup_id: Option<String>,

        /// Only backups for this server
        #[arg(long)]
        server_name: Option<String>,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of backups per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// List events for a server, most recent first
    #[command(name = "describe-events", visible_alias = "events")]
    DescribeEvents {
        /// Server name
        server_name: String,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of events per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Show account attributes (server and backup limits)
    #[command(name = "describe-account-attributes")]
    DescribeAccountAttributes,

    /// Start an application-level backup of a server
    #[command(name = "create-backup")]
    CreateBackup {
        /// Server name
        server_name: String,

        /// Description for the backup
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a backup
    #[command(name = "delete-backup")]
    DeleteBackup {
        /// Backup id (ServerName-yyyyMMddHHmmssSSS)
        backup_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Start system maintenance on a server immediately
    #[command(name = "start-maintenance")]
    StartMaintenance {
        /// Server name
        server_name: String,
    },

    /// Delete a server and its underlying stack
    #[command(name = "delete-server")]
    DeleteServer {
        /// Server name
        server_name: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
