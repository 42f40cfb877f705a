//! CloudHSM Classic command definitions

use clap::Subcommand;

/// CloudHSM Classic commands
#[derive(Subcommand, Debug)]
pub enum CloudHsmCommands {
    /// List HSM appliance ARNs in the account
    #[command(name = "list-hsms", visible_alias = "ls")]
    ListHsms {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// Show details of an HSM appliance
    #[command(name = "describe-hsm")]
    DescribeHsm {
        /// HSM ARN
        #[arg(long)]
        hsm_arn: Option<String>,

        /// HSM serial number (alternative to --hsm-arn)
        #[arg(long)]
        hsm_serial_number: Option<String>,
    },

    /// List high-availability partition group ARNs
    #[command(name = "list-hapgs")]
    ListHapgs {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// Show details of a high-availability partition group
    #[command(name = "describe-hapg")]
    DescribeHapg {
        /// HAPG ARN
        hapg_arn: String,
    },

    /// List client certificate ARNs registered with CloudHSM
    #[command(name = "list-clients")]
    ListClients {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,
    },

    /// Show details of a registered client
    #[command(name = "describe-client")]
    DescribeClient {
        /// Client ARN
        #[arg(long)]
        client_arn: Option<String>,

        /// Client certificate fingerprint (alternative to --client-arn)
        #[arg(long)]
        certificate_fingerprint: Option<String>,
    },

    /// List tags attached to a CloudHSM resource
    #[command(name = "list-tags")]
    ListTags {
        /// Resource ARN
        resource_arn: String,
    },

    /// Delete an HSM appliance
    #[command(name = "delete-hsm")]
    DeleteHsm {
        /// HSM ARN
        hsm_arn: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
