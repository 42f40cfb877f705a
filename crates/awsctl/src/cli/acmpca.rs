//! ACM Private CA command definitions

use clap::Subcommand;

/// ACM Private Certificate Authority commands
#[derive(Subcommand, Debug)]
pub enum AcmPcaCommands {
    /// List private certificate authorities in the account
    #[command(visible_alias = "ls")]
    #[command(after_help = "EXAMPLES:
    # List all CAs, following pagination
    awsctl acm-pca list

    # One page of 10 CAs, then resume with the reported token
    awsctl acm-pca list --max-results 10
    awsctl acm-pca list --max-results 10 --starting-token <token>
")]
    List {
        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of CAs per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Show details of a certificate authority
    #[command(visible_alias = "describe")]
    Get {
        /// Certificate authority ARN
        certificate_authority_arn: String,
    },

    /// Retrieve a certificate issued by a private CA
    #[command(name = "get-certificate")]
    GetCertificate {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// ARN of the issued certificate
        certificate_arn: String,
    },

    /// Retrieve the CA's own certificate and chain
    #[command(name = "get-ca-certificate")]
    GetCaCertificate {
        /// Certificate authority ARN
        certificate_authority_arn: String,
    },

    /// Retrieve the certificate signing request for a CA
    #[command(name = "get-csr")]
    GetCsr {
        /// Certificate authority ARN
        certificate_authority_arn: String,
    },

    /// List tags attached to a certificate authority
    #[command(name = "list-tags")]
    ListTags {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// Fetch a single page starting at this token
        #[arg(long)]
        starting_token: Option<String>,

        /// Maximum number of tags per page
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Add tags to a certificate authority
    Tag {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// Tags in key=value format (value optional: just key)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a certificate authority
    Untag {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// Tags in key=value format (value optional: just key)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Change the status of a certificate authority (ACTIVE or DISABLED)
    #[command(name = "update-status")]
    UpdateStatus {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// New status: ACTIVE or DISABLED
        status: String,
    },

    /// Revoke a certificate issued by a private CA
    #[command(name = "revoke-certificate")]
    RevokeCertificate {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// Serial number of the certificate to revoke (hex)
        certificate_serial: String,

        /// Revocation reason (e.g. KEY_COMPROMISE, SUPERSEDED, UNSPECIFIED)
        #[arg(long, default_value = "UNSPECIFIED")]
        reason: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Restore a certificate authority that is pending deletion
    Restore {
        /// Certificate authority ARN
        certificate_authority_arn: String,
    },

    /// Delete a certificate authority
    Delete {
        /// Certificate authority ARN
        certificate_authority_arn: String,

        /// Days the CA stays restorable before permanent deletion (7-30)
        #[arg(long)]
        permanent_deletion_time_in_days: Option<i32>,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}
