use clap::Parser;

use dbspace_core::DEFAULT_API_BASE_URL;

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "dbspace")]
#[command(author, version, about = "Show storage utilization for database files")]
#[command(after_help = "Examples:
  dbspace --user alice
  dbspace --api-url http://stats.internal:7001 --user iswin\\bob

The identity must be on the server's allow-list (ALLOWED_USERS).")]
pub struct Config {
    /// Base address of the statistics API
    #[arg(long, env = "DBSPACE_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Caller identity to present to the API. Omit when a fronting proxy
    /// asserts the identity instead.
    #[arg(short, long, env = "DBSPACE_USER")]
    pub user: Option<String>,
}
