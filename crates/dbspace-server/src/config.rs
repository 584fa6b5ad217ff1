use clap::Parser;

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "dbspace-server")]
#[command(author, version, about = "REST API server exposing database file storage statistics")]
pub struct ServerConfig {
    /// PostgreSQL connection string for the statistics database.
    ///
    /// Optional on purpose: the server starts without it and reports the
    /// missing configuration on each statistics request instead of
    /// refusing to boot.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "7001")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Identities allowed to read statistics (comma-separated, matched
    /// case-insensitively against the authenticated caller)
    #[arg(long, env = "ALLOWED_USERS", value_delimiter = ',')]
    pub allowed_users: Vec<String>,

    /// Allowed CORS origins (comma-separated), or "*" for any origin
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}
