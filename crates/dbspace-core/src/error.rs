use thiserror::Error;

/// Application-wide error types.
///
/// One enum covers both halves of the pipeline: the query side surfaces
/// [`AppError::ConnectionStringMissing`] and [`AppError::DataSource`], the
/// relay side surfaces the transport variants. Non-2xx responses and decode
/// failures never appear here: the relay degrades those to an empty result
/// (see `dbspace-client`).
#[derive(Error, Debug)]
pub enum AppError {
    /// The connection string for the statistics database is not configured.
    ///
    /// Surfaced before any connection is attempted; the display text is
    /// also the HTTP 500 body the endpoint returns for this failure.
    #[error("Connection string not configured")]
    ConnectionStringMissing,

    /// Query or connection failure at the data-source boundary.
    ///
    /// Wraps all errors from SQLx operations: connection failures, query
    /// errors, and row decoding problems.
    #[error("Database error: {0}")]
    DataSource(#[from] sqlx::Error),

    /// Network-layer failure reaching the upstream endpoint.
    ///
    /// DNS resolution, connection refused, resets: anything that failed
    /// before an HTTP response existed.
    #[error("Network error: {0}")]
    Transport(String),

    /// The request exceeded the transport-level timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The configured API base address could not be parsed.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Other invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns true for failures at the network layer, before any HTTP
    /// response was received.
    ///
    /// Transport failures are the retryable class: the upstream was never
    /// reached, so repeating the call may succeed. Everything else either
    /// reflects configuration (not retryable) or already carries a
    /// data-source diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbspace_core::AppError;
    ///
    /// assert!(AppError::Transport("connection refused".to_string()).is_transport());
    /// assert!(AppError::Timeout(30).is_transport());
    /// assert!(!AppError::ConnectionStringMissing.is_transport());
    /// ```
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Timeout(_))
    }
}
