//! HTTP client for the storage statistics endpoint.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

use dbspace_core::config::{HttpConfig, IDENTITY_HEADER};
use dbspace_core::error::AppError;
use dbspace_core::models::DbStat;

/// Relative path of the statistics endpoint under the API base address.
const STATS_PATH: &str = "api/DbStats";

/// HTTP client for retrieving storage statistics from the dbspace API.
///
/// # Failure policy
///
/// The client applies the **strict** policy, uniformly:
///
/// - Transport failures (DNS, connection refused, timeout) propagate as
///   [`AppError::Transport`] / [`AppError::Timeout`]. Callers can detect
///   them with [`AppError::is_transport`] and choose to retry.
/// - A non-2xx response or an undecodable body is logged and degrades to
///   an empty sequence.
///
/// Each call is one independent round trip: no retries, no caching.
///
/// # Examples
///
/// ```no_run
/// use dbspace_client::StatsClient;
///
/// # async fn example() -> Result<(), dbspace_core::AppError> {
/// let client = StatsClient::new("http://127.0.0.1:7001", Some("alice"))?;
/// let stats = client.fetch_all().await?;
/// println!("{} files tracked", stats.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StatsClient {
    client: Client,
    base_url: Url,
}

impl StatsClient {
    /// Creates a client bound to the given API base address.
    ///
    /// When `identity` is set, it is sent on every request in the
    /// identity header the server's authorization layer reads. Deployments
    /// where a fronting proxy asserts the identity can pass `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidBaseUrl`] if the base address is
    /// malformed, [`AppError::Config`] if the identity cannot be carried
    /// in a header, and [`AppError::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(base_url_str: &str, identity: Option<&str>) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url_str)
            .map_err(|_| AppError::InvalidBaseUrl(base_url_str.to_string()))?;

        let mut headers = HeaderMap::new();
        if let Some(identity) = identity {
            let value = HeaderValue::from_str(identity).map_err(|_| {
                AppError::Config(format!("identity is not a valid header value: {}", identity))
            })?;
            headers.insert(HeaderName::from_static(IDENTITY_HEADER), value);
        }

        let http_config = HttpConfig::default();
        let client = Client::builder()
            .user_agent(concat!("dbspace/", env!("CARGO_PKG_VERSION")))
            .timeout(http_config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the current storage statistics from the API.
    ///
    /// Returns the decoded rows verbatim. An absent payload (a JSON
    /// `null` body) and every non-transport failure yield an empty
    /// sequence; see the type-level docs for the full policy. All failure
    /// paths produce a log entry.
    pub async fn fetch_all(&self) -> Result<Vec<DbStat>, AppError> {
        let url = self
            .base_url
            .join(STATS_PATH)
            .map_err(|_| AppError::InvalidBaseUrl(self.base_url.to_string()))?;

        debug!(%url, "requesting storage statistics");

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                let err = classify_transport(e);
                error!(error = %err, "transport failure calling statistics endpoint");
                return Err(err);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "statistics endpoint returned failure status"
            );
            return Ok(Vec::new());
        }

        match resp.json::<Option<Vec<DbStat>>>().await {
            Ok(stats) => {
                let stats = stats.unwrap_or_default();
                info!(records = stats.len(), "retrieved storage statistics");
                Ok(stats)
            }
            Err(e) => {
                error!(error = %e, "failed to decode statistics response");
                Ok(Vec::new())
            }
        }
    }
}

/// Maps a reqwest send-failure to the transport taxonomy. Errors here
/// happened before any HTTP response existed.
fn classify_transport(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(HttpConfig::default().timeout.as_secs())
    } else if e.is_connect() {
        AppError::Transport(format!("Connection failed: {}", e))
    } else {
        AppError::Transport(e.to_string())
    }
}
