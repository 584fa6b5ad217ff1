//! Shared configuration types and wire constants.

use std::time::Duration;

/// Default base address for the statistics API when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:7001";

/// Header carrying the caller identity asserted by the fronting
/// authentication layer. The server validates it against its allow-list;
/// the relay client forwards it when configured with an identity.
pub const IDENTITY_HEADER: &str = "x-authenticated-user";

/// HTTP client configuration for calls to the statistics API.
///
/// There is deliberately no retry configuration: each relay call is a
/// single independent round trip.
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}
