//! Shared HTTP client construction for catalog and media traffic.
//!
//! Both clients share one timeout policy. Only the connect phase is bounded by
//! default: a media transfer may legitimately run for a long time, so a read
//! timeout is opt-in.

use std::time::Duration;

use reqwest::Client;

/// Default HTTP connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Timeout settings applied to every HTTP client the tool builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    /// Upper bound for establishing a connection.
    pub connect: Duration,
    /// Upper bound between two reads of a response body, if any.
    pub read: Option<Duration>,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read: None,
        }
    }
}

impl HttpTimeouts {
    /// Builds timeouts from whole seconds; `None` leaves reads unbounded.
    #[must_use]
    pub fn from_secs(connect_secs: u64, read_secs: Option<u64>) -> Self {
        Self {
            connect: Duration::from_secs(connect_secs),
            read: read_secs.map(Duration::from_secs),
        }
    }
}

/// Builds a reqwest client with the shared policy.
///
/// `gzip` is enabled for JSON catalog traffic only; media bodies are written
/// byte-for-byte so the reported content length matches what lands on disk.
pub(crate) fn build_client(
    user_agent: String,
    timeouts: HttpTimeouts,
    gzip: bool,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(timeouts.connect)
        .user_agent(user_agent)
        .gzip(gzip);
    if let Some(read) = timeouts.read {
        builder = builder.read_timeout(read);
    }
    builder.build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts_bound_connect_only() {
        let timeouts = HttpTimeouts::default();
        assert_eq!(timeouts.connect, Duration::from_secs(30));
        assert!(timeouts.read.is_none());
    }

    #[test]
    fn test_from_secs_maps_optional_read() {
        let timeouts = HttpTimeouts::from_secs(5, Some(120));
        assert_eq!(timeouts.connect, Duration::from_secs(5));
        assert_eq!(timeouts.read, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_build_client_accepts_both_compression_modes() {
        assert!(build_client("ua".to_string(), HttpTimeouts::default(), true).is_ok());
        assert!(build_client("ua".to_string(), HttpTimeouts::from_secs(1, Some(1)), false).is_ok());
    }
}
