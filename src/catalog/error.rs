//! Error types for catalog fetches.

use thiserror::Error;

/// Errors that can occur while listing conferences, events or recordings.
///
/// Every variant names the URL that failed so the run can report which part
/// of the catalog was unreachable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching catalog {url}: {source}")]
    Network {
        /// The catalog URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching catalog {url}")]
    Timeout {
        /// The catalog URL that timed out.
        url: String,
    },

    /// The catalog answered with a non-success status.
    #[error("HTTP {status} fetching catalog {url}")]
    HttpStatus {
        /// The catalog URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON document.
    #[error("failed to decode catalog response from {url}: {source}")]
    Decode {
        /// The catalog URL whose body failed to decode.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A catalog URL (configured or embedded in a record) is malformed.
    #[error("invalid catalog URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build catalog HTTP client: {source}")]
    Client {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    /// Creates a network error, promoting transport timeouts to [`CatalogError::Timeout`].
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url: url.into() }
        } else {
            Self::Network {
                url: url.into(),
                source,
            }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a decode error.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}
