//! Shared User-Agent strings for catalog and media HTTP clients.

/// Tool identifier appended to every User-Agent.
const TOOL_TAG: &str = "conference-media-mirror";

/// Default User-Agent for media downloads.
#[must_use]
pub(crate) fn default_download_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("sync3c/{version} ({TOOL_TAG}; media)")
}

/// Default User-Agent for catalog (JSON API) requests.
#[must_use]
pub(crate) fn default_catalog_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("sync3c/{version} ({TOOL_TAG}; catalog)")
}
