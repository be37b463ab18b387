//! Errors that end a mirror run.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::download::DownloadError;

/// Run-ending failures. Event-level failures under a continue policy are
/// recorded as [`EventOutcome`](super::EventOutcome)s instead.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The catalog could not be listed; nothing useful can be done without it.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An event had no recordings at all (abort policy).
    #[error("no recordings found for event '{event}' of conference {conference}")]
    EmptyCandidateSet {
        /// Conference acronym.
        conference: String,
        /// Event title.
        event: String,
    },

    /// A transfer failed (abort policy).
    #[error("download failed for event '{event}' of conference {conference}: {source}")]
    Transfer {
        /// Conference acronym.
        conference: String,
        /// Event title.
        event: String,
        /// The underlying transfer error.
        #[source]
        source: DownloadError,
    },

    /// Writing progress lines failed.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for MirrorError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}
