//! Idempotent single-file download engine.
//!
//! Per transfer: `NotStarted → Skipped`, or `NotStarted → InFlight →
//! Completed | Failed`. The engine processes one transfer at a time and
//! blocks its caller until the transfer ends.
//!
//! # Idempotency
//!
//! File existence at the target path is the only check. Length and content
//! are never compared, and a failed transfer leaves whatever it wrote on disk,
//! so a truncated file from an earlier failure is skipped by later runs.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs::{self, OpenOptions};
use tracing::{debug, info, instrument};

use super::client::{HttpClient, stream_to_file};
use super::error::DownloadError;
use super::progress::ProgressReporter;
use super::target::DownloadTarget;

/// Result of a [`DownloadEngine::fetch`] that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A file already existed at the target path; no request was made.
    Skipped {
        /// The existing file.
        path: PathBuf,
    },
    /// The recording was transferred.
    Completed {
        /// The written file.
        path: PathBuf,
        /// Bytes written.
        bytes: u64,
    },
}

impl FetchOutcome {
    /// Path of the file on disk, whichever way it got there.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Skipped { path } | Self::Completed { path, .. } => path,
        }
    }
}

/// Streams recordings to their targets.
#[derive(Debug, Clone)]
pub struct DownloadEngine {
    client: HttpClient,
}

impl DownloadEngine {
    /// Creates an engine using `client` for every transfer.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Materializes `source_url` at `target`, unless the file already exists.
    ///
    /// Steps: existence check, `create_dir_all` on the target directory,
    /// exclusive create of the file, GET, streaming copy with progress, flush.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if the destination cannot be inspected,
    /// created or written, or if the request or body transfer fails.
    #[instrument(skip(self, target, progress), fields(path = %target.path().display(), url = %source_url))]
    pub async fn fetch(
        &self,
        target: &DownloadTarget,
        source_url: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<FetchOutcome, DownloadError> {
        let path = target.path();

        match fs::metadata(&path).await {
            Ok(_) => {
                info!("file already exists, skipping");
                return Ok(FetchOutcome::Skipped { path });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(DownloadError::io(path, e)),
        }

        fs::create_dir_all(target.directory())
            .await
            .map_err(|e| DownloadError::io(target.directory(), e))?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| DownloadError::io(path.clone(), e))?;

        let response = self.client.get(source_url).await?;
        let total = response.content_length();
        debug!(total = ?total, "transfer started");

        progress.start(source_url, target.filename(), total);
        let copied = stream_to_file(&mut file, response, source_url, &path, progress).await;
        progress.finish();
        drop(file);

        let bytes = copied?;
        info!(bytes, "download complete");
        Ok(FetchOutcome::Completed { path, bytes })
    }
}
