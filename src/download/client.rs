//! HTTP client wrapper for streaming media downloads.

use std::path::Path;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::DownloadError;
use super::progress::ProgressReporter;
use crate::http::{HttpTimeouts, build_client};
use crate::user_agent;

/// HTTP client for media downloads.
///
/// Created once per run and reused for every recording, taking advantage of
/// connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Client`] if the underlying client cannot be built.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, DownloadError> {
        let client = build_client(user_agent::default_download_user_agent(), timeouts, false)
            .map_err(|source| DownloadError::Client { source })?;
        Ok(Self { client })
    }

    /// Issues a GET for `url` and returns the response once headers are in.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if the URL is invalid, the request fails or
    /// the server answers with a non-success status.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, DownloadError> {
        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        debug!(
            status = status.as_u16(),
            content_length = ?response.content_length(),
            "response headers received"
        );
        Ok(response)
    }
}

/// Streams the response body to `file`, reporting the cumulative byte count
/// after every chunk. Returns the number of bytes written.
///
/// If the connection drops mid-body, the bytes received so far are flushed
/// before the network error is returned, so the partial file stays on disk.
pub(crate) async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(e) => {
                if let Err(flush_err) = writer.flush().await {
                    warn!(error = %flush_err, "could not flush partial file");
                }
                warn!(bytes_written, "transfer interrupted");
                return Err(DownloadError::network(url, e));
            }
        };

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path, e))?;

        bytes_written += chunk.len() as u64;
        progress.advance(bytes_written);
    }

    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path, e))?;

    Ok(bytes_written)
}
