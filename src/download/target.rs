//! On-disk identity of a download.
//!
//! The target path is derived only from catalog metadata, never from response
//! headers, so the same (conference, event, language, MIME type) always maps
//! to the same file. That stability is what makes skip-if-exists work across
//! runs without any manifest.

use std::path::{Path, PathBuf};

use super::filename::{MAX_FILENAME_BYTES, sanitize_segment, truncate_utf8};
use crate::catalog::{Conference, Event, Recording};
use crate::select::MimeTable;

/// A (directory, filename) pair identifying one downloaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadTarget {
    directory: PathBuf,
    filename: String,
}

impl DownloadTarget {
    /// Creates a target from an already-safe directory and filename.
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// Derives the target for `recording` of `event`:
    /// `<destination>/<conference title>/<filename>`.
    #[must_use]
    pub fn derive(
        destination: &Path,
        conference: &Conference,
        event: &Event,
        recording: &Recording,
        mime_table: &MimeTable,
    ) -> Self {
        let directory = destination.join(sanitize_segment(&conference.title));
        let extension = mime_table.extension(&recording.mime_type);
        Self {
            directory,
            filename: derive_filename(event, recording, extension),
        }
    }

    /// Directory the file lives in.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name within [`directory`](Self::directory).
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Builds `"{presenter} - {title} ({subtitle}) [{language}].{ext}"`.
///
/// The presenter part uses the first listed person and is omitted when there
/// is none; the subtitle part is omitted when empty; the language part only
/// appears when the recording is not in the event's original language.
#[must_use]
pub fn derive_filename(event: &Event, recording: &Recording, extension: &str) -> String {
    let mut stem = String::new();
    if let Some(presenter) = event.persons.first().filter(|p| !p.trim().is_empty()) {
        stem.push_str(&sanitize_segment(presenter));
        stem.push_str(" - ");
    }
    stem.push_str(&sanitize_segment(&event.title));
    if !event.subtitle.trim().is_empty() {
        stem.push_str(" (");
        stem.push_str(&sanitize_segment(&event.subtitle));
        stem.push(')');
    }
    if recording.language != event.original_language {
        stem.push_str(" [");
        stem.push_str(&sanitize_segment(&recording.language));
        stem.push(']');
    }

    let extension = sanitize_segment(extension);
    let budget = MAX_FILENAME_BYTES.saturating_sub(extension.len() + 1);
    let stem = truncate_utf8(&stem, budget).trim_end();
    format!("{stem}.{extension}")
}
