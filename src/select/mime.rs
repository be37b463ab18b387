//! MIME type priority and extension table.

/// Extension used for MIME types missing from the table.
pub const UNKNOWN_EXTENSION: &str = "bin";

/// Built-in table, most preferred first.
const DEFAULT_ENTRIES: [(&str, &str); 7] = [
    ("video/webm", "webm"),
    ("video/mp4", "mp4"),
    ("video/ogg", "ogm"),
    ("audio/ogg", "ogg"),
    ("audio/opus", "opus"),
    ("audio/mpeg", "mp3"),
    ("application/x-subrip", "srt"),
];

/// Rank of a MIME type in a [`MimeTable`]. Lower is better.
///
/// `Unknown` orders after every `Ranked` value, so unlisted types still take
/// part in selection but only win when nothing ranked is eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Index into the table.
    Ranked(usize),
    /// Not in the table.
    Unknown,
}

impl Priority {
    /// Returns true if the MIME type was not found in the table.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

/// Immutable ordered mapping of MIME type → file extension.
///
/// Position in the table is the selection priority. Built once at startup and
/// handed to the selector and target derivation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTable {
    entries: Vec<(String, String)>,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES)
    }
}

impl MimeTable {
    /// Builds a table from `(mime, extension)` pairs, most preferred first.
    ///
    /// MIME types are matched case-insensitively. If a type is listed twice the
    /// first entry wins.
    #[must_use]
    pub fn new<I, M, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (M, E)>,
        M: AsRef<str>,
        E: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(mime, ext)| {
                (
                    mime.as_ref().trim().to_ascii_lowercase(),
                    ext.as_ref().trim_start_matches('.').to_string(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Returns the priority of `mime`.
    #[must_use]
    pub fn priority(&self, mime: &str) -> Priority {
        self.position(mime).map_or(Priority::Unknown, Priority::Ranked)
    }

    /// Returns the file extension (without dot) for `mime`, or [`UNKNOWN_EXTENSION`].
    #[must_use]
    pub fn extension(&self, mime: &str) -> &str {
        self.position(mime)
            .map_or(UNKNOWN_EXTENSION, |index| self.entries[index].1.as_str())
    }

    /// Iterates MIME types in priority order.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(mime, _)| mime.as_str())
    }

    /// Number of ranked MIME types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no MIME type is ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, mime: &str) -> Option<usize> {
        let mime = mime.trim();
        self.entries
            .iter()
            .position(|(known, _)| known.eq_ignore_ascii_case(mime))
    }
}
