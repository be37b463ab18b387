//! Filesystem-safe path segments.
//!
//! Catalog titles are arbitrary text; everything that ends up in a path goes
//! through [`sanitize_segment`] first so a title can never escape the
//! destination directory or produce a name the filesystem rejects.

/// Longest filename (in bytes) handed to the filesystem.
pub const MAX_FILENAME_BYTES: usize = 240;

/// Turns arbitrary text into a single safe path segment.
///
/// - `/ \ : * ? " < > |` and control characters become `_`
/// - leading/trailing whitespace and trailing dots are trimmed
/// - an empty result (including `.` and `..`) becomes `_`
///
/// Spaces and non-ASCII letters are kept so names stay readable.
#[must_use]
pub fn sanitize_segment(value: &str) -> String {
    let mapped: String = value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = mapped.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Cuts `value` to at most `max_bytes` bytes on a character boundary.
#[must_use]
pub fn truncate_utf8(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
