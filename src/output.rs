//! Human-readable progress lines and the conference listing table.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Conference, Event, Recording};

/// Descriptions longer than this are shortened.
const DESCRIPTION_LIMIT: usize = 48;

/// Characters kept from a shortened description before the ellipsis.
const DESCRIPTION_KEEP: usize = 45;

#[allow(clippy::expect_used)]
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex is valid")); // Static pattern, safe to panic

/// Strips markup and line breaks from an event description and shortens it
/// to 45 characters plus `...` when it exceeds 48.
#[must_use]
pub fn summarize_description(description: &str) -> String {
    let text = TAG_PATTERN.replace_all(description, "");
    let text = decode_entities(&text).replace(['\r', '\n'], "");
    let text = text.trim();

    if text.chars().count() > DESCRIPTION_LIMIT {
        let mut short: String = text.chars().take(DESCRIPTION_KEEP).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// `Conference: <acronym> (<title>)`
#[must_use]
pub fn conference_line(conference: &Conference) -> String {
    format!("Conference: {} ({})", conference.acronym, conference.title)
}

/// `Event: <title> - <description summary>`; the suffix is omitted for an
/// empty description.
#[must_use]
pub fn event_line(event: &Event) -> String {
    let summary = summarize_description(&event.description);
    if summary.is_empty() {
        format!("Event: {}", event.title)
    } else {
        format!("Event: {} - {summary}", event.title)
    }
}

/// One indented line describing an eligible recording.
#[must_use]
pub fn recording_line(recording: &Recording) -> String {
    let minutes = recording.length / 60;
    if recording.is_video() {
        format!(
            "\tFound video ({}): {} minutes, {}x{} (HD: {}, {}MiB) {}",
            recording.mime_type,
            minutes,
            recording.width,
            recording.height,
            recording.high_quality,
            recording.size,
            recording.url
        )
    } else {
        format!(
            "\tFound other/audio ({}): {} minutes (HD: {}, {}MiB) {}",
            recording.mime_type, minutes, recording.high_quality, recording.size, recording.url
        )
    }
}

/// Renders a borderless, left-aligned two-column table of conferences.
#[must_use]
pub fn render_conference_table(conferences: &[Conference]) -> String {
    const HEADERS: [&str; 2] = ["CONFERENCE", "TITLE"];

    let acronym_width = conferences
        .iter()
        .map(|c| c.acronym.chars().count())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or(0);
    let title_width = conferences
        .iter()
        .map(|c| c.title.chars().count())
        .chain(std::iter::once(HEADERS[1].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    push_row(&mut out, HEADERS[0], HEADERS[1], acronym_width);
    out.push_str(&"-".repeat(acronym_width + 1));
    out.push('+');
    out.push_str(&"-".repeat(title_width + 1));
    out.push('\n');
    for conference in conferences {
        push_row(&mut out, &conference.acronym, &conference.title, acronym_width);
    }
    out
}

fn push_row(out: &mut String, left: &str, right: &str, left_width: usize) {
    let pad = left_width.saturating_sub(left.chars().count());
    out.push_str(left);
    out.push_str(&" ".repeat(pad));
    out.push_str(" | ");
    out.push_str(right);
    out.push('\n');
}
