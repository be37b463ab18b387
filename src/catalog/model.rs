//! Typed catalog records.
//!
//! Only the fields the tool acts on are modeled; unknown fields are ignored.
//! Missing fields and explicit `null`s decode to the type's default so a
//! sparse record never aborts a run.

use serde::{Deserialize, Deserializer};

/// Payload of `GET <api>/conferences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConferenceList {
    /// All conferences known to the catalog, in catalog order.
    #[serde(deserialize_with = "nullable")]
    pub conferences: Vec<Conference>,
}

/// A named series of talks with its own event listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Conference {
    /// Short identifier, e.g. `33c3`.
    #[serde(deserialize_with = "nullable")]
    pub acronym: String,
    /// Display title; also names the on-disk directory.
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    /// Catalog URL listing this conference's events.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub aspect_ratio: String,
    #[serde(deserialize_with = "nullable")]
    pub logo_url: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
}

/// Payload of `GET <conference.url>`: the conference plus its events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConferenceDetail {
    #[serde(flatten)]
    pub conference: Conference,
    /// Talks in catalog order.
    #[serde(default, deserialize_with = "nullable")]
    pub events: Vec<Event>,
}

/// A single talk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "nullable")]
    pub guid: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    /// Free-form description, may contain HTML markup.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Presenter names; the first one prefixes the filename.
    #[serde(deserialize_with = "nullable")]
    pub persons: Vec<String>,
    /// Language code the talk was given in, e.g. `eng` or `deu`.
    #[serde(deserialize_with = "nullable")]
    pub original_language: String,
    /// Duration in seconds.
    #[serde(deserialize_with = "nullable")]
    pub length: u64,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub release_date: String,
    #[serde(deserialize_with = "nullable")]
    pub frontend_link: String,
    /// Catalog URL returning this event's recordings.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// Payload of `GET <event.url>`: the event plus its recordings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    /// Media variants, unordered.
    #[serde(default, deserialize_with = "nullable")]
    pub recordings: Vec<Recording>,
}

/// One concrete media encoding of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Recording {
    #[serde(deserialize_with = "nullable")]
    pub mime_type: String,
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    /// Pixel width; 0 for audio and subtitle tracks.
    #[serde(deserialize_with = "nullable")]
    pub width: u32,
    #[serde(deserialize_with = "nullable")]
    pub height: u32,
    #[serde(deserialize_with = "nullable")]
    pub high_quality: bool,
    /// Size in MiB as reported by the catalog.
    #[serde(deserialize_with = "nullable")]
    pub size: u64,
    /// Duration in seconds.
    #[serde(deserialize_with = "nullable")]
    pub length: u64,
    /// Direct URL of the media file.
    #[serde(deserialize_with = "nullable")]
    pub recording_url: String,
    /// Catalog URL of this recording record.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub filename: String,
    #[serde(deserialize_with = "nullable")]
    pub state: String,
}

impl Recording {
    /// Returns true for recordings with a pixel width.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.width > 0
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
