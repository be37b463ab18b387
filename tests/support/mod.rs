//! Shared fixtures for integration tests: a fake catalog served by wiremock.

#![allow(dead_code)]

use serde_json::{Value, json};
use sync3c_core::ProgressReporter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API base the catalog client should use for `server`.
pub fn api_base(server: &MockServer) -> String {
    format!("{}/public", server.uri())
}

/// A conference entry whose event listing lives at `/public/conferences/<acronym>`.
pub fn conference(server: &MockServer, acronym: &str, title: &str) -> Value {
    json!({
        "acronym": acronym,
        "title": title,
        "slug": acronym.to_lowercase(),
        "url": format!("{}/public/conferences/{acronym}", server.uri()),
    })
}

/// An event entry whose detail lives at `/public/events/<guid>`.
pub fn event(server: &MockServer, guid: &str, title: &str, original_language: &str) -> Value {
    json!({
        "guid": guid,
        "title": title,
        "subtitle": null,
        "description": "<p>A talk about things.</p>",
        "persons": ["Alice"],
        "original_language": original_language,
        "length": 3600,
        "url": format!("{}/public/events/{guid}", server.uri()),
    })
}

/// A recording whose media body lives at `/media/<id>`.
pub fn recording(server: &MockServer, id: &str, mime: &str, language: &str, width: u32) -> Value {
    json!({
        "mime_type": mime,
        "language": language,
        "width": width,
        "height": if width == 0 { 0 } else { width * 9 / 16 },
        "high_quality": width >= 1280,
        "size": 1,
        "length": 3600,
        "recording_url": format!("{}/media/{id}", server.uri()),
        "url": format!("{}/public/recordings/{id}", server.uri()),
    })
}

/// Mounts a `GET route` mock answering with `body` as JSON.
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts the conference list.
pub async fn mount_conferences(server: &MockServer, conferences: Vec<Value>) {
    mount_json(
        server,
        "/public/conferences",
        json!({ "conferences": conferences }),
    )
    .await;
}

/// Mounts one conference's event listing.
pub async fn mount_events(server: &MockServer, conference: &Value, events: Vec<Value>) {
    let mut body = conference.clone();
    body["events"] = Value::Array(events);
    let acronym = conference["acronym"].as_str().unwrap_or_default().to_string();
    mount_json(server, &format!("/public/conferences/{acronym}"), body).await;
}

/// Mounts one event's recordings.
pub async fn mount_recordings(server: &MockServer, event: &Value, recordings: Vec<Value>) {
    let mut body = event.clone();
    body["recordings"] = Value::Array(recordings);
    let guid = event["guid"].as_str().unwrap_or_default().to_string();
    mount_json(server, &format!("/public/events/{guid}"), body).await;
}

/// Mounts a media body at `/media/<id>`, expecting exactly `times` requests.
pub async fn mount_media(server: &MockServer, id: &str, body: &[u8], times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/media/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a failing media endpoint at `/media/<id>`.
pub async fn mount_media_status(server: &MockServer, id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/media/{id}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Progress reporter that records every callback.
#[derive(Debug, Default)]
pub struct RecordedProgress {
    pub starts: Vec<(String, Option<u64>)>,
    pub advances: Vec<u64>,
    pub finishes: usize,
}

impl ProgressReporter for RecordedProgress {
    fn start(&mut self, url: &str, _label: &str, total: Option<u64>) {
        self.starts.push((url.to_string(), total));
    }

    fn advance(&mut self, transferred: u64) {
        self.advances.push(transferred);
    }

    fn finish(&mut self) {
        self.finishes += 1;
    }
}
