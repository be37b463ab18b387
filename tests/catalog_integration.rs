//! Integration tests for the catalog client against a mock HTTP server.

use serde_json::json;
use sync3c_core::{CatalogClient, CatalogError, HttpTimeouts, list_conferences};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::{
    api_base, conference, event, mount_conferences, mount_events, mount_recordings, recording,
};

fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(api_base(server), HttpTimeouts::default()).unwrap()
}

#[tokio::test]
async fn test_list_conferences_decodes_catalog_order() {
    let server = MockServer::start().await;
    mount_conferences(
        &server,
        vec![
            conference(&server, "camp2023", "Chaos Communication Camp 2023"),
            conference(&server, "33c3", "33C3 Works for me"),
        ],
    )
    .await;

    let conferences = client(&server).list_conferences().await.unwrap();

    assert_eq!(conferences.len(), 2);
    assert_eq!(conferences[0].acronym, "camp2023");
    assert_eq!(conferences[1].acronym, "33c3");
    assert!(conferences[0].url.ends_with("/public/conferences/camp2023"));
}

#[tokio::test]
async fn test_listing_mode_sorts_by_title() {
    let server = MockServer::start().await;
    mount_conferences(
        &server,
        vec![
            conference(&server, "camp2023", "Chaos Communication Camp 2023"),
            conference(&server, "33c3", "33C3 Works for me"),
        ],
    )
    .await;

    let conferences = list_conferences(&client(&server)).await.unwrap();

    let titles: Vec<&str> = conferences.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["33C3 Works for me", "Chaos Communication Camp 2023"]);
}

#[tokio::test]
async fn test_conference_events_and_recordings_follow_catalog_urls() {
    let server = MockServer::start().await;
    let conf = conference(&server, "33c3", "33C3");
    let talk = event(&server, "talk-1", "Opening", "eng");
    mount_conferences(&server, vec![conf.clone()]).await;
    mount_events(&server, &conf, vec![talk.clone()]).await;
    mount_recordings(
        &server,
        &talk,
        vec![
            recording(&server, "1", "video/webm", "eng", 1920),
            recording(&server, "2", "audio/opus", "eng", 0),
        ],
    )
    .await;

    let catalog = client(&server);
    let conferences = catalog.list_conferences().await.unwrap();
    let detail = catalog.conference_events(&conferences[0]).await.unwrap();
    assert_eq!(detail.conference.acronym, "33c3");
    assert_eq!(detail.events.len(), 1);

    let event_detail = catalog.event_recordings(&detail.events[0]).await.unwrap();
    assert_eq!(event_detail.event.title, "Opening");
    assert_eq!(event_detail.event.subtitle, "");
    assert_eq!(event_detail.event.persons, ["Alice"]);
    assert_eq!(event_detail.recordings.len(), 2);
    assert_eq!(event_detail.recordings[0].width, 1920);
    assert!(event_detail.recordings[1].recording_url.ends_with("/media/2"));
}

#[tokio::test]
async fn test_unknown_and_missing_fields_are_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/conferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conferences": [{ "acronym": "minimal", "unexpected": { "nested": true } }]
        })))
        .mount(&server)
        .await;

    let conferences = client(&server).list_conferences().await.unwrap();

    assert_eq!(conferences[0].acronym, "minimal");
    assert!(conferences[0].title.is_empty());
    assert!(conferences[0].url.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/conferences"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).list_conferences().await.unwrap_err();

    match err {
        CatalogError::HttpStatus { url, status } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/public/conferences"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/conferences"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let err = client(&server).list_conferences().await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let server = MockServer::start().await;
    let base = api_base(&server);
    drop(server);

    let catalog = CatalogClient::new(base, HttpTimeouts::default()).unwrap();
    let err = catalog.list_conferences().await.unwrap_err();

    assert!(
        matches!(err, CatalogError::Network { .. } | CatalogError::Timeout { .. }),
        "got {err:?}"
    );
}
