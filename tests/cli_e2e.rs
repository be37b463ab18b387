//! End-to-end CLI tests for the sync3c binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::MockServer;

mod support;
use support::{
    api_base, conference, event, mount_conferences, mount_events, mount_media, mount_media_status,
    mount_recordings, recording,
};

/// Binary with an isolated config home and deterministic terminal settings.
fn sync3c(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sync3c").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env("TERM", "xterm")
        .env_remove("RUST_LOG");
    cmd
}

/// Mounts one conference with a working and a broken talk.
async fn mount_mixed_catalog(server: &MockServer, broken_status: Option<u16>) {
    let conf = conference(server, "33c3", "Congress 2016");
    let fine = event(server, "fine", "Fine", "eng");
    let broken = event(server, "broken", "Broken", "eng");
    mount_conferences(server, vec![conf.clone()]).await;
    mount_events(server, &conf, vec![fine.clone(), broken.clone()]).await;
    mount_recordings(
        server,
        &fine,
        vec![recording(server, "fine", "video/webm", "eng", 1920)],
    )
    .await;
    mount_recordings(
        server,
        &broken,
        vec![recording(server, "broken", "video/mp4", "eng", 1280)],
    )
    .await;
    match broken_status {
        Some(status) => mount_media_status(server, "broken", status).await,
        None => mount_media(server, "broken", b"mp4", 1).await,
    }
}

#[test]
fn test_binary_help_displays_usage() {
    let config_home = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mirror conference talks"))
        .stdout(predicate::str::contains("--destination"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_binary_version_displays_version() {
    let config_home = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync3c"));
}

#[test]
fn test_binary_invalid_flag_returns_error() {
    let config_home = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_sorted_table() {
    let server = MockServer::start().await;
    mount_conferences(
        &server,
        vec![
            conference(&server, "camp2023", "Chaos Communication Camp"),
            conference(&server, "33c3", "33C3 Works for me"),
        ],
    )
    .await;

    let config_home = TempDir::new().unwrap();
    let output = sync3c(&config_home)
        .args(["list", "--source", &api_base(&server)])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "CONFERENCE | TITLE");
    assert!(lines[2].starts_with("33c3"));
    assert!(lines[3].starts_with("camp2023"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_mirror_downloads_and_exits_zero() {
    let server = MockServer::start().await;
    mount_mixed_catalog(&server, None).await;
    mount_media(&server, "fine", b"webm", 1).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--source")
        .arg(api_base(&server))
        .arg("-d")
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Conference: 33c3 (Congress 2016)"))
        .stdout(predicate::str::contains("Downloading:"))
        .stdout(predicate::str::contains("Done."));

    let folder = dest.path().join("Congress 2016");
    assert_eq!(fs::read(folder.join("Alice - Fine.webm")).unwrap(), b"webm");
    assert_eq!(fs::read(folder.join("Alice - Broken.mp4")).unwrap(), b"mp4");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_partial_failure_exits_with_code_two() {
    let server = MockServer::start().await;
    mount_mixed_catalog(&server, Some(500)).await;
    mount_media(&server, "fine", b"webm", 1).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--source")
        .arg(api_base(&server))
        .arg("-d")
        .arg(dest.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Download failed:"))
        .stdout(predicate::str::contains("Done."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_abort_policy_exits_with_code_one() {
    let server = MockServer::start().await;
    mount_mixed_catalog(&server, Some(404)).await;
    mount_media(&server, "fine", b"webm", 1).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--source")
        .arg(api_base(&server))
        .arg("-d")
        .arg(dest.path())
        .args(["--on-transfer-error", "abort"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Broken"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    mount_mixed_catalog(&server, None).await;
    mount_media(&server, "fine", b"webm", 0).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--source")
        .arg(api_base(&server))
        .arg("-d")
        .arg(dest.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would download:"));

    assert!(!dest.path().join("Congress 2016").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_conference_name_reports_and_succeeds() {
    let server = MockServer::start().await;
    mount_conferences(&server, vec![conference(&server, "33c3", "Congress 2016")]).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    sync3c(&config_home)
        .arg("--source")
        .arg(api_base(&server))
        .arg("-d")
        .arg(dest.path())
        .args(["-n", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Couldn't find any conference with acronym nope",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_supplies_destination() {
    let server = MockServer::start().await;
    mount_mixed_catalog(&server, None).await;
    mount_media(&server, "fine", b"webm", 1).await;

    let config_home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let config_dir = config_home.path().join("sync3c");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "# test config\ndestination = \"{}\"\nsource = \"{}\"\n",
            dest.path().display(),
            api_base(&server)
        ),
    )
    .unwrap();

    sync3c(&config_home).assert().success();

    assert!(dest.path().join("Congress 2016").join("Alice - Fine.webm").exists());
}

#[test]
fn test_invalid_config_file_fails_with_line_number() {
    let config_home = TempDir::new().unwrap();
    let config_dir = config_home.path().join("sync3c");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "concurrency = 4\n").unwrap();

    sync3c(&config_home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_unreachable_catalog_exits_with_code_one() {
    let config_home = TempDir::new().unwrap();
    sync3c(&config_home)
        .args(["list", "--source", "http://127.0.0.1:9/public", "--connect-timeout", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}
