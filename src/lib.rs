//! sync3c Core Library
//!
//! This library provides the core functionality for the sync3c tool, which
//! mirrors the talks of a conference-media platform to local storage, picking
//! exactly one best-fitting recording per talk.
//!
//! # Architecture
//!
//! Data flows one way through the following modules:
//! - [`catalog`] - HTTP+JSON client for conferences, events and recordings
//! - [`select`] - MIME priority table and the per-event variant selector
//! - [`download`] - Download targets and the idempotent streaming download engine
//! - [`mirror`] - Orchestration of the conference → event → recording walk
//! - [`output`] - Human-readable lines and the conference listing table

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod download;
pub mod http;
pub mod mirror;
pub mod output;
pub mod select;
mod user_agent;

// Re-export commonly used types
pub use catalog::{
    CatalogClient, CatalogError, Conference, ConferenceDetail, Event, EventDetail, Recording,
    resolve_api_base,
};
pub use download::{
    DownloadEngine, DownloadError, DownloadTarget, FetchOutcome, HttpClient, NoopProgress,
    ProgressReporter, TerminalProgress,
};
pub use http::HttpTimeouts;
pub use mirror::{
    EventOutcome, FailurePolicy, Mirror, MirrorError, MirrorOptions, MirrorStats, OnError,
    list_conferences,
};
pub use select::{MimeTable, Priority, SelectError, VariantSelector};
