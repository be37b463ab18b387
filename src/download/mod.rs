//! Download engine for streaming one recording to disk.
//!
//! This module materializes a chosen recording at a deterministic path,
//! exactly once.
//!
//! # Features
//!
//! - Idempotent skip: an existing file at the target path is never re-fetched
//! - Streaming downloads (memory-efficient for multi-GiB recordings)
//! - Progress reporting after every received chunk via [`ProgressReporter`]
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sync3c_core::download::{DownloadEngine, DownloadTarget, HttpClient, NoopProgress};
//! use sync3c_core::HttpTimeouts;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DownloadEngine::new(HttpClient::new(HttpTimeouts::default())?);
//! let target = DownloadTarget::new(Path::new("./downloads/33C3"), "Talk.webm");
//! let outcome = engine
//!     .fetch(&target, "https://cdn.example.org/talk.webm", &mut NoopProgress)
//!     .await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

mod client;
mod engine;
mod error;
pub mod filename;
mod progress;
mod target;

pub use client::HttpClient;
pub use engine::{DownloadEngine, FetchOutcome};
pub use error::DownloadError;
pub use progress::{NoopProgress, ProgressReporter, TerminalProgress, format_size};
pub use target::{DownloadTarget, derive_filename};
