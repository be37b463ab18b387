//! Catalog client for the conference-media platform's public JSON API.
//!
//! The catalog is a three-level hierarchy, each level fetched from a URL
//! carried by its parent:
//!
//! - `GET <api>/conferences` → [`Conference`] list
//! - `GET <conference.url>` → [`ConferenceDetail`] with its [`Event`]s
//! - `GET <event.url>` → [`EventDetail`] with its [`Recording`]s
//!
//! # Example
//!
//! ```no_run
//! use sync3c_core::catalog::{CatalogClient, resolve_api_base};
//! use sync3c_core::HttpTimeouts;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogClient::new(resolve_api_base("media.ccc.de"), HttpTimeouts::default())?;
//! for conference in catalog.list_conferences().await? {
//!     println!("{} - {}", conference.acronym, conference.title);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod model;

pub use client::{CatalogClient, DEFAULT_SOURCE, resolve_api_base};
pub use error::CatalogError;
pub use model::{Conference, ConferenceDetail, ConferenceList, Event, EventDetail, Recording};
