//! Variant selection: picking one recording per event.
//!
//! - [`MimeTable`] - Immutable ordered MIME type → extension mapping; order is priority
//! - [`VariantSelector`] - Language-aware reduction of an event's recordings to one
//! - [`SelectError`] - Raised only for an event with no recordings at all
//!
//! # Example
//!
//! ```
//! use sync3c_core::catalog::Recording;
//! use sync3c_core::select::{MimeTable, VariantSelector};
//!
//! let selector = VariantSelector::new(MimeTable::default(), "");
//! let candidates = vec![
//!     Recording { mime_type: "audio/opus".into(), language: "eng".into(), recording_url: "https://cdn/a.opus".into(), ..Default::default() },
//!     Recording { mime_type: "video/webm".into(), language: "eng".into(), width: 1920, recording_url: "https://cdn/a.webm".into(), ..Default::default() },
//! ];
//! let best = selector.select("eng", &candidates).unwrap().unwrap();
//! assert_eq!(best.mime_type, "video/webm");
//! ```

mod error;
mod mime;
mod selector;

pub use error::SelectError;
pub use mime::{MimeTable, Priority, UNKNOWN_EXTENSION};
pub use selector::VariantSelector;
