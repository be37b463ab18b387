//! Error types for variant selection.

use thiserror::Error;

/// Errors raised by [`VariantSelector::select`](super::VariantSelector::select).
///
/// Finding no *eligible* recording is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The event has no recordings at all.
    #[error("event has no recordings")]
    EmptyCandidateSet,
}
