//! Language-aware variant selector.

use super::error::SelectError;
use super::mime::{MimeTable, Priority};
use crate::catalog::Recording;

/// Picks at most one recording per event.
///
/// Selection is a pure function of the event's original language, the
/// configured preferred language and the candidate list. The running best is
/// replaced by a candidate when, in order:
///
/// 1. the candidate matches the preferred language and the best does not
///    (and the reverse never happens),
/// 2. the candidate has a strictly better MIME [`Priority`],
/// 3. the priorities tie and the candidate is strictly wider.
///
/// Ties beyond that keep the earlier candidate, so the result is stable for a
/// given catalog order.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    table: MimeTable,
    preferred_language: String,
}

impl VariantSelector {
    /// Creates a selector. An empty `preferred_language` means no preference.
    #[must_use]
    pub fn new(table: MimeTable, preferred_language: &str) -> Self {
        Self {
            table,
            preferred_language: preferred_language.trim().to_lowercase(),
        }
    }

    /// Returns the MIME table used for ranking.
    #[must_use]
    pub fn mime_table(&self) -> &MimeTable {
        &self.table
    }

    /// Returns the preferred language, if one is set.
    #[must_use]
    pub fn preferred_language(&self) -> Option<&str> {
        (!self.preferred_language.is_empty()).then_some(self.preferred_language.as_str())
    }

    /// Returns true if `recording` is in the preferred or the original language.
    ///
    /// Dubs into any other language are never eligible.
    #[must_use]
    pub fn is_eligible(&self, original_language: &str, recording: &Recording) -> bool {
        self.matches_preference(recording) || recording.language == original_language
    }

    /// Chooses the best eligible recording.
    ///
    /// Returns `Ok(None)` when no candidate is eligible; recordings without a
    /// fetch URL are never chosen.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::EmptyCandidateSet`] if `candidates` is empty.
    pub fn select<'a>(
        &self,
        original_language: &str,
        candidates: &'a [Recording],
    ) -> Result<Option<&'a Recording>, SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::EmptyCandidateSet);
        }

        let mut best: Option<Ranked<'a>> = None;
        for recording in candidates {
            if !self.is_eligible(original_language, recording)
                || recording.recording_url.is_empty()
            {
                continue;
            }

            let candidate = Ranked {
                recording,
                preferred: self.matches_preference(recording),
                priority: self.table.priority(&recording.mime_type),
            };
            if best.as_ref().is_none_or(|current| candidate.beats(current)) {
                best = Some(candidate);
            }
        }

        Ok(best.map(|ranked| ranked.recording))
    }

    fn matches_preference(&self, recording: &Recording) -> bool {
        !self.preferred_language.is_empty()
            && recording.language.to_lowercase() == self.preferred_language
    }
}

struct Ranked<'a> {
    recording: &'a Recording,
    preferred: bool,
    priority: Priority,
}

impl Ranked<'_> {
    fn beats(&self, current: &Ranked<'_>) -> bool {
        if self.preferred != current.preferred {
            return self.preferred;
        }
        match self.priority.cmp(&current.priority) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => self.recording.width > current.recording.width,
        }
    }
}
