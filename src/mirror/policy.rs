//! Continue-vs-abort policy and per-event bookkeeping.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when an event-level failure happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop the whole run.
    Abort,
    /// Report the failure and move on to the next event.
    Continue,
}

impl OnError {
    /// Returns the stable label used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Continue => "continue",
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnError {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            other => Err(format!("expected 'abort' or 'continue', got '{other}'")),
        }
    }
}

/// Per-failure-class policy. Catalog failures always abort and are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailurePolicy {
    /// An event with zero recordings. Defaults to [`OnError::Abort`].
    pub empty_event: OnError,
    /// A failed transfer. Defaults to [`OnError::Continue`].
    pub transfer_failed: OnError,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            empty_event: OnError::Abort,
            transfer_failed: OnError::Continue,
        }
    }
}

/// What happened to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The chosen recording was transferred.
    Downloaded {
        /// Written file.
        path: PathBuf,
        /// Bytes written.
        bytes: u64,
    },
    /// The chosen recording was already on disk.
    Skipped {
        /// Existing file.
        path: PathBuf,
    },
    /// Dry run: the chosen recording would be written here.
    Planned {
        /// Target path.
        path: PathBuf,
        /// Source URL.
        url: String,
    },
    /// No recording satisfied the language policy.
    NoEligibleVariant,
    /// The event had no recordings (continue policy).
    Empty,
    /// The transfer failed (continue policy).
    Failed {
        /// Rendered error message.
        error: String,
    },
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorStats {
    conferences: usize,
    downloaded: usize,
    skipped: usize,
    planned: usize,
    no_variant: usize,
    empty: usize,
    failed: usize,
    bytes: u64,
}

impl MirrorStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Conferences that matched the filter and were walked.
    #[must_use]
    pub fn conferences(&self) -> usize {
        self.conferences
    }

    /// Events whose recording was transferred.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Events whose recording was already on disk.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Events planned in a dry run.
    #[must_use]
    pub fn planned(&self) -> usize {
        self.planned
    }

    /// Events without an eligible recording.
    #[must_use]
    pub fn no_variant(&self) -> usize {
        self.no_variant
    }

    /// Events without any recording.
    #[must_use]
    pub fn empty(&self) -> usize {
        self.empty
    }

    /// Events whose transfer failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Bytes transferred in this run.
    #[must_use]
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Events that ended with the file present on disk (downloaded or skipped).
    #[must_use]
    pub fn completed(&self) -> usize {
        self.downloaded + self.skipped
    }

    /// Total events processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.planned + self.no_variant + self.empty + self.failed
    }

    pub(crate) fn record_conference(&mut self) {
        self.conferences += 1;
    }

    pub(crate) fn record(&mut self, outcome: &EventOutcome) {
        match outcome {
            EventOutcome::Downloaded { bytes, .. } => {
                self.downloaded += 1;
                self.bytes += bytes;
            }
            EventOutcome::Skipped { .. } => self.skipped += 1,
            EventOutcome::Planned { .. } => self.planned += 1,
            EventOutcome::NoEligibleVariant => self.no_variant += 1,
            EventOutcome::Empty => self.empty += 1,
            EventOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_aborts_on_empty_and_continues_on_transfer() {
        let policy = FailurePolicy::default();
        assert_eq!(policy.empty_event, OnError::Abort);
        assert_eq!(policy.transfer_failed, OnError::Continue);
    }

    #[test]
    fn test_on_error_parses_case_insensitively() {
        assert_eq!("Abort".parse::<OnError>().unwrap(), OnError::Abort);
        assert_eq!(" continue ".parse::<OnError>().unwrap(), OnError::Continue);
        assert!("retry".parse::<OnError>().is_err());
        assert_eq!(OnError::Continue.to_string(), "continue");
    }

    #[test]
    fn test_stats_record_every_outcome_kind() {
        let mut stats = MirrorStats::new();
        stats.record_conference();
        stats.record(&EventOutcome::Downloaded {
            path: PathBuf::from("a.webm"),
            bytes: 10,
        });
        stats.record(&EventOutcome::Skipped {
            path: PathBuf::from("b.webm"),
        });
        stats.record(&EventOutcome::NoEligibleVariant);
        stats.record(&EventOutcome::Empty);
        stats.record(&EventOutcome::Failed {
            error: "HTTP 404".to_string(),
        });

        assert_eq!(stats.conferences(), 1);
        assert_eq!(stats.completed(), 2);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.no_variant(), 1);
        assert_eq!(stats.empty(), 1);
        assert_eq!(stats.planned(), 0);
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.bytes(), 10);
    }
}
