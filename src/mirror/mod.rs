//! Walks the catalog and mirrors one recording per event.
//!
//! Work is strictly sequential: conferences in catalog order, events in
//! listing order, and one transfer at a time. User-facing lines are written
//! to a caller-supplied writer so the walk can be observed in tests; transfer
//! progress goes through a [`ProgressReporter`].
//!
//! Catalog failures always abort. Empty events and failed transfers follow
//! the [`FailurePolicy`] in [`MirrorOptions`].

mod error;
mod policy;

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::catalog::{CatalogClient, CatalogError, Conference, Event};
use crate::download::{DownloadEngine, DownloadTarget, FetchOutcome, ProgressReporter};
use crate::output;
use crate::select::{MimeTable, SelectError, VariantSelector};

pub use error::MirrorError;
pub use policy::{EventOutcome, FailurePolicy, MirrorStats, OnError};

/// Default destination directory.
pub const DEFAULT_DESTINATION: &str = "./downloads/";

/// Parameters of one mirror run.
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    /// Root directory; each conference gets a subdirectory named after its title.
    pub destination: PathBuf,
    /// Conference acronym to restrict the run to, compared case-insensitively.
    /// Empty mirrors every conference.
    pub conference: String,
    /// Preferred recording language. Empty means no preference.
    pub language: String,
    /// Select and derive targets without transferring anything.
    pub dry_run: bool,
    /// How event-level failures are handled.
    pub policy: FailurePolicy,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            conference: String::new(),
            language: String::new(),
            dry_run: false,
            policy: FailurePolicy::default(),
        }
    }
}

impl MirrorOptions {
    fn matches(&self, conference: &Conference) -> bool {
        let filter = self.conference.trim();
        filter.is_empty() || conference.acronym.eq_ignore_ascii_case(filter)
    }
}

/// Drives the catalog → selector → engine pipeline.
#[derive(Debug)]
pub struct Mirror<'a> {
    catalog: &'a CatalogClient,
    engine: &'a DownloadEngine,
    mime_table: MimeTable,
}

impl<'a> Mirror<'a> {
    /// Creates a mirror using the given clients and MIME table.
    #[must_use]
    pub fn new(catalog: &'a CatalogClient, engine: &'a DownloadEngine, mime_table: MimeTable) -> Self {
        Self {
            catalog,
            engine,
            mime_table,
        }
    }

    /// Runs the full walk and returns per-run counters.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Catalog`] if any catalog request fails, and
    /// [`MirrorError::EmptyCandidateSet`] or [`MirrorError::Transfer`] when the
    /// matching policy is [`OnError::Abort`]. Write failures on `out` are
    /// reported as [`MirrorError::Output`].
    #[instrument(skip_all, fields(conference = %options.conference, dry_run = options.dry_run))]
    pub async fn run<W: Write>(
        &self,
        options: &MirrorOptions,
        progress: &mut dyn ProgressReporter,
        out: &mut W,
    ) -> Result<MirrorStats, MirrorError> {
        let selector = VariantSelector::new(self.mime_table.clone(), &options.language);
        let conferences = self.catalog.list_conferences().await?;
        let mut stats = MirrorStats::new();

        for conference in conferences.iter().filter(|c| options.matches(c)) {
            writeln!(out, "{}", output::conference_line(conference))?;
            stats.record_conference();

            let detail = self.catalog.conference_events(conference).await?;
            for event in &detail.events {
                writeln!(out, "{}", output::event_line(event))?;
                let outcome = self
                    .mirror_event(conference, event, &selector, options, progress, out)
                    .await?;
                debug!(event = %event.title, outcome = ?outcome, "event finished");
                stats.record(&outcome);
                writeln!(out)?;
            }
        }

        if stats.conferences() > 0 {
            writeln!(out, "Done.")?;
        } else {
            writeln!(
                out,
                "Couldn't find any conference with acronym {}",
                options.conference.trim()
            )?;
        }

        info!(
            conferences = stats.conferences(),
            downloaded = stats.downloaded(),
            skipped = stats.skipped(),
            failed = stats.failed(),
            no_variant = stats.no_variant(),
            "mirror run finished"
        );
        Ok(stats)
    }

    async fn mirror_event<W: Write>(
        &self,
        conference: &Conference,
        event: &Event,
        selector: &VariantSelector,
        options: &MirrorOptions,
        progress: &mut dyn ProgressReporter,
        out: &mut W,
    ) -> Result<EventOutcome, MirrorError> {
        let detail = self.catalog.event_recordings(event).await?;
        let recordings = &detail.recordings;

        for recording in recordings
            .iter()
            .filter(|r| selector.is_eligible(&event.original_language, r))
        {
            writeln!(out, "{}", output::recording_line(recording))?;
            if selector.mime_table().priority(&recording.mime_type).is_unknown() {
                warn!(mime = %recording.mime_type, "unknown MIME type");
                writeln!(out, "Unknown mimetype encountered:{}", recording.mime_type)?;
            }
        }

        let chosen = match selector.select(&event.original_language, recordings) {
            Ok(Some(recording)) => recording,
            Ok(None) => {
                writeln!(
                    out,
                    "Could not find any desired version of this event, sorry. Skipping!"
                )?;
                return Ok(EventOutcome::NoEligibleVariant);
            }
            Err(SelectError::EmptyCandidateSet) => {
                return match options.policy.empty_event {
                    OnError::Abort => Err(MirrorError::EmptyCandidateSet {
                        conference: conference.acronym.clone(),
                        event: event.title.clone(),
                    }),
                    OnError::Continue => {
                        warn!(event = %event.title, "event has no recordings");
                        writeln!(out, "No recordings found for this event, skipping.")?;
                        Ok(EventOutcome::Empty)
                    }
                };
            }
        };

        let target = DownloadTarget::derive(
            &options.destination,
            conference,
            event,
            chosen,
            selector.mime_table(),
        );

        if options.dry_run {
            let path = target.path();
            writeln!(
                out,
                "Would download: {} -> {}",
                chosen.recording_url,
                path.display()
            )?;
            return Ok(EventOutcome::Planned {
                path,
                url: chosen.recording_url.clone(),
            });
        }

        if !target.path().exists() {
            writeln!(out, "Downloading: {}", chosen.recording_url)?;
        }
        match self
            .engine
            .fetch(&target, &chosen.recording_url, progress)
            .await
        {
            Ok(FetchOutcome::Skipped { path }) => {
                writeln!(out, "File {} already exists - skipping!", path.display())?;
                Ok(EventOutcome::Skipped { path })
            }
            Ok(FetchOutcome::Completed { path, bytes }) => {
                Ok(EventOutcome::Downloaded { path, bytes })
            }
            Err(source) => match options.policy.transfer_failed {
                OnError::Abort => Err(MirrorError::Transfer {
                    conference: conference.acronym.clone(),
                    event: event.title.clone(),
                    source,
                }),
                OnError::Continue => {
                    warn!(event = %event.title, error = %source, "download failed, continuing");
                    writeln!(out, "Download failed: {source}")?;
                    Ok(EventOutcome::Failed {
                        error: source.to_string(),
                    })
                }
            },
        }
    }
}

/// Fetches all conferences sorted by title, for listing mode.
///
/// # Errors
///
/// Returns [`CatalogError`] if the conference list cannot be fetched.
pub async fn list_conferences(catalog: &CatalogClient) -> Result<Vec<Conference>, CatalogError> {
    let mut conferences = catalog.list_conferences().await?;
    conferences.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(conferences)
}
