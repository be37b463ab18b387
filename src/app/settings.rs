//! Effective settings: CLI flag > config file > built-in default.

use std::path::PathBuf;

use sync3c_core::catalog::DEFAULT_SOURCE;
use sync3c_core::http::DEFAULT_CONNECT_TIMEOUT_SECS;
use sync3c_core::mirror::DEFAULT_DESTINATION;
use sync3c_core::{FailurePolicy, HttpTimeouts, MirrorOptions};

use super::config::FileConfig;
use crate::cli::Args;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub destination: PathBuf,
    pub name: String,
    pub language: String,
    pub source: String,
    pub dry_run: bool,
    pub quiet: bool,
    pub log_level: &'static str,
    pub timeouts: HttpTimeouts,
    pub policy: FailurePolicy,
}

impl Settings {
    pub(crate) fn resolve(args: &Args, file: Option<&FileConfig>) -> Self {
        let file = file.cloned().unwrap_or_default();
        let default_policy = FailurePolicy::default();

        let quiet = args.quiet
            || (args.verbose == 0
                && file.verbosity == Some(super::config::VerbositySetting::Quiet));

        Self {
            destination: args
                .destination
                .clone()
                .or(file.destination)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION)),
            name: args.name.clone().unwrap_or_default().trim().to_lowercase(),
            language: args
                .language
                .clone()
                .or(file.language)
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            source: args
                .source
                .clone()
                .or(file.source)
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
                .trim()
                .to_string(),
            dry_run: args.dry_run,
            quiet,
            log_level: log_level(args, file.verbosity),
            timeouts: HttpTimeouts::from_secs(
                args.connect_timeout
                    .or(file.connect_timeout_secs)
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
                args.read_timeout.or(file.read_timeout_secs),
            ),
            policy: FailurePolicy {
                empty_event: args
                    .on_empty_event
                    .map(Into::into)
                    .or(file.on_empty_event)
                    .unwrap_or(default_policy.empty_event),
                transfer_failed: args
                    .on_transfer_error
                    .map(Into::into)
                    .or(file.on_transfer_error)
                    .unwrap_or(default_policy.transfer_failed),
            },
        }
    }

    pub(crate) fn mirror_options(&self) -> MirrorOptions {
        MirrorOptions {
            destination: self.destination.clone(),
            conference: self.name.clone(),
            language: self.language.clone(),
            dry_run: self.dry_run,
            policy: self.policy,
        }
    }
}

fn log_level(args: &Args, file: Option<super::config::VerbositySetting>) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => file.map_or("info", super::config::VerbositySetting::log_level),
        1 => "debug",
        _ => "trace",
    }
}
