//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sync3c_core::OnError;

/// Mirror conference talks from a media catalog to local storage.
///
/// For every talk of the selected conferences, sync3c picks the single best
/// recording (preferred language first, then format, then resolution) and
/// downloads it unless a file with the derived name already exists.
#[derive(Parser, Debug)]
#[command(name = "sync3c")]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (default: $XDG_CONFIG_HOME/sync3c/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Catalog host (e.g. media.ccc.de) or full API base URL
    #[arg(short = 's', long, global = true)]
    pub source: Option<String>,

    /// Connect timeout for catalog and media requests in seconds (1-3600)
    #[arg(long, value_name = "SECS", global = true, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: Option<u64>,

    /// Read timeout for catalog and media requests in seconds (1-3600)
    #[arg(long, value_name = "SECS", global = true, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: Option<u64>,

    /// Where to store downloads (default: ./downloads/)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Only mirror the conference with this acronym
    #[arg(short = 'n', long, value_name = "ACRONYM")]
    pub name: Option<String>,

    /// Preferred recording language (e.g. eng, deu)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Show what would be downloaded without transferring anything
    #[arg(long)]
    pub dry_run: bool,

    /// What to do when a talk has no recordings at all
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_empty_event: Option<OnErrorArg>,

    /// What to do when a download fails
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_transfer_error: Option<OnErrorArg>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List available conferences and exit
    List,
}

/// Command-line spelling of [`OnError`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnErrorArg {
    /// Stop the run
    Abort,
    /// Report and move on to the next talk
    Continue,
}

impl From<OnErrorArg> for OnError {
    fn from(value: OnErrorArg) -> Self {
        match value {
            OnErrorArg::Abort => Self::Abort,
            OnErrorArg::Continue => Self::Continue,
        }
    }
}
