//! Application runtime composition.

pub(crate) mod config;
pub(crate) mod exit;
pub(crate) mod settings;
pub(crate) mod terminal;

use std::io::{self, Write};

use anyhow::{Context, Result};
use sync3c_core::download::format_size;
use sync3c_core::output::render_conference_table;
use sync3c_core::{
    CatalogClient, DownloadEngine, HttpClient, MimeTable, Mirror, NoopProgress, ProgressReporter,
    TerminalProgress, list_conferences, resolve_api_base,
};
use tracing::{debug, info};

use crate::cli::{Args, Command};
use exit::{ProcessExit, determine_exit_outcome};
use settings::Settings;

/// Runs the parsed command line and returns the process outcome.
pub(crate) async fn run(args: Args) -> Result<ProcessExit> {
    let file_config = config::load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, file_config.as_ref());

    terminal::init_tracing(settings.log_level, terminal::is_no_color_requested(args.no_color));
    debug!(?args, "CLI arguments parsed");
    debug!(?settings, config_loaded = file_config.is_some(), "effective settings");

    let api_base = resolve_api_base(&settings.source);
    let catalog = CatalogClient::new(api_base, settings.timeouts)
        .context("Failed to create catalog client")?;

    match args.command {
        Some(Command::List) => run_list(&catalog).await,
        None => run_mirror(&catalog, &settings).await,
    }
}

async fn run_list(catalog: &CatalogClient) -> Result<ProcessExit> {
    let conferences = list_conferences(catalog)
        .await
        .with_context(|| format!("Failed to list conferences from {}", catalog.api_base()))?;

    let mut stdout = io::stdout();
    stdout
        .write_all(render_conference_table(&conferences).as_bytes())
        .context("Failed to write conference table")?;
    Ok(ProcessExit::Success)
}

async fn run_mirror(catalog: &CatalogClient, settings: &Settings) -> Result<ProcessExit> {
    let client = HttpClient::new(settings.timeouts).context("Failed to create download client")?;
    let engine = DownloadEngine::new(client);
    let mirror = Mirror::new(catalog, &engine, MimeTable::default());
    let options = settings.mirror_options();

    let mut progress: Box<dyn ProgressReporter> =
        if terminal::should_show_progress(settings.quiet, terminal::is_dumb_terminal()) {
            Box::new(TerminalProgress::new())
        } else {
            Box::new(NoopProgress)
        };

    info!(
        source = catalog.api_base(),
        destination = %options.destination.display(),
        "sync3c starting"
    );

    let mut stdout = io::stdout();
    let stats = mirror
        .run(&options, progress.as_mut(), &mut stdout)
        .await
        .context("Mirror run aborted")?;

    info!(
        downloaded = stats.downloaded(),
        skipped = stats.skipped(),
        failed = stats.failed(),
        size = %format_size(stats.bytes()),
        total = stats.total(),
        "Mirror complete"
    );

    Ok(determine_exit_outcome(stats.completed(), stats.failed()))
}
