//! Transfer progress reporting.

use indicatif::{BinaryBytes, ProgressBar, ProgressStyle};

/// Receives progress for one transfer at a time.
///
/// The engine calls [`start`](Self::start) once the response headers are in,
/// [`advance`](Self::advance) with the cumulative byte count after every
/// chunk, and [`finish`](Self::finish) once the transfer ends, successful or
/// not.
pub trait ProgressReporter {
    /// A transfer of `url` into `label` begins; `total` is the content length if known.
    fn start(&mut self, url: &str, label: &str, total: Option<u64>);

    /// `transferred` bytes have been written so far. Never decreases within a transfer.
    fn advance(&mut self, transferred: u64);

    /// The transfer is over.
    fn finish(&mut self);
}

/// Reporter that discards everything (quiet mode, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&mut self, _url: &str, _label: &str, _total: Option<u64>) {}

    fn advance(&mut self, _transferred: u64) {}

    fn finish(&mut self) {}
}

/// In-place terminal progress bar with binary-prefixed byte counts.
///
/// With a known length it renders `12.50 MiB / 1.20 GiB [=====>   ]`; without
/// one it falls back to a spinner showing the running total.
#[derive(Debug, Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    /// Creates a reporter with no active bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for TerminalProgress {
    fn start(&mut self, _url: &str, label: &str, total: Option<u64>) {
        let bar = match total.filter(|total| *total > 0) {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::with_template(
                        "{binary_bytes} / {binary_total_bytes} [{bar:60}] {percent}% {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::with_template("{spinner} {binary_bytes} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                bar
            }
        };
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, transferred: u64) {
        if let Some(bar) = &self.bar {
            if bar.length().is_none() {
                bar.tick();
            }
            bar.set_position(transferred);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// Formats a byte count with binary unit prefixes (KiB, MiB, GiB, ...).
#[must_use]
pub fn format_size(bytes: u64) -> String {
    BinaryBytes(bytes).to_string()
}
