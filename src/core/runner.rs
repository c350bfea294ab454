//! Report run: library → availability → aggregation → sinks.
//!
//! Every step is awaited in order. Sinks only run once aggregation has
//! finished, so a failure anywhere before them leaves nothing published.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::adapters::{AvailabilitySource, LibrarySource, Notifier, PasteService};
use crate::config::Settings;
use crate::domain::Summary;
use crate::error::{Error, Result};
use crate::report::{write_report, Notification};

use super::aggregator::Aggregator;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Per-provider summary
    pub summary: Summary,
    /// Movies in the library
    pub movies_total: usize,
    /// Movies skipped because their lookup failed (only with `continue_on_error`)
    pub movies_skipped: usize,
    /// Report file written, if saving is enabled
    pub report_path: Option<PathBuf>,
    /// Paste URL, if publishing is enabled
    pub paste_url: Option<String>,
    /// Whether the chat notification was sent
    pub notified: bool,
}

/// Drives one report run
pub struct Runner<'a> {
    settings: &'a Settings,
    library: &'a dyn LibrarySource,
    availability: &'a dyn AvailabilitySource,
    paste: Option<&'a dyn PasteService>,
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> Runner<'a> {
    /// Create a runner with no paste service or notifier attached
    pub fn new(
        settings: &'a Settings,
        library: &'a dyn LibrarySource,
        availability: &'a dyn AvailabilitySource,
    ) -> Self {
        Self {
            settings,
            library,
            availability,
            paste: None,
            notifier: None,
        }
    }

    /// Attach the paste service used when publishing is enabled
    pub fn with_paste(mut self, paste: &'a dyn PasteService) -> Self {
        self.paste = Some(paste);
        self
    }

    /// Attach the notifier used when notifications are enabled
    pub fn with_notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Execute the run, printing progress to stdout
    pub async fn run(&self) -> Result<RunOutcome> {
        self.run_with_output(&mut std::io::stdout()).await
    }

    /// Execute the run, writing progress lines to `out`
    #[instrument(skip(self, out), fields(region = %self.settings.region))]
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        let (summary, movies_total, movies_skipped) = self.collect(out).await?;
        info!(
            providers = summary.len(),
            movies = movies_total,
            skipped = movies_skipped,
            "Aggregation complete"
        );

        let sinks = &self.settings.sinks;

        let report_path = if sinks.save_enabled {
            Some(write_report(&summary, &sinks.report_dir, Utc::now()).await?)
        } else {
            None
        };

        let paste_url = if sinks.microbin_enabled {
            let paste = self
                .paste
                .ok_or_else(|| Error::config("paste publishing enabled without a paste service"))?;
            Some(paste.publish(&summary.to_pretty_json()?).await?)
        } else {
            None
        };

        let notified = if sinks.discord_enabled {
            let notifier = self
                .notifier
                .ok_or_else(|| Error::config("notifications enabled without a notifier"))?;
            let notification = Notification::from_summary(&summary, paste_url.as_deref());
            notifier.notify(&notification).await?;
            true
        } else {
            false
        };

        Ok(RunOutcome {
            summary,
            movies_total,
            movies_skipped,
            report_path,
            paste_url,
            notified,
        })
    }

    /// Fetch the library and fold every movie's availability into a summary
    async fn collect<W: Write>(&self, out: &mut W) -> Result<(Summary, usize, usize)> {
        let movies = self.library.list_movies().await?;
        let total = movies.len();
        info!(
            library = self.library.name(),
            availability = self.availability.name(),
            movies = total,
            "Fetched library"
        );
        writeln!(out, "Movies found: {}", total)?;

        let mut aggregator = Aggregator::new(self.settings.region.as_str());
        let mut skipped = 0;

        for (idx, movie) in movies.iter().enumerate() {
            writeln!(out, "({}/{}) {}", idx + 1, total, movie.title)?;

            let availability = match self.availability.get_providers(movie.tmdb_id).await {
                Ok(availability) => availability,
                Err(e) if self.settings.continue_on_error => {
                    warn!(title = %movie.title, tmdb_id = movie.tmdb_id, error = %e, "Skipping movie");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            aggregator.add(movie, &availability);
        }

        Ok((aggregator.finish(), total, skipped))
    }
}
