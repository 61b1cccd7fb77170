//! Migration pipeline orchestration.

use crate::config::MigrationConfig;
use crate::connectors::{create_source, PinSource};
use crate::convert::convert;
use crate::error::{Error, Result};
use crate::raindrop::{CollectionTargets, RaindropClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{error, info};

/// Migration statistics.
#[derive(Debug, Default, Clone)]
pub struct MigrationStats {
    /// Pins fetched from the source.
    pub downloaded: u64,
    /// Raindrops sent to the destination. A dry run counts the raindrops
    /// it would have sent.
    pub uploaded: u64,
    /// Upload batches sent, or planned in a dry run.
    pub batches: u64,
    /// Total duration in seconds.
    pub duration_secs: f64,
}

impl MigrationStats {
    /// Raindrops per second over the whole run.
    #[must_use]
    pub fn throughput(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.uploaded as f64 / self.duration_secs
        } else {
            0.0
        }
    }
}

/// Migration pipeline: fetch, resolve, convert, upload.
pub struct Pipeline {
    config: MigrationConfig,
    source: Box<dyn PinSource>,
    destination: RaindropClient,
}

impl Pipeline {
    /// Creates a pipeline from a validated configuration.
    #[must_use]
    pub fn new(config: MigrationConfig) -> Self {
        let source = create_source(&config.source);
        let destination = RaindropClient::new(config.destination.clone());
        Self {
            config,
            source,
            destination,
        }
    }

    /// Runs the migration.
    ///
    /// Batches are uploaded sequentially in export order and the first
    /// failed batch aborts the run. Batches uploaded before the failure
    /// stay on the destination.
    pub async fn run(&mut self) -> Result<MigrationStats> {
        let start = Instant::now();
        let mut stats = MigrationStats::default();

        info!("Fetching pins from {} source", self.source.source_type());
        let pins = self.source.fetch_pins().await?;
        stats.downloaded = pins.len() as u64;
        info!("Fetched {} pins", pins.len());

        let targets = self.resolve_targets().await?;
        let raindrops = convert(&pins, &targets);

        let batch_size = self.config.options.batch_size;
        if self.config.options.dry_run {
            info!("Dry run - not uploading {} raindrops", raindrops.len());
            stats.uploaded = raindrops.len() as u64;
            stats.batches = raindrops.len().div_ceil(batch_size) as u64;
        } else {
            let total_batches = raindrops.len().div_ceil(batch_size);
            let progress = create_progress_bar(raindrops.len() as u64);

            for (index, batch) in raindrops.chunks(batch_size).enumerate() {
                info!(
                    "Uploading batch {}/{} ({} raindrops)",
                    index + 1,
                    total_batches,
                    batch.len()
                );
                self.destination.create_raindrops(batch).await?;
                info!("Finished batch {}/{}", index + 1, total_batches);

                stats.uploaded += batch.len() as u64;
                stats.batches += 1;
                progress.inc(batch.len() as u64);
            }

            progress.finish_with_message("Upload complete");
        }

        stats.duration_secs = start.elapsed().as_secs_f64();
        info!(
            "Migration complete: {} pins fetched, {} raindrops uploaded in {} batches ({:.2}s)",
            stats.downloaded, stats.uploaded, stats.batches, stats.duration_secs
        );

        Ok(stats)
    }

    /// Resolves both target collection names, logging every miss before
    /// giving up so the user can fix both names in one go.
    async fn resolve_targets(&self) -> Result<CollectionTargets> {
        let destination = &self.config.destination;
        info!(
            "Looking up '{}' and '{}' collections in Raindrop",
            destination.public, destination.private
        );
        let (public, private) = self.destination.find_collections().await?;

        let mut missing = Vec::new();
        match public {
            Some(id) => info!("Found public collection '{}' (id {})", destination.public, id),
            None => {
                error!(
                    "Could not find public collection named '{}'",
                    destination.public
                );
                missing.push(destination.public.clone());
            }
        }
        match private {
            Some(id) => info!("Found private collection '{}' (id {})", destination.private, id),
            None => {
                error!(
                    "Could not find private collection named '{}'",
                    destination.private
                );
                missing.push(destination.private.clone());
            }
        }

        match (public, private) {
            (Some(public), Some(private)) => Ok(CollectionTargets { public, private }),
            _ => Err(Error::CollectionNotFound(missing.join(", "))),
        }
    }
}

/// Creates a configured progress bar for upload tracking.
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
