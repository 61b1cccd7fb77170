//! pindrop CLI
//!
//! Imports a Pinboard bookmark export into Raindrop.io, filing each
//! bookmark into a public or private collection by its Pinboard flags.

// CLI tool - relax pedantic lints for ergonomics
#![allow(clippy::pedantic)]

use clap::Parser;
use pindrop::{
    MigrationConfig, MigrationOptions, Pipeline, RaindropConfig, SourceSpec, MAX_BATCH_SIZE,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pindrop")]
#[command(version)]
#[command(about = "Import Pinboard bookmarks into Raindrop.io collections")]
struct Cli {
    /// Pinboard API token (user:HEX), or path of a downloaded JSON export
    #[arg(env = "PINBOARD_TOKEN")]
    pinboard_token: String,

    /// Raindrop.io access token
    #[arg(env = "RAINDROP_TOKEN")]
    raindrop_token: String,

    /// Raindrop collection that receives public pins
    #[arg(short = 'u', long, default_value = "Public")]
    public: String,

    /// Raindrop collection that receives private pins
    #[arg(short = 'r', long, default_value = "Private")]
    private: String,

    /// Raindrops per upload request (1-100)
    #[arg(long, default_value_t = MAX_BATCH_SIZE)]
    batch_size: usize,

    /// Convert the export but skip the upload
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run_migration(cli).await
}

async fn run_migration(cli: Cli) -> anyhow::Result<()> {
    let config = MigrationConfig {
        source: SourceSpec::detect(&cli.pinboard_token),
        destination: RaindropConfig::new(&cli.raindrop_token, &cli.public, &cli.private),
        options: MigrationOptions {
            batch_size: cli.batch_size,
            dry_run: cli.dry_run,
        },
    };
    config.validate()?;

    info!("Starting migration...");
    let mut pipeline = Pipeline::new(config);
    let stats = pipeline.run().await?;

    println!("\n✅ Migration Complete!");
    println!("   Pins fetched:  {}", stats.downloaded);
    println!("   Uploaded:      {}", stats.uploaded);
    println!("   Batches:       {}", stats.batches);
    println!("   Duration:      {:.2}s", stats.duration_secs);
    println!("   Throughput:    {:.0} raindrops/sec", stats.throughput());

    Ok(())
}
