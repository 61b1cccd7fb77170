// Migration tool - pedantic lints relaxed for CLI ergonomics
#![allow(clippy::pedantic)]

//! # pindrop
//!
//! `pindrop` imports a Pinboard bookmark export into Raindrop.io.
//!
//! Each pin is remapped to Raindrop's creation shape and filed by its
//! Pinboard flags: pins still marked to-read stay out of any collection
//! (they land in Raindrop's Unsorted), everything else goes into a public
//! or private collection depending on the pin's visibility. The collection
//! names default to "Public" and "Private" and must already exist in the
//! Raindrop account.
//!
//! ## Usage
//!
//! ```bash
//! # Live migration straight from the Pinboard API
//! pindrop user:A1B2C3D4E5 <raindrop-access-token>
//!
//! # From a downloaded export, into custom collections
//! pindrop ./pins.json <raindrop-token> --public Shared --private Personal
//!
//! # Preview without uploading
//! pindrop ./pins.json <raindrop-token> --dry-run
//! ```
//!
//! Uploads run in batches of up to 100 and the first failed batch aborts
//! the run. Already uploaded batches are not rolled back, so re-running
//! after a partial failure duplicates raindrops; see the README for
//! operational caveats.

#![warn(missing_docs)]

pub mod config;
pub mod connectors;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod raindrop;

pub use config::{
    ExportFileConfig, MigrationConfig, MigrationOptions, PinboardConfig, RaindropConfig,
    SourceSpec, MAX_BATCH_SIZE,
};
pub use connectors::{create_source, Pin, PinSource, YesNo};
pub use convert::{convert, to_raindrop};
pub use error::{Error, Result};
pub use pipeline::{MigrationStats, Pipeline};
pub use raindrop::{Collection, CollectionRef, CollectionTargets, Raindrop, RaindropClient};
