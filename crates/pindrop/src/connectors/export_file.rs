//! Cached-export source reading pins from a local JSON file.
//!
//! Pinboard throttles `posts/all` aggressively, so users are encouraged to
//! download the export once and re-run the migration against the file.

use crate::config::ExportFileConfig;
use crate::connectors::{Pin, PinSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fs::File;
use std::io::BufReader;

/// Pin source backed by a JSON export file on disk.
pub struct ExportFileSource {
    config: ExportFileConfig,
}

impl ExportFileSource {
    /// Creates a new export-file source.
    #[must_use]
    pub fn new(config: ExportFileConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PinSource for ExportFileSource {
    fn source_type(&self) -> &'static str {
        "export_file"
    }

    async fn fetch_pins(&self) -> Result<Vec<Pin>> {
        let file = File::open(&self.config.path).map_err(|e| {
            Error::SourceFetch(format!(
                "Failed to open export file '{}': {}",
                self.config.path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            Error::InvalidExport(format!(
                "'{}' is not a Pinboard JSON export: {}",
                self.config.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
#[path = "export_file_tests.rs"]
mod tests;
