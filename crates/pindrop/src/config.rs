//! Configuration for a migration run.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default Pinboard API root.
pub const PINBOARD_API_URL: &str = "https://api.pinboard.in/v1";

/// Default Raindrop API root.
pub const RAINDROP_API_URL: &str = "https://api.raindrop.io/rest/v1";

/// Raindrop's bulk-creation endpoint accepts at most this many raindrops
/// per request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Main migration configuration.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Where the pin export comes from.
    pub source: SourceSpec,
    /// Destination account and target collection names.
    pub destination: RaindropConfig,
    /// Migration options.
    pub options: MigrationOptions,
}

/// Where the pin export comes from.
///
/// The CLI takes a single argument that is either a Pinboard API token or
/// the path of a previously downloaded export. The ambiguity is resolved
/// once, by [`SourceSpec::detect`]; everything downstream only sees the
/// tagged form.
#[derive(Debug, Clone)]
pub enum SourceSpec {
    /// A local JSON export file.
    ExportFile(ExportFileConfig),
    /// The live Pinboard API.
    Pinboard(PinboardConfig),
}

impl SourceSpec {
    /// Resolves a raw token argument: a value naming an existing file is a
    /// cached export, anything else is treated as an API token.
    #[must_use]
    pub fn detect(token: &str) -> Self {
        let path = Path::new(token);
        if path.exists() {
            Self::ExportFile(ExportFileConfig {
                path: path.to_path_buf(),
            })
        } else {
            Self::Pinboard(PinboardConfig::new(token))
        }
    }
}

/// Configuration for the cached-export source.
#[derive(Debug, Clone)]
pub struct ExportFileConfig {
    /// Path of the JSON export file.
    pub path: PathBuf,
}

/// Configuration for the live Pinboard source.
#[derive(Debug, Clone)]
pub struct PinboardConfig {
    /// Pinboard API root.
    pub url: String,
    /// Pinboard API token (`user:HEX`).
    pub token: String,
}

impl PinboardConfig {
    /// Creates a config pointing at the public Pinboard API.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            url: PINBOARD_API_URL.to_string(),
            token: token.to_string(),
        }
    }
}

/// Configuration for the Raindrop destination.
#[derive(Debug, Clone)]
pub struct RaindropConfig {
    /// Raindrop REST API root.
    pub url: String,
    /// Raindrop access token, sent as a bearer token.
    pub token: String,
    /// Title of the collection that receives public pins.
    pub public: String,
    /// Title of the collection that receives private pins.
    pub private: String,
}

impl RaindropConfig {
    /// Creates a config pointing at the public Raindrop API.
    #[must_use]
    pub fn new(token: &str, public: &str, private: &str) -> Self {
        Self {
            url: RAINDROP_API_URL.to_string(),
            token: token.to_string(),
            public: public.to_string(),
            private: private.to_string(),
        }
    }
}

/// Migration options.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Raindrops per upload request (1 to [`MAX_BATCH_SIZE`]).
    pub batch_size: usize,
    /// Convert the export but skip the upload.
    pub dry_run: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
            dry_run: false,
        }
    }
}

impl MigrationConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.options.batch_size == 0 || self.options.batch_size > MAX_BATCH_SIZE {
            return Err(Error::Config(format!(
                "batch size must be between 1 and {}",
                MAX_BATCH_SIZE
            )));
        }
        if self.destination.public.is_empty() || self.destination.private.is_empty() {
            return Err(Error::Config(
                "collection names cannot be empty".to_string(),
            ));
        }
        if self.destination.token.is_empty() {
            return Err(Error::Config("Raindrop token cannot be empty".to_string()));
        }
        Ok(())
    }
}
