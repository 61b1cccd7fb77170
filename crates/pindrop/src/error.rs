//! Error types for the migration tool.

use thiserror::Error;

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a migration run.
#[derive(Error, Debug)]
pub enum Error {
    /// The pin export could not be fetched from Pinboard or read from disk.
    #[error("Pin export fetch failed: {0}")]
    SourceFetch(String),

    /// The pin export was fetched but is not a valid list of pins.
    #[error("Invalid pin export: {0}")]
    InvalidExport(String),

    /// The Raindrop collection listing could not be fetched or parsed.
    #[error("Collection listing failed: {0}")]
    CollectionFetch(String),

    /// A raindrop batch was rejected by the destination.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// A token was rejected by one of the services.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A configured target collection does not exist in the Raindrop account.
    #[error("Collection not found in Raindrop: {0}")]
    CollectionNotFound(String),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
