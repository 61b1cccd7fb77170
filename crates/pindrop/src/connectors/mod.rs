//! Pin sources for the migration tool.

pub mod common;
pub mod export_file;
pub mod pinboard;

use crate::config::SourceSpec;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A bookmark as it appears in a Pinboard export.
///
/// Every field the converter reads is required here, so an export entry
/// missing one of them fails at parse time instead of surfacing later as a
/// lookup error mid-upload. Fields this tool does not map (`hash`, `meta`)
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Bookmarked URL.
    pub href: String,
    /// Title text.
    pub description: String,
    /// Free-text note.
    pub extended: String,
    /// Creation timestamp, Pinboard's only timestamp.
    pub time: String,
    /// Whitespace-separated tag string.
    pub tags: String,
    /// Whether the pin is still marked to-read.
    pub toread: YesNo,
    /// Whether the pin is publicly visible.
    pub shared: YesNo,
}

/// Pinboard's string-encoded boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// `"yes"` on the wire.
    Yes,
    /// `"no"` on the wire.
    No,
}

impl YesNo {
    /// Returns `true` for [`YesNo::Yes`].
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Trait implemented by every pin source.
#[async_trait]
pub trait PinSource: Send + Sync {
    /// Returns the source type name for logging.
    fn source_type(&self) -> &'static str;

    /// Fetches the complete pin export.
    async fn fetch_pins(&self) -> Result<Vec<Pin>>;
}

/// Creates the pin source described by a resolved source spec.
#[must_use]
pub fn create_source(spec: &SourceSpec) -> Box<dyn PinSource> {
    match spec {
        SourceSpec::ExportFile(config) => {
            Box::new(export_file::ExportFileSource::new(config.clone()))
        }
        SourceSpec::Pinboard(config) => Box::new(pinboard::PinboardSource::new(config.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportFileConfig, PinboardConfig};

    #[test]
    fn test_pin_deserialization() {
        let json = r#"{
            "href": "https://example.com/",
            "description": "Example",
            "extended": "A note",
            "time": "2020-05-04T10:00:00Z",
            "tags": "rust tools",
            "toread": "no",
            "shared": "yes"
        }"#;

        let pin: Pin = serde_json::from_str(json).unwrap();
        assert_eq!(pin.href, "https://example.com/");
        assert_eq!(pin.description, "Example");
        assert_eq!(pin.extended, "A note");
        assert_eq!(pin.time, "2020-05-04T10:00:00Z");
        assert_eq!(pin.tags, "rust tools");
        assert_eq!(pin.toread, YesNo::No);
        assert_eq!(pin.shared, YesNo::Yes);
    }

    #[test]
    fn test_pin_ignores_unmapped_fields() {
        let json = r#"{
            "href": "https://example.com/",
            "description": "Example",
            "extended": "",
            "time": "2020-05-04T10:00:00Z",
            "tags": "",
            "toread": "no",
            "shared": "no",
            "hash": "0c3bd4f5f1b7d2fa9f1f0a8bdf5a9b26",
            "meta": "92959aa0a9d88caf2b0e0b2b7ff25d1a"
        }"#;

        assert!(serde_json::from_str::<Pin>(json).is_ok());
    }

    #[test]
    fn test_pin_missing_field_fails() {
        let json = r#"{
            "description": "Example",
            "extended": "",
            "time": "2020-05-04T10:00:00Z",
            "tags": "",
            "toread": "no",
            "shared": "no"
        }"#;

        assert!(serde_json::from_str::<Pin>(json).is_err());
    }

    #[test]
    fn test_pin_rejects_unknown_flag_value() {
        let json = r#"{
            "href": "https://example.com/",
            "description": "Example",
            "extended": "",
            "time": "2020-05-04T10:00:00Z",
            "tags": "",
            "toread": "maybe",
            "shared": "no"
        }"#;

        assert!(serde_json::from_str::<Pin>(json).is_err());
    }

    #[test]
    fn test_yes_no_serialization() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"no\"");
        assert!(YesNo::Yes.is_yes());
        assert!(!YesNo::No.is_yes());
    }

    #[test]
    fn test_create_source_export_file() {
        let spec = SourceSpec::ExportFile(ExportFileConfig {
            path: "pins.json".into(),
        });
        let source = create_source(&spec);
        assert_eq!(source.source_type(), "export_file");
    }

    #[test]
    fn test_create_source_pinboard() {
        let spec = SourceSpec::Pinboard(PinboardConfig::new("user:ABC123"));
        let source = create_source(&spec);
        assert_eq!(source.source_type(), "pinboard");
    }
}
